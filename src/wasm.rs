use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::control::BlurControl;
use crate::options::options_from_js;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// JS-facing blur control.
///
/// ```js
/// const control = new BlurringControl();
/// control.containerElement = document.querySelector("#thumbs");
/// control.overlayChangeCallback = on => toggle.checked = on;
/// control.enable({ allowTempShow: true });
/// control.bind(document.querySelector("#blur-level"));
/// ```
#[wasm_bindgen]
pub struct BlurringControl {
    control: BlurControl,
}

#[wasm_bindgen]
impl BlurringControl {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            control: BlurControl::new(),
        }
    }

    /// `options` may be omitted, a boolean (peek allowed) or an options object.
    pub fn enable(&self, options: JsValue) {
        self.control.enable(options_from_js(&options));
    }

    pub fn disable(&self) {
        self.control.disable();
    }

    pub fn bind(&self, input: HtmlInputElement) {
        self.control.bind(input);
    }

    pub fn unbind(&self) {
        self.control.unbind();
    }

    #[wasm_bindgen(getter = overlayOn)]
    pub fn overlay_on(&self) -> bool {
        self.control.overlay_on()
    }

    #[wasm_bindgen(setter = overlayOn)]
    pub fn set_overlay_on(&self, on: bool) {
        self.control.set_overlay_on(on);
    }

    /// Called with the new value after every write of `overlayOn`, and when
    /// binding creates the panel.
    #[wasm_bindgen(setter = overlayChangeCallback)]
    pub fn set_overlay_change_callback(&self, callback: Option<Function>) {
        let callback = callback.map(|func| {
            Rc::new(move |on: bool| {
                let _ = func.call1(&JsValue::NULL, &JsValue::from_bool(on));
            }) as Rc<dyn Fn(bool)>
        });
        self.control.set_overlay_change_callback(callback);
    }

    #[wasm_bindgen(getter = containerElement)]
    pub fn container_element(&self) -> Option<HtmlElement> {
        self.control.container_element()
    }

    #[wasm_bindgen(setter = containerElement)]
    pub fn set_container_element(&self, container: Option<HtmlElement>) {
        self.control.set_container_element(container);
    }

    #[wasm_bindgen(getter = overlayElement)]
    pub fn overlay_element(&self) -> Option<HtmlElement> {
        self.control.overlay_element()
    }

    #[wasm_bindgen(getter = rangeElement)]
    pub fn range_element(&self) -> Option<HtmlInputElement> {
        self.control.range_element()
    }

    #[wasm_bindgen(getter = panelId)]
    pub fn panel_id(&self) -> String {
        self.control.options().ids.panel
    }

    #[wasm_bindgen(getter = rangeId)]
    pub fn range_id(&self) -> String {
        self.control.options().ids.range
    }
}

impl Default for BlurringControl {
    fn default() -> Self {
        Self::new()
    }
}

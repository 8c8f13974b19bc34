use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

use thumb_blur_core::{BlurLevel, ElementIds, PanelHandle, BLUR_LEVEL_MAX, BLUR_LEVEL_MIN};

const PANEL_STYLE: &str = "text-align: center;";
const RANGE_WIDTH: &str = "80px";

/// Floating settings panel: a label and the blur slider.
pub(crate) struct OverlayPanel {
    root: HtmlElement,
    range: HtmlInputElement,
    #[allow(dead_code)]
    change_listener: Option<EventListener>,
}

impl OverlayPanel {
    pub(crate) fn create(
        document: &Document,
        ids: &ElementIds,
        label_text: &str,
        level: BlurLevel,
        visible: bool,
    ) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let root = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        root.set_id(&ids.panel);
        root.set_attribute("style", PANEL_STYLE)?;

        let label = document.create_element("label")?;
        label.set_attribute("for", &ids.range)?;
        label.set_text_content(Some(label_text));

        let range = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        range.set_id(&ids.range);
        range.set_type("range");
        range.set_min(&BLUR_LEVEL_MIN.to_string());
        range.set_max(&BLUR_LEVEL_MAX.to_string());
        range.set_step("1");
        range.set_value(&level.slider_value());
        range.style().set_property("width", RANGE_WIDTH)?;

        root.append_child(&label)?;
        let br = document.create_element("br")?;
        root.append_child(&br)?;
        root.append_child(&range)?;
        root.set_hidden(!visible);
        body.append_child(&root)?;

        Ok(Self {
            root,
            range,
            change_listener: None,
        })
    }

    pub(crate) fn with_change_listener(mut self, listener: EventListener) -> Self {
        self.change_listener = Some(listener);
        self
    }

    pub(crate) fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub(crate) fn range(&self) -> &HtmlInputElement {
        &self.range
    }
}

impl PanelHandle for OverlayPanel {
    fn set_visible(&self, visible: bool) {
        self.root.set_hidden(!visible);
    }

    fn remove(&self) {
        self.root.remove();
    }
}

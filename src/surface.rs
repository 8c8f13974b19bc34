use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use thumb_blur_core::BlurLevel;

/// Custom property read by the host stylesheet, e.g. `filter: var(--blur)`.
pub const BLUR_PROPERTY: &str = "--blur";

pub(crate) fn default_container() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    if let Some(body) = document.body() {
        return Some(body);
    }
    document.document_element()?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn apply_blur(container: &HtmlElement, level: BlurLevel, blur_class: &str) {
    let _ = container
        .style()
        .set_property(BLUR_PROPERTY, &level.filter_value());
    let _ = container
        .class_list()
        .toggle_with_force(blur_class, level.is_active());
}

pub(crate) fn reset_blur(container: &HtmlElement, blur_class: &str) {
    let _ = container.style().remove_property(BLUR_PROPERTY);
    let _ = container.class_list().remove_1(blur_class);
}

pub(crate) fn has_blur(container: &Element, blur_class: &str) -> bool {
    container.class_list().contains(blur_class)
}

pub(crate) fn set_marker(element: &Element, class: &str, on: bool) {
    let class_list = element.class_list();
    let _ = if on {
        class_list.add_1(class)
    } else {
        class_list.remove_1(class)
    };
}

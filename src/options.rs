use wasm_bindgen::JsValue;

use thumb_blur_core::ControlOptions;

/// Accepts `undefined`, a bare boolean (whether peeking is allowed) or an
/// options object. Anything unreadable falls back to the defaults.
pub(crate) fn options_from_js(value: &JsValue) -> ControlOptions {
    if value.is_undefined() || value.is_null() {
        return ControlOptions::default();
    }
    if let Some(allow_temp_show) = value.as_bool() {
        return ControlOptions::with_temp_show(allow_temp_show);
    }
    let raw = match js_sys::JSON::stringify(value) {
        Ok(raw) => String::from(raw),
        Err(err) => {
            gloo::console::warn!("blur control: options not serialisable", err);
            return ControlOptions::default();
        }
    };
    match ControlOptions::from_json(&raw) {
        Ok(options) => options,
        Err(err) => {
            gloo::console::warn!("blur control: using default options", err.to_string());
            ControlOptions::default()
        }
    }
}

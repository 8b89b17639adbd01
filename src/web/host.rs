//! Host Framework Check
//!
//! The filter only runs on pages where the admin scripts are loaded,
//! detected by a global such as `window.django.jQuery`.

use wasm_bindgen::JsValue;
use web_sys::Window;

/// True when every segment of `path` resolves to a defined, non-null value
pub fn host_ready(window: &Window, path: &[String]) -> bool {
    let mut current = JsValue::from(window.clone());
    for key in path {
        current = match js_sys::Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(value) => value,
            Err(_) => return false,
        };
        if current.is_undefined() || current.is_null() {
            return false;
        }
    }
    true
}

// Small helpers shared across components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Human-readable coordinate pair for marker tooltips, e.g. "28.61°, -80.60°".
pub fn format_coord(latitude: f64, longitude: f64) -> String {
    format!("{:.2}°, {:.2}°", latitude, longitude)
}

// Utility helpers shared across components.

use wasm_bindgen::JsValue;

/// Relative age for the status panel ("how stale is the feed").
pub fn format_age(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}h {m:02}m ago")
    } else if m > 0 {
        format!("{m}m {s:02}s ago")
    } else if s > 5 {
        format!("{s}s ago")
    } else {
        "just now".to_string()
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

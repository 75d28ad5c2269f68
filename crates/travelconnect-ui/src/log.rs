//! Browser console logging.
//!
//! Calls are no-ops off `wasm32` so native unit tests can exercise code that
//! logs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
pub fn debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub const fn debug(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub const fn warn(_message: &str) {}

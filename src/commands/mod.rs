//! Tauri Command Wrappers
//!
//! Frontend bindings to the host commands that reach the todo API.

mod todo;

use wasm_bindgen::prelude::*;
use todo_sync::SyncError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejections arrive either as plain strings or as JS error objects
fn transport_error(err: JsValue) -> SyncError {
    SyncError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

// Re-export all public items
pub use todo::*;

//! Frontend Configuration
//!
//! Reads an optional JSON `SyncConfig` from localStorage.

use todo_sync::SyncConfig;

const CONFIG_STORAGE_KEY: &str = "todo-sync.config";

pub fn load_config() -> SyncConfig {
    let stored = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    let Some(json) = stored else {
        return SyncConfig::default();
    };
    match SyncConfig::from_json_str(&json) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] ignoring {}: {}", CONFIG_STORAGE_KEY, e).into());
            SyncConfig::default()
        }
    }
}

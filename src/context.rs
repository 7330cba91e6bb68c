//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{PendingSync, RemoteSync};

use crate::commands::TauriRemote;
use crate::diagnostics::ConsoleSink;
use crate::store::{store_apply_outcome, store_replace_all, AppStore};

pub type UiSync = RemoteSync<TauriRemote, ConsoleSink>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Trigger to reload todos from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from backend - write
    set_reload_trigger: WriteSignal<u32>,
    sync: StoredValue<UiSync>,
}

impl AppContext {
    pub fn new(
        store: AppStore,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        sync: UiSync,
    ) -> Self {
        Self {
            store,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            sync: StoredValue::new(sync),
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Fetch the full list; on failure the current list stays as is
    pub fn fetch_all(&self) {
        let sync = self.sync.get_value();
        let store = self.store;
        spawn_local(async move {
            if let Some(todos) = sync.fetch_all().await {
                web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                store_replace_all(&store, todos);
            }
        });
    }

    /// Fire-and-forget persistence of an already-applied local change
    pub fn dispatch(&self, pending: PendingSync) {
        let sync = self.sync.get_value();
        let ctx = *self;
        spawn_local(async move {
            let outcome = sync.dispatch(pending).await;
            if store_apply_outcome(&ctx.store, &outcome) {
                ctx.reload();
            }
        });
    }
}

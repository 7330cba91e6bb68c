//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All list
//! semantics live in `todo_sync::ListStore`; these helpers only route
//! writes through the reactive field.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{DraftField, ListStore, PendingSync, SyncConfig, SyncOutcome, Todo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos, edit pointer and draft
    pub list: ListStore,
}

impl AppState {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            list: ListStore::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace all todos after a successful fetch
pub fn store_replace_all(store: &AppStore, todos: Vec<Todo>) {
    store.list().write().replace_all(todos);
}

pub fn store_set_field(store: &AppStore, field: DraftField, value: String) {
    store.list().write().form_mut().set_field(field, value);
}

/// Create or update, depending on the edit pointer
pub fn store_submit(store: &AppStore) -> Option<PendingSync> {
    store.list().write().submit()
}

pub fn store_begin_edit(store: &AppStore, position: usize) {
    store.list().write().begin_edit(position);
}

pub fn store_delete(store: &AppStore, position: usize) -> Option<PendingSync> {
    store.list().write().delete(position)
}

/// Returns `true` when a refetch should follow
pub fn store_apply_outcome(store: &AppStore, outcome: &SyncOutcome) -> bool {
    store.list().write().apply_outcome(outcome)
}

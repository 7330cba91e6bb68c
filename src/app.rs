//! Todo Editor App
//!
//! Form on top, synced list below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::RemoteSync;

use crate::commands::TauriRemote;
use crate::components::{TodoForm, TodoList};
use crate::config::load_config;
use crate::context::AppContext;
use crate::diagnostics::ConsoleSink;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = Store::new(AppState::new(config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(
        store,
        (reload_trigger, set_reload_trigger),
        RemoteSync::new(TauriRemote, ConsoleSink),
    );
    provide_context(ctx);

    // Load todos on mount and whenever a refetch is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading todos, trigger={}", trigger).into());
        ctx.fetch_all();
    });

    view! {
        <main class="todo-app">
            <TodoForm />
            <TodoList />
        </main>
    }
}

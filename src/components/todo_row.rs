//! Todo Row Component
//!
//! One record with its edit and delete affordances.

use leptos::prelude::*;
use todo_sync::{Entry, SyncState};

use crate::context::AppContext;
use crate::store::{store_begin_edit, store_delete, AppStateStoreFields};

#[component]
pub fn TodoRow(index: usize, entry: Entry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let Entry { todo, sync, .. } = entry;
    let unsynced = sync == SyncState::Unsynced;
    let is_editing = move || store.list().read().edit_pointer().target() == Some(index);

    view! {
        <div
            class="todo-row"
            class:unsynced=unsynced
            class:editing=is_editing
            title=sync.as_str()
        >
            <p class="todo-name">{todo.name}</p>
            <p class="todo-description">{todo.description}</p>

            <button type="button" class="edit-btn" on:click=move |_| store_begin_edit(&store, index)>
                "✎"
            </button>
            <button
                type="button"
                class="delete-btn"
                on:click=move |_| {
                    if let Some(pending) = store_delete(&store, index) {
                        ctx.dispatch(pending);
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}

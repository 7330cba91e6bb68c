//! Todo List Component
//!
//! Renders the collection in order. Rows are addressed by position, so the
//! key includes the index and every field that can change.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store
            .list()
            .read()
            .entries()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="todo-list">
            <For
                each=rows
                key=|(index, entry)| {
                    (
                        *index,
                        entry.key,
                        entry.todo.name.clone(),
                        entry.todo.description.clone(),
                        entry.sync,
                    )
                }
                children=move |(index, entry)| view! { <TodoRow index=index entry=entry /> }
            />

            <p class="item-count">
                {move || {
                    let list = store.list().read();
                    match list.unsynced_count() {
                        0 => format!("{} todos", list.len()),
                        n => format!("{} todos, {} not saved", list.len(), n),
                    }
                }}
            </p>
        </div>
    }
}

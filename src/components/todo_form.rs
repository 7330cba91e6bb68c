//! Todo Form Component
//!
//! Name/description inputs bound to the draft, and the submit button that
//! creates or updates depending on the edit pointer.

use leptos::prelude::*;
use todo_sync::DraftField;

use crate::context::AppContext;
use crate::store::{store_set_field, store_submit, AppStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // blank fields leave nothing to persist
        if let Some(pending) = store_submit(&store) {
            ctx.dispatch(pending);
        }
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <h2>"Todo Sync"</h2>
            <DraftInput field=DraftField::Name placeholder="Name" />
            <DraftInput field=DraftField::Description placeholder="Description" />
            <button type="submit">{move || store.list().read().submit_label()}</button>
        </form>
    }
}

/// Controlled input for one draft field
#[component]
fn DraftInput(field: DraftField, placeholder: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <input
            type="text"
            class="todo-input"
            placeholder=placeholder
            prop:value=move || store.list().read().draft().field(field).to_string()
            on:input=move |ev| store_set_field(&store, field, event_target_value(&ev))
        />
    }
}

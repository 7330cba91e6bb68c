//! Todo Commands
//!
//! Frontend bindings for todo-related host commands, plus the
//! `TodoRemote` implementation the sync adapter runs against.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use todo_sync::{
    CreateTodoInput, DeleteTodoInput, SyncError, SyncResult, Todo, TodoRemote, UpdateTodoInput,
};

use super::{invoke, transport_error};

// ========================
// Argument Structs
// ========================

/// Mutations take their fields under `input`, like the API's variables
#[derive(Serialize)]
struct InputArgs<'a, T> {
    input: &'a T,
}

fn to_args<T: Serialize>(input: &T) -> SyncResult<JsValue> {
    serde_wasm_bindgen::to_value(&InputArgs { input })
        .map_err(|e| SyncError::Decode(e.to_string()))
}

fn from_result<T: serde::de::DeserializeOwned>(result: JsValue) -> SyncResult<T> {
    serde_wasm_bindgen::from_value(result).map_err(|e| SyncError::Decode(e.to_string()))
}

// ========================
// Commands
// ========================

pub async fn list_todos() -> SyncResult<Vec<Todo>> {
    let result = invoke("list_todos", JsValue::NULL).await.map_err(transport_error)?;
    from_result(result)
}

pub async fn create_todo(input: &CreateTodoInput) -> SyncResult<Todo> {
    let result = invoke("create_todo", to_args(input)?).await.map_err(transport_error)?;
    from_result(result)
}

pub async fn update_todo(input: &UpdateTodoInput) -> SyncResult<Todo> {
    let result = invoke("update_todo", to_args(input)?).await.map_err(transport_error)?;
    from_result(result)
}

pub async fn delete_todo(input: &DeleteTodoInput) -> SyncResult<Todo> {
    let result = invoke("delete_todo", to_args(input)?).await.map_err(transport_error)?;
    from_result(result)
}

/// Remote reached through Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriRemote;

#[async_trait(?Send)]
impl TodoRemote for TauriRemote {
    async fn list(&self) -> SyncResult<Vec<Todo>> {
        list_todos().await
    }

    async fn create(&self, input: &CreateTodoInput) -> SyncResult<Todo> {
        create_todo(input).await
    }

    async fn update(&self, input: &UpdateTodoInput) -> SyncResult<Todo> {
        update_todo(input).await
    }

    async fn delete(&self, input: &DeleteTodoInput) -> SyncResult<Todo> {
        delete_todo(input).await
    }
}

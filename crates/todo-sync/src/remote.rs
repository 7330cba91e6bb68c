//! Remote Contract
//!
//! Abstract interface of the persistence service. Implementations live with
//! the transport (Tauri IPC in the UI crate, test doubles in tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SyncResult;
use crate::record::{Todo, TodoId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub name: String,
    pub description: String,
}

/// Full replace by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoInput {
    pub id: TodoId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoInput {
    pub id: TodoId,
}

/// Persistence service reachable through four coarse calls.
///
/// Futures are not required to be `Send`: the editor runs on a single
/// UI thread and browser transports hold `JsValue`s across awaits.
#[async_trait(?Send)]
pub trait TodoRemote {
    /// Fetch every record
    async fn list(&self) -> SyncResult<Vec<Todo>>;

    /// Create a record; the server assigns the id
    async fn create(&self, input: &CreateTodoInput) -> SyncResult<Todo>;

    async fn update(&self, input: &UpdateTodoInput) -> SyncResult<Todo>;

    async fn delete(&self, input: &DeleteTodoInput) -> SyncResult<Todo>;
}

//! Todo Sync Core
//!
//! Local reconciliation for the todo editor:
//! - record: todo entities and local correlation keys
//! - form: draft buffer with pure merge semantics
//! - list_store: optimistic collection + edit pointer
//! - sync: executes pending remote operations and reports failures
//! - remote: the transport contract implemented outside this crate

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod form;
pub mod list_store;
pub mod record;
pub mod remote;
pub mod sync;

pub use config::SyncConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink};
pub use error::{SyncError, SyncResult};
pub use form::{Draft, DraftField, DraftPatch, FormState};
pub use list_store::{EditPointer, Entry, ListStore};
pub use record::{LocalKey, SyncState, Todo, TodoId};
pub use remote::{CreateTodoInput, DeleteTodoInput, TodoRemote, UpdateTodoInput};
pub use sync::{PendingSync, RemoteSync, SyncKind, SyncOutcome};

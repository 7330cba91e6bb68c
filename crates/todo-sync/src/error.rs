//! Sync error types

use thiserror::Error;

use crate::sync::SyncKind;

/// Common result type for remote operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Failures of the remote persistence path.
///
/// None of these are fatal: the store keeps its optimistic state and the
/// failure is handed to a [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The transport could not complete the call
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with something we could not decode
    #[error("decode error: {0}")]
    Decode(String),

    /// Update/delete for a record that never received a server id
    #[error("{0} skipped: record has no server id")]
    MissingId(SyncKind),
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}

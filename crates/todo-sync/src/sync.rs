//! Remote Sync Adapter
//!
//! Turns a local mutation intent into exactly one remote call. Failures are
//! reported to the diagnostic sink and returned as an outcome; nothing here
//! retries or touches local state.

use std::fmt;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{SyncError, SyncResult};
use crate::record::{LocalKey, Todo, TodoId};
use crate::remote::{CreateTodoInput, DeleteTodoInput, TodoRemote, UpdateTodoInput};

/// Remote operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl SyncKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncKind::Fetch => "fetch",
            SyncKind::Create => "create",
            SyncKind::Update => "update",
            SyncKind::Delete => "delete",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            SyncKind::Fetch => "fetching",
            SyncKind::Create => "creating",
            SyncKind::Update => "updating",
            SyncKind::Delete => "deleting",
        }
    }
}

impl fmt::Display for SyncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote call owed for a local mutation that has already been applied.
///
/// Captures the server id and local key at mutation time, never a position.
/// `seq` orders operations issued by one store so late responses can be
/// told apart from the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending sync does nothing until dispatched"]
pub enum PendingSync {
    Create {
        key: LocalKey,
        seq: u64,
        input: CreateTodoInput,
    },
    Update {
        key: LocalKey,
        seq: u64,
        id: Option<TodoId>,
        name: String,
        description: String,
    },
    Delete {
        key: LocalKey,
        seq: u64,
        id: Option<TodoId>,
    },
}

impl PendingSync {
    pub fn key(&self) -> LocalKey {
        match self {
            PendingSync::Create { key, .. }
            | PendingSync::Update { key, .. }
            | PendingSync::Delete { key, .. } => *key,
        }
    }

    pub fn seq(&self) -> u64 {
        match self {
            PendingSync::Create { seq, .. }
            | PendingSync::Update { seq, .. }
            | PendingSync::Delete { seq, .. } => *seq,
        }
    }

    pub fn kind(&self) -> SyncKind {
        match self {
            PendingSync::Create { .. } => SyncKind::Create,
            PendingSync::Update { .. } => SyncKind::Update,
            PendingSync::Delete { .. } => SyncKind::Delete,
        }
    }
}

/// Result of a dispatched operation, addressed by local key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub key: LocalKey,
    pub seq: u64,
    pub kind: SyncKind,
    pub result: SyncResult<Todo>,
}

impl SyncOutcome {
    pub fn new(pending: &PendingSync, result: SyncResult<Todo>) -> Self {
        Self {
            key: pending.key(),
            seq: pending.seq(),
            kind: pending.kind(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Executes pending operations against a remote
#[derive(Debug, Clone)]
pub struct RemoteSync<R, S> {
    remote: R,
    sink: S,
}

impl<R: TodoRemote, S: DiagnosticSink> RemoteSync<R, S> {
    pub fn new(remote: R, sink: S) -> Self {
        Self { remote, sink }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetch the full list. `None` means the fetch failed and was reported;
    /// callers keep whatever they already have.
    pub async fn fetch_all(&self) -> Option<Vec<Todo>> {
        match self.remote.list().await {
            Ok(todos) => {
                log::debug!("[SYNC] fetched {} todos", todos.len());
                Some(todos)
            }
            Err(err) => {
                self.sink.report(Diagnostic::new(SyncKind::Fetch, None, err));
                None
            }
        }
    }

    pub async fn dispatch(&self, pending: PendingSync) -> SyncOutcome {
        let key = pending.key();
        let seq = pending.seq();
        let kind = pending.kind();

        let result = match pending {
            PendingSync::Create { input, .. } => self.remote.create(&input).await,
            PendingSync::Update {
                id: Some(id),
                name,
                description,
                ..
            } => {
                let input = UpdateTodoInput {
                    id,
                    name,
                    description,
                };
                self.remote.update(&input).await
            }
            PendingSync::Delete { id: Some(id), .. } => {
                self.remote.delete(&DeleteTodoInput { id }).await
            }
            PendingSync::Update { id: None, .. } | PendingSync::Delete { id: None, .. } => {
                Err(SyncError::MissingId(kind))
            }
        };

        match &result {
            Ok(_) => log::debug!("[SYNC] {} {} acknowledged", kind, key),
            Err(err) => self
                .sink
                .report(Diagnostic::new(kind, Some(key), err.clone())),
        }

        SyncOutcome {
            key,
            seq,
            kind,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Records calls; fails every call while `offline` is set
    #[derive(Default)]
    struct ScriptedRemote {
        offline: Cell<bool>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRemote {
        fn check(&self, call: String) -> SyncResult<()> {
            self.calls.borrow_mut().push(call);
            if self.offline.get() {
                Err(SyncError::Transport("network unreachable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoRemote for ScriptedRemote {
        async fn list(&self) -> SyncResult<Vec<Todo>> {
            self.check("list".to_string())?;
            Ok(vec![Todo::with_id("1", "A", "a")])
        }

        async fn create(&self, input: &CreateTodoInput) -> SyncResult<Todo> {
            self.check(format!("create {}", input.name))?;
            Ok(Todo::with_id("new-1", input.name.clone(), input.description.clone()))
        }

        async fn update(&self, input: &UpdateTodoInput) -> SyncResult<Todo> {
            self.check(format!("update {} {}", input.id, input.name))?;
            Ok(Todo::with_id(input.id.as_str(), input.name.clone(), input.description.clone()))
        }

        async fn delete(&self, input: &DeleteTodoInput) -> SyncResult<Todo> {
            self.check(format!("delete {}", input.id))?;
            Ok(Todo::with_id(input.id.as_str(), "", ""))
        }
    }

    fn setup() -> RemoteSync<ScriptedRemote, MemorySink> {
        RemoteSync::new(ScriptedRemote::default(), MemorySink::new(16))
    }

    #[tokio::test]
    async fn test_fetch_all_returns_remote_list() {
        let sync = setup();
        let todos = sync.fetch_all().await.expect("fetch should succeed");
        assert_eq!(todos, vec![Todo::with_id("1", "A", "a")]);
        assert!(sync.sink().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_not_returned() {
        let sync = setup();
        sync.remote().offline.set(true);

        assert!(sync.fetch_all().await.is_none());
        let reported = sync.sink().entries();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].kind, SyncKind::Fetch);
        assert_eq!(reported[0].key, None);
    }

    #[tokio::test]
    async fn test_dispatch_create_returns_server_record() {
        let sync = setup();
        let outcome = sync
            .dispatch(PendingSync::Create {
                key: LocalKey(4),
                seq: 1,
                input: CreateTodoInput {
                    name: "N".to_string(),
                    description: "d".to_string(),
                },
            })
            .await;

        assert_eq!(outcome.key, LocalKey(4));
        assert_eq!(outcome.kind, SyncKind::Create);
        assert_eq!(outcome.result.unwrap().id, Some(TodoId::new("new-1")));
        assert_eq!(*sync.remote().calls.borrow(), vec!["create N"]);
    }

    #[tokio::test]
    async fn test_dispatch_update_uses_captured_id() {
        let sync = setup();
        let outcome = sync
            .dispatch(PendingSync::Update {
                key: LocalKey(1),
                seq: 1,
                id: Some(TodoId::new("7")),
                name: "A2".to_string(),
                description: "a2".to_string(),
            })
            .await;

        assert!(outcome.is_ok());
        assert_eq!(*sync.remote().calls.borrow(), vec!["update 7 A2"]);
    }

    #[tokio::test]
    async fn test_missing_id_skips_remote_and_reports() {
        let sync = setup();
        let outcome = sync
            .dispatch(PendingSync::Delete {
                key: LocalKey(2),
                seq: 1,
                id: None,
            })
            .await;

        assert_eq!(outcome.result, Err(SyncError::MissingId(SyncKind::Delete)));
        assert!(sync.remote().calls.borrow().is_empty());
        assert_eq!(sync.sink().latest().unwrap().key, Some(LocalKey(2)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_once() {
        let sync = setup();
        sync.remote().offline.set(true);

        let outcome = sync
            .dispatch(PendingSync::Delete {
                key: LocalKey(9),
                seq: 1,
                id: Some(TodoId::new("9")),
            })
            .await;

        assert!(!outcome.is_ok());
        assert_eq!(sync.sink().len(), 1);
        assert_eq!(sync.remote().calls.borrow().len(), 1);
    }
}

//! Diagnostic Sinks
//!
//! Failures of the remote path are never shown as errors to the user; they
//! are reported here. Sinks are pluggable so the UI can print to the console
//! while tests assert on what was reported.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::error::SyncError;
use crate::record::LocalKey;
use crate::sync::SyncKind;

/// One reported failure
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    pub kind: SyncKind,
    /// Entry the failed operation was issued for (`None` for fetches)
    pub key: Option<LocalKey>,
    pub error: SyncError,
}

impl Diagnostic {
    pub fn new(kind: SyncKind, key: Option<LocalKey>, error: SyncError) -> Self {
        Self {
            at: Utc::now(),
            kind,
            key,
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "error {} todo {}: {}", self.kind.verb(), key, self.error),
            None => write!(f, "error {} todos: {}", self.kind.verb(), self.error),
        }
    }
}

/// Capability for reporting sync failures
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Fan out to two sinks
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn report(&self, diagnostic: Diagnostic) {
        self.0.report(diagnostic.clone());
        self.1.report(diagnostic);
    }
}

/// Forwards to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::error!("[SYNC] {}", diagnostic);
    }
}

/// Rolling in-memory buffer keeping the most recent diagnostics.
///
/// Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct MemorySink {
    entries: Arc<Mutex<VecDeque<Diagnostic>>>,
    capacity: usize,
}

impl MemorySink {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Snapshot, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn latest(&self) -> Option<Diagnostic> {
        self.lock().back().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: Diagnostic) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(n: u64) -> Diagnostic {
        Diagnostic::new(
            SyncKind::Create,
            Some(LocalKey(n)),
            SyncError::Transport(format!("offline {}", n)),
        )
    }

    #[test]
    fn test_memory_sink_drops_oldest() {
        let sink = MemorySink::new(2);
        for n in 1..=3 {
            sink.report(make_diagnostic(n));
        }
        let keys: Vec<_> = sink.entries().iter().map(|d| d.key).collect();
        assert_eq!(keys, vec![Some(LocalKey(2)), Some(LocalKey(3))]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new(8);
        let handle = sink.clone();
        sink.report(make_diagnostic(1));
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.latest().unwrap().key, Some(LocalKey(1)));
    }

    #[test]
    fn test_pair_reports_to_both() {
        let a = MemorySink::new(4);
        let b = MemorySink::new(4);
        (a.clone(), b.clone()).report(make_diagnostic(7));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_display_names_operation() {
        let text = make_diagnostic(3).to_string();
        assert_eq!(text, "error creating todo #3: transport error: offline 3");

        let fetch = Diagnostic::new(SyncKind::Fetch, None, SyncError::Decode("bad".into()));
        assert_eq!(fetch.to_string(), "error fetching todos: decode error: bad");
    }
}

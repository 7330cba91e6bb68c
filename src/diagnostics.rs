//! Browser Console Diagnostics

use todo_sync::{Diagnostic, DiagnosticSink};

/// Reports sync failures to the devtools console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: Diagnostic) {
        web_sys::console::error_1(&format!("[SYNC] {}", diagnostic).into());
    }
}

//! Collecting diagnostic sink.

use crate::{Diagnostic, DiagnosticSink};

/// Collects diagnostics in report order and counts errors.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Take the collected diagnostics. The error count is kept, so the
    /// queue still decides the exit status after flushing.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }
}

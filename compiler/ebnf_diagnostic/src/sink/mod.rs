//! Append-only, lock-guarded diagnostic collection.
//!
//! Appends and traversal take the same lock, so a visitor never observes
//! a half-written entry and concurrent producers never lose one. The
//! flip side: a slow [`DiagnosticSink::for_each`] visitor blocks every
//! producer for its whole duration. Consumers that run alongside active
//! scanners should copy entries out with [`DiagnosticSink::snapshot`].

use std::path::PathBuf;

use parking_lot::Mutex;

use crate::{Diagnostic, Severity};

/// Ordered collection of diagnostics shared by one or more scanners.
///
/// Entries are kept in arrival order and are never removed or mutated.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Record a recoverable diagnostic.
    pub fn add(&self, file: impl Into<PathBuf>, line: usize, message: impl Into<String>) {
        self.push(Diagnostic::new(file, line, message));
    }

    /// Record a diagnostic with an explicit severity.
    pub fn add_with_severity(
        &self,
        file: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
        severity: Severity,
    ) {
        self.push(Diagnostic::with_severity(file, line, message, severity));
    }

    /// Record a prebuilt diagnostic.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }

    /// Record several diagnostics under one lock acquisition, keeping
    /// them contiguous in the sink.
    pub fn extend(&self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.entries.lock().extend(diagnostics);
    }

    /// Visit every entry in arrival order while holding the lock.
    pub fn for_each(&self, mut visitor: impl FnMut(&Diagnostic)) {
        let entries = self.entries.lock();
        for diagnostic in entries.iter() {
            visitor(diagnostic);
        }
    }

    /// Copy all entries out, releasing the lock before returning.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of entries with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Whether any scan reporting here hit a fatal condition.
    pub fn has_fatal(&self) -> bool {
        self.entries.lock().iter().any(Diagnostic::is_fatal)
    }
}

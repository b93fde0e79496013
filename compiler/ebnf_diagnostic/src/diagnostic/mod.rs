//! A single diagnostic record: where it happened and what went wrong.

use std::fmt;
use std::path::{Path, PathBuf};

/// How a diagnostic affected the scan that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Reported and scanning continued (the offending token is still
    /// emitted, flagged as not well-formed).
    Recoverable,
    /// No recovery was possible; the scan stopped producing tokens.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Recoverable => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// A diagnostic entry. Immutable once created.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    file: PathBuf,
    line: usize,
    message: String,
    severity: Severity,
}

impl Diagnostic {
    /// Create a recoverable diagnostic.
    pub fn new(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::with_severity(file, line, message, Severity::Recoverable)
    }

    /// Create a diagnostic with an explicit severity.
    pub fn with_severity(
        file: impl Into<PathBuf>,
        line: usize,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Diagnostic {
            file: file.into(),
            line,
            message: message.into(),
            severity,
        }
    }

    /// File the diagnostic was reported against.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.file.display(),
            self.line,
            self.severity,
            self.message
        )
    }
}

#[cfg(test)]
mod tests;

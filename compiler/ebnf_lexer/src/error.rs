//! Fatal scan conditions.

use std::path::PathBuf;

use thiserror::Error;

/// A condition with no defined recovery. The scanner records it in the
/// diagnostic sink and then surfaces it to the caller instead of a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanError {
    /// No matcher is registered for the leading character.
    #[error("no matcher for activation symbol {symbol:?} at '{preview}'")]
    NoActivation {
        file: PathBuf,
        line: usize,
        symbol: char,
        preview: String,
    },
    /// Matchers were registered for the leading character but all of them
    /// rejected the input (unterminated terminal or comment, missing `>`,
    /// a lone `:` and the like).
    #[error("no matcher accepted input '{preview}'")]
    NoMatch {
        file: PathBuf,
        line: usize,
        preview: String,
    },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::NoActivation { line, .. } | ScanError::NoMatch { line, .. } => *line,
        }
    }

    pub fn file(&self) -> &std::path::Path {
        match self {
            ScanError::NoActivation { file, .. } | ScanError::NoMatch { file, .. } => file,
        }
    }
}

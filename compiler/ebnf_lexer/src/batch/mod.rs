//! Scanning many grammar sources at once.
//!
//! Each source gets its own scanner and position context; all of them
//! report into one shared sink. Reading the sources from disk is left to
//! the caller.

use std::path::PathBuf;

use ebnf_diagnostic::DiagnosticSink;
use rayon::prelude::*;

use crate::{tokenize, ScanConfig, Tokenized};

/// An in-memory grammar source and the file it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrammarSource {
    pub file: PathBuf,
    pub text: String,
}

impl GrammarSource {
    pub fn new(file: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        GrammarSource {
            file: file.into(),
            text: text.into(),
        }
    }
}

/// Scan every source in parallel.
///
/// Results come back in input order. Diagnostics from different sources
/// may interleave in the sink, but the entries of one source keep their
/// relative order.
#[tracing::instrument(level = "debug", skip_all, fields(sources = sources.len()))]
pub fn tokenize_batch<'a>(
    sources: &'a [GrammarSource],
    sink: &DiagnosticSink,
    config: ScanConfig,
) -> Vec<Tokenized<'a>> {
    let results: Vec<_> = sources
        .par_iter()
        .map(|source| tokenize(&source.text, &source.file, sink, config))
        .collect();
    let failed = results.iter().filter(|r| r.failure.is_some()).count();
    tracing::debug!(failed, "batch finished");
    results
}

//! Scanner for BNF/EBNF grammar source files.
//!
//! Turns grammar text into a stream of typed tokens (non-terminals,
//! terminals, definition symbols and bracketing delimiters) for a later
//! parser. Whitespace and comments are consumed but not yielded unless
//! [`ScanConfig::retain_trivia`] is set.
//!
//! # Layers
//!
//! - [`Context`]: remaining input and line/column bookkeeping.
//! - [`Matcher`]: one matcher per lexical construct, a closed enum.
//! - [`Scanner`]: the dispatch loop, with flat ([`Strategy::Pattern`]) or
//!   follow-set ([`Strategy::Predictive`]) candidate selection.
//!
//! # Errors
//!
//! A malformed non-terminal name is still yielded, flagged with
//! `well_formed == false`, and each defect goes to the
//! [`DiagnosticSink`]. Input no matcher accepts is fatal: it is recorded
//! in the sink and returned as a [`ScanError`].
//!
//! ```text
//! let sink = DiagnosticSink::new();
//! let result = tokenize(source, Path::new("expr.ebnf"), &sink, ScanConfig::default());
//! for token in &result.tokens {
//!     println!("{token}");
//! }
//! sink.for_each(|diag| eprintln!("{diag}"));
//! ```

mod batch;
mod config;
mod context;
mod engine;
mod error;
mod matcher;
mod token;

use std::path::Path;
use std::sync::Once;

pub use batch::{tokenize_batch, GrammarSource};
pub use config::{ScanConfig, Strategy, DEFAULT_PREVIEW_LEN};
pub use context::Context;
pub use ebnf_diagnostic::{Diagnostic, DiagnosticSink, Severity};
pub use engine::{global_table, ActivationTable, Scanner};
pub use error::ScanError;
pub use matcher::{Matcher, Outcome};
pub use token::{Span, Token, TokenKind};

/// Everything a full scan produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tokenized<'a> {
    /// Tokens yielded before end-of-input or the fatal condition.
    pub tokens: Vec<Token<'a>>,
    /// The fatal condition that stopped the scan, if any.
    pub failure: Option<ScanError>,
}

impl Tokenized<'_> {
    /// Whether the whole input was scanned.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Scan `source` to completion or to the first fatal condition.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.display(), len = source.len()))]
pub fn tokenize<'a>(
    source: &'a str,
    file: &'a Path,
    sink: &DiagnosticSink,
    config: ScanConfig,
) -> Tokenized<'a> {
    let mut scanner = Scanner::new(source, file, sink, config);
    let mut tokens = Vec::new();
    let failure = loop {
        match scanner.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => break None,
            Err(error) => break Some(error),
        }
    };
    Tokenized { tokens, failure }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=ebnf_lexer=debug` or `RUST_LOG=ebnf_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

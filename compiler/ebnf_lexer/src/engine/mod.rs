//! Dispatch engine: drives matchers over a [`Context`] and yields tokens.
//!
//! Each token request resets the attempt flags, picks candidates for the
//! leading character and tries them in order. Trivia is consumed and the
//! loop retries without returning. When nothing accepts, the condition is
//! recorded in the sink as fatal and surfaced as a [`ScanError`].
//!
//! # Strategies
//!
//! [`Strategy::Pattern`] always consults the activation table.
//! [`Strategy::Predictive`] first tries the follow set of the previously
//! accepted matcher and falls back to the table on a miss. Both produce
//! the same tokens and the same diagnostics for every input.

mod table;

use std::iter::FusedIterator;
use std::path::Path;

use ebnf_diagnostic::{DiagnosticSink, Severity};

use crate::config::{ScanConfig, Strategy};
use crate::context::Context;
use crate::error::ScanError;
use crate::matcher::{Matcher, Outcome};
use crate::token::Token;

pub use table::{global_table, ActivationTable};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Scanning,
    Finished,
    Failed,
}

/// Pull-based scanner over one grammar source.
///
/// Recoverable problems go to the sink while tokens keep flowing. After a
/// fatal condition, or once the input is exhausted, every further request
/// returns `Ok(None)`.
pub struct Scanner<'a, 's> {
    ctx: Context<'a>,
    sink: &'s DiagnosticSink,
    config: ScanConfig,
    table: &'static ActivationTable,
    /// Follow set of the last accepted matcher; `None` under
    /// [`Strategy::Pattern`].
    expected: Option<&'static [Matcher]>,
    state: State,
    yielded: usize,
}

impl<'a, 's> Scanner<'a, 's> {
    pub fn new(
        source: &'a str,
        file: &'a Path,
        sink: &'s DiagnosticSink,
        config: ScanConfig,
    ) -> Self {
        let expected = match config.strategy {
            Strategy::Pattern => None,
            Strategy::Predictive => Some(Matcher::ALL),
        };
        tracing::debug!(
            file = %file.display(),
            strategy = ?config.strategy,
            len = source.len(),
            "scan started"
        );
        Scanner {
            ctx: Context::new(source, file),
            sink,
            config,
            table: global_table(),
            expected,
            state: State::Scanning,
            yielded: 0,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.ctx.line()
    }

    /// Current 1-based column.
    pub fn column(&self) -> usize {
        self.ctx.column()
    }

    /// Byte offset of the next unconsumed character.
    pub fn offset(&self) -> usize {
        self.ctx.offset()
    }

    /// Whether a fatal condition stopped this scan.
    pub fn failed(&self) -> bool {
        self.state == State::Failed
    }

    /// Produce the next token.
    ///
    /// `Ok(None)` marks end-of-input. `Err` marks a fatal condition, which
    /// has already been recorded in the sink.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, ScanError> {
        if self.state != State::Scanning {
            return Ok(None);
        }
        loop {
            let Some(symbol) = self.ctx.first_char() else {
                self.state = State::Finished;
                tracing::debug!(
                    file = %self.ctx.file().display(),
                    tokens = self.yielded,
                    lines = self.ctx.line(),
                    "scan finished"
                );
                return Ok(None);
            };

            self.ctx.reset_attempt_flags();
            let (matcher, token) = match self.dispatch(symbol) {
                Ok(accepted) => accepted,
                Err(error) => return Err(self.fail(error)),
            };
            if self.expected.is_some() {
                self.expected = Some(matcher.follow_set());
            }

            if self.ctx.skip() && !self.config.retain_trivia {
                continue;
            }
            self.yielded += 1;
            tracing::trace!(
                kind = %token.kind,
                line = token.line,
                column = token.column,
                "token"
            );
            return Ok(Some(token));
        }
    }

    /// Find a matcher that accepts at the current position.
    fn dispatch(&mut self, symbol: char) -> Result<(Matcher, Token<'a>), ScanError> {
        if let Some(expected) = self.expected {
            let candidates = expected.iter().filter(|m| m.activates_on(symbol));
            if let Some(accepted) = self.try_candidates(candidates) {
                return Ok(accepted);
            }
            tracing::trace!(
                ?symbol,
                line = self.ctx.line(),
                "follow set missed; using activation table"
            );
        }

        let table = self.table;
        let Some(candidates) = table.candidates(symbol) else {
            return Err(ScanError::NoActivation {
                file: self.ctx.file().to_path_buf(),
                line: self.ctx.line(),
                symbol,
                preview: self.preview(),
            });
        };
        self.try_candidates(candidates.iter())
            .ok_or_else(|| ScanError::NoMatch {
                file: self.ctx.file().to_path_buf(),
                line: self.ctx.line(),
                preview: self.preview(),
            })
    }

    fn try_candidates<'m>(
        &mut self,
        candidates: impl Iterator<Item = &'m Matcher>,
    ) -> Option<(Matcher, Token<'a>)> {
        for &matcher in candidates {
            match matcher.attempt(&mut self.ctx, self.sink) {
                Outcome::Token(token) => {
                    self.ctx.mark_matched(false);
                    return Some((matcher, token));
                }
                Outcome::Skip(token) => {
                    self.ctx.mark_matched(true);
                    return Some((matcher, token));
                }
                Outcome::Reject => {}
            }
        }
        debug_assert!(!self.ctx.matched());
        None
    }

    /// Remaining input quoted in fatal messages, `...` marking truncation.
    fn preview(&self) -> String {
        match self.ctx.preview(self.config.preview_len) {
            (text, true) => format!("{text}..."),
            (text, false) => text.to_owned(),
        }
    }

    fn fail(&mut self, error: ScanError) -> ScanError {
        self.state = State::Failed;
        tracing::warn!(
            file = %error.file().display(),
            line = error.line(),
            "{error}"
        );
        self.sink.add_with_severity(
            error.file(),
            error.line(),
            error.to_string(),
            Severity::Fatal,
        );
        error
    }
}

impl<'a> Iterator for Scanner<'a, '_> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_, '_> {}

#[cfg(test)]
mod tests;

//! Position context: the remaining input plus line/column bookkeeping.
//!
//! The context is the only place position changes. Matchers inspect
//! [`Context::rest`] freely, but consume input exclusively through
//! [`Context::advance`] or [`Context::advance_lines`], which keep
//! `line`/`column` consistent with what was consumed.
//!
//! # Conventions
//!
//! Lines and columns are 1-based. Columns count characters, not bytes.
//! After crossing one or more line breaks the column becomes
//! `1 + characters after the last LF` (see [`column_after`]).

use std::path::Path;

/// Number of line feeds in `text`.
#[inline]
pub(crate) fn count_newlines(text: &str) -> usize {
    memchr::memchr_iter(b'\n', text.as_bytes()).count()
}

/// Column reached after consuming `text`, given that `text` contains at
/// least one line break.
#[inline]
pub(crate) fn column_after(text: &str) -> usize {
    let tail = match memchr::memrchr(b'\n', text.as_bytes()) {
        Some(pos) => &text[pos + 1..],
        None => text,
    };
    1 + tail.chars().count()
}

/// Scanning state for one source file.
///
/// Exclusively owned by a single scanner; the borrowed source is never
/// copied.
#[derive(Clone, Debug)]
pub struct Context<'a> {
    source: &'a str,
    rest: &'a str,
    file: &'a Path,
    line: usize,
    column: usize,
    /// A matcher accepted during the current attempt.
    matched: bool,
    /// The accepted lexeme must not be yielded.
    skip: bool,
}

impl<'a> Context<'a> {
    pub fn new(source: &'a str, file: &'a Path) -> Self {
        Context {
            source,
            rest: source,
            file,
            line: 1,
            column: 1,
            matched: false,
            skip: false,
        }
    }

    /// Input not consumed yet.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Leading byte of the remaining input (the activation symbol when it
    /// is ASCII).
    #[inline]
    pub fn first_byte(&self) -> Option<u8> {
        self.rest.as_bytes().first().copied()
    }

    /// Leading character of the remaining input.
    #[inline]
    pub fn first_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Byte offset of the remaining input within the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn file(&self) -> &'a Path {
        self.file
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Consume `n` bytes known to contain no line break.
    ///
    /// Returns the consumed slice. Panics if `n` exceeds the remaining
    /// input or splits a character.
    pub fn advance(&mut self, n: usize) -> &'a str {
        let consumed = self.split_off(n);
        debug_assert!(
            memchr::memchr(b'\n', consumed.as_bytes()).is_none(),
            "advance({n}) crossed a line break; use advance_lines"
        );
        self.column += consumed.chars().count();
        consumed
    }

    /// Consume `n` bytes containing `newlines` line breaks, after which the
    /// column is `new_column`.
    ///
    /// With `newlines == 0` the column is still set to `new_column`, which
    /// lets matchers that track the column themselves share one path.
    pub fn advance_lines(&mut self, n: usize, newlines: usize, new_column: usize) -> &'a str {
        let consumed = self.split_off(n);
        debug_assert_eq!(
            count_newlines(consumed),
            newlines,
            "line delta does not match consumed text"
        );
        self.line += newlines;
        self.column = new_column;
        consumed
    }

    /// Consume `n` bytes, deriving the line and column delta from the text.
    pub(crate) fn advance_measured(&mut self, n: usize) -> &'a str {
        let newlines = count_newlines(&self.rest[..n]);
        if newlines == 0 {
            self.advance(n)
        } else {
            let new_column = column_after(&self.rest[..n]);
            self.advance_lines(n, newlines, new_column)
        }
    }

    fn split_off(&mut self, n: usize) -> &'a str {
        assert!(
            n <= self.rest.len(),
            "advance({n}) past end of input ({} bytes left)",
            self.rest.len()
        );
        let (consumed, rest) = self.rest.split_at(n);
        self.rest = rest;
        consumed
    }

    /// Clear the per-attempt flags before a dispatch attempt.
    #[inline]
    pub fn reset_attempt_flags(&mut self) {
        self.matched = false;
        self.skip = false;
    }

    /// Record that a matcher accepted; `skip` marks a lexeme that must
    /// not be yielded.
    #[inline]
    pub fn mark_matched(&mut self, skip: bool) {
        self.matched = true;
        self.skip = skip;
    }

    #[inline]
    pub fn matched(&self) -> bool {
        self.matched
    }

    #[inline]
    pub fn skip(&self) -> bool {
        self.skip
    }

    /// At most `max_chars` characters of the remaining input, plus whether
    /// the preview was cut short.
    pub fn preview(&self, max_chars: usize) -> (&'a str, bool) {
        match self.rest.char_indices().nth(max_chars) {
            Some((end, _)) => (&self.rest[..end], true),
            None => (self.rest, false),
        }
    }
}

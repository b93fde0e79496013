//! Token model: what a matcher produces and the scanner yields.

use std::fmt;
use std::ops::Range;

/// Byte range of a lexeme in the source, delimiters included.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lexical category of a token.
///
/// `Empty` marks a slot that has not been populated; the scanner never
/// yields it.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenKind {
    #[default]
    Empty,

    // Trivia (elided unless trivia is retained)
    Whitespace,
    SingleLineComment,
    MultiLineComment,

    // Elements
    NonTerminalElement,
    TerminalElement,

    // Definition symbols
    DefinitionStart,
    DefinitionEnd,
    Alternative,

    // Delimiters
    GroupingStart,
    GroupingEnd,
    OptionalStart,
    OptionalEnd,
    RepetitionStart,
    RepetitionEnd,
}

impl TokenKind {
    /// Whether tokens of this kind are skipped by default.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }

    /// The exact source text for kinds that have only one spelling.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::DefinitionStart => Some("::="),
            TokenKind::DefinitionEnd => Some(";"),
            TokenKind::Alternative => Some("|"),
            TokenKind::GroupingStart => Some("("),
            TokenKind::GroupingEnd => Some(")"),
            TokenKind::OptionalStart => Some("["),
            TokenKind::OptionalEnd => Some("]"),
            TokenKind::RepetitionStart => Some("{"),
            TokenKind::RepetitionEnd => Some("}"),
            TokenKind::Empty
            | TokenKind::Whitespace
            | TokenKind::SingleLineComment
            | TokenKind::MultiLineComment
            | TokenKind::NonTerminalElement
            | TokenKind::TerminalElement => None,
        }
    }

    /// Human-readable name, used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Empty => "empty",
            TokenKind::Whitespace => "whitespace",
            TokenKind::SingleLineComment => "single-line comment",
            TokenKind::MultiLineComment => "multi-line comment",
            TokenKind::NonTerminalElement => "non-terminal",
            TokenKind::TerminalElement => "terminal",
            TokenKind::DefinitionStart => "definition start",
            TokenKind::DefinitionEnd => "definition end",
            TokenKind::Alternative => "alternative",
            TokenKind::GroupingStart => "grouping start",
            TokenKind::GroupingEnd => "grouping end",
            TokenKind::OptionalStart => "optional start",
            TokenKind::OptionalEnd => "optional end",
            TokenKind::RepetitionStart => "repetition start",
            TokenKind::RepetitionEnd => "repetition end",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// `text` borrows the payload from the source with delimiters stripped
/// (`<name>` gives `name`, `"abc"` gives `abc`); escape sequences are kept
/// as written. `span` covers the whole lexeme including delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
    /// 1-based line where the lexeme starts.
    pub line: usize,
    /// 1-based column (in characters) where the lexeme starts.
    pub column: usize,
    /// `false` when the lexeme broke a lexical rule but was recovered.
    pub well_formed: bool,
}

impl<'a> Token<'a> {
    /// The `Empty` sentinel.
    pub fn empty() -> Self {
        Token::default()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == TokenKind::Empty
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:<20}", self.line, self.column, self.kind.name())?;
        if !self.text.is_empty() {
            write!(f, " {:?}", self.text)?;
        }
        if !self.well_formed {
            write!(f, " (malformed)")?;
        }
        Ok(())
    }
}

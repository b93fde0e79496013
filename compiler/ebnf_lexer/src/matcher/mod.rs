//! The matcher set: one matcher per lexical construct of the grammar
//! notation.
//!
//! Matchers form a closed enum dispatched through `match`. Each one
//! inspects the remaining input of a [`Context`], and either consumes a
//! prefix (producing a token or an elided trivia lexeme) or rejects
//! without touching the context.
//!
//! # Activation
//!
//! Every matcher declares the leading characters it can start on.
//! [`Matcher::attempt`] rejects any other leading character up front, so
//! the construct functions below it can assume their activation symbol.
//!
//! # Follow sets
//!
//! For predictive dispatch every matcher also declares which matchers are
//! expected after it. Follow sets narrow the first guess only; a miss
//! falls back to the activation table, so they never change what gets
//! scanned.

mod element;
mod symbol;
mod trivia;

use ebnf_diagnostic::DiagnosticSink;

use crate::context::Context;
use crate::token::{Span, Token, TokenKind};

/// Result of one matcher attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome<'a> {
    /// Input consumed; yield this token.
    Token(Token<'a>),
    /// Input consumed, but the lexeme is trivia and is not yielded unless
    /// the caller asked to retain trivia.
    Skip(Token<'a>),
    /// The input does not start with this construct. Nothing was consumed
    /// and nothing was reported.
    Reject,
}

impl Outcome<'_> {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Outcome::Reject)
    }
}

/// A lexical construct matcher.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Matcher {
    /// Run of spaces, tabs, CRs and LFs.
    Whitespace,
    /// `// ...` up to and including the next LF.
    LineComment,
    /// `/* ... */` with backslash escapes.
    BlockComment,
    /// `<name>`
    NonTerminal,
    /// `"text"` with backslash escapes.
    Terminal,
    /// `(` and `)`
    Grouping,
    /// `[` and `]`
    Optional,
    /// `{` and `}`
    Repetition,
    /// `::=` and `;`
    Definition,
    /// `|`
    Alternative,
}

use Matcher::{
    Alternative, BlockComment, Definition, Grouping, LineComment, NonTerminal, Optional,
    Repetition, Terminal, Whitespace,
};

const AFTER_ELEMENT: &[Matcher] = &[
    Whitespace,
    NonTerminal,
    Terminal,
    Grouping,
    Optional,
    Repetition,
    LineComment,
    BlockComment,
    Alternative,
    Definition,
];

const AFTER_COMMENT: &[Matcher] = &[
    Whitespace,
    NonTerminal,
    Terminal,
    Grouping,
    Optional,
    Repetition,
    LineComment,
    BlockComment,
    Alternative,
];

const AFTER_SYMBOL: &[Matcher] = &[
    Whitespace,
    NonTerminal,
    Terminal,
    Grouping,
    Optional,
    Repetition,
    LineComment,
    BlockComment,
];

impl Matcher {
    /// Every matcher, in the order candidates are tried when several share
    /// an activation symbol.
    pub const ALL: &'static [Matcher] = AFTER_ELEMENT;

    /// Leading characters this matcher can start on.
    pub const fn activation_symbols(self) -> &'static [char] {
        match self {
            Whitespace => &[' ', '\t', '\n', '\r'],
            LineComment | BlockComment => &['/'],
            NonTerminal => &['<'],
            Terminal => &['"'],
            Grouping => &['(', ')'],
            Optional => &['[', ']'],
            Repetition => &['{', '}'],
            Definition => &[':', ';'],
            Alternative => &['|'],
        }
    }

    #[inline]
    pub fn activates_on(self, symbol: char) -> bool {
        self.activation_symbols().contains(&symbol)
    }

    /// Matchers expected to follow a lexeme accepted by this one.
    pub const fn follow_set(self) -> &'static [Matcher] {
        match self {
            Whitespace | NonTerminal | Terminal | Grouping | Optional | Repetition => {
                AFTER_ELEMENT
            }
            LineComment | BlockComment => AFTER_COMMENT,
            Alternative | Definition => AFTER_SYMBOL,
        }
    }

    /// Try to consume the construct at the start of the remaining input.
    ///
    /// Input that does not start with one of
    /// [`activation_symbols`](Self::activation_symbols), including empty
    /// input, is rejected. On [`Outcome::Reject`] the context is left
    /// untouched; recoverable problems found during an accepted attempt
    /// are written to `sink`.
    pub fn attempt<'a>(self, ctx: &mut Context<'a>, sink: &DiagnosticSink) -> Outcome<'a> {
        if !ctx.first_char().is_some_and(|c| self.activates_on(c)) {
            return Outcome::Reject;
        }
        match self {
            Whitespace => trivia::whitespace(ctx),
            LineComment => trivia::line_comment(ctx),
            BlockComment => trivia::block_comment(ctx),
            NonTerminal => element::non_terminal(ctx, sink),
            Terminal => element::terminal(ctx),
            Grouping => {
                element::delimiter(ctx, TokenKind::GroupingStart, TokenKind::GroupingEnd)
            }
            Optional => element::delimiter(ctx, TokenKind::OptionalStart, TokenKind::OptionalEnd),
            Repetition => {
                element::delimiter(ctx, TokenKind::RepetitionStart, TokenKind::RepetitionEnd)
            }
            Definition => symbol::definition(ctx),
            Alternative => symbol::alternative(ctx),
        }
    }
}

/// Where a lexeme started, captured before consuming it.
#[derive(Copy, Clone, Debug)]
struct Origin {
    offset: usize,
    line: usize,
    column: usize,
}

impl Origin {
    fn of(ctx: &Context<'_>) -> Self {
        Origin {
            offset: ctx.offset(),
            line: ctx.line(),
            column: ctx.column(),
        }
    }

    /// Build the token for a lexeme that ends at the context's current
    /// offset.
    fn token<'a>(
        self,
        ctx: &Context<'a>,
        kind: TokenKind,
        text: &'a str,
        well_formed: bool,
    ) -> Token<'a> {
        Token {
            kind,
            text,
            span: Span::new(self.offset, ctx.offset()),
            line: self.line,
            column: self.column,
            well_formed,
        }
    }
}

//! Elements (non-terminals, terminals) and the bracketing delimiters.

use ebnf_diagnostic::{Diagnostic, DiagnosticSink};
use smallvec::SmallVec;

use crate::context::Context;
use crate::token::TokenKind;

use super::{Origin, Outcome};

/// Characters a non-terminal name may not contain. A line feed is
/// reported separately because it also moves the line counter.
#[inline]
fn is_disallowed_in_non_terminal(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\r'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '*'
            | '('
            | ')'
            | '+'
            | '='
            | '['
            | ']'
            | '{'
            | '}'
            | ';'
            | ':'
            | '\''
            | '"'
            | '<'
            | ','
            | '.'
            | '/'
            | '\\'
            | '|'
            | '?'
            | '`'
            | '~'
    )
}

/// `<name>`.
///
/// A name starting with a digit is rejected outright. Disallowed
/// characters and line breaks inside the name are reported as recoverable
/// diagnostics and the token is emitted with `well_formed == false`.
/// Reports are held back until the closing `>` is found, so a rejected
/// attempt leaves no diagnostics behind.
pub(super) fn non_terminal<'a>(ctx: &mut Context<'a>, sink: &DiagnosticSink) -> Outcome<'a> {
    let rest = ctx.rest();
    let name = &rest[1..];
    match name.chars().next() {
        None => return Outcome::Reject,
        Some(c) if c.is_ascii_digit() => return Outcome::Reject,
        Some(_) => {}
    }

    // (lines below the opening line, message)
    let mut problems: SmallVec<[(usize, String); 2]> = SmallVec::new();
    let mut newlines = 0;
    let mut line_start = 0;
    let mut end = None;
    for (i, c) in name.char_indices() {
        match c {
            '>' => {
                end = Some(1 + i + 1);
                break;
            }
            '\n' => {
                problems.push((newlines, "non-terminal cannot contain a line break".to_owned()));
                newlines += 1;
                line_start = 1 + i + 1;
            }
            c if is_disallowed_in_non_terminal(c) => {
                problems.push((newlines, format!("non-terminal cannot contain {c:?}")));
            }
            _ => {}
        }
    }
    let Some(end) = end else {
        return Outcome::Reject;
    };

    let well_formed = problems.is_empty();
    if !well_formed {
        let file = ctx.file();
        let line = ctx.line();
        sink.extend(
            problems
                .into_iter()
                .map(|(delta, message)| Diagnostic::new(file, line + delta, message)),
        );
    }

    let origin = Origin::of(ctx);
    let lexeme = if newlines == 0 {
        ctx.advance(end)
    } else {
        let column = 1 + rest[line_start..end].chars().count();
        ctx.advance_lines(end, newlines, column)
    };
    let text = &lexeme[1..end - 1];
    Outcome::Token(origin.token(ctx, TokenKind::NonTerminalElement, text, well_formed))
}

/// `"text"`.
///
/// A backslash takes the next character verbatim; escapes are kept as
/// written. An escaped LF is part of the terminal and moves the line
/// counter. An unescaped LF, or end-of-input before the closing quote,
/// rejects the match.
pub(super) fn terminal<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let rest = ctx.rest();
    let bytes = rest.as_bytes();

    let mut pos = 1;
    let mut newlines = 0;
    let mut line_start = 0;
    let end = loop {
        let Some(offset) = memchr::memchr3(b'"', b'\n', b'\\', &bytes[pos..]) else {
            return Outcome::Reject;
        };
        let found = pos + offset;
        match bytes[found] {
            b'"' => break found + 1,
            b'\n' => return Outcome::Reject,
            _ => {
                let Some(escaped) = rest[found + 1..].chars().next() else {
                    return Outcome::Reject;
                };
                pos = found + 1 + escaped.len_utf8();
                if escaped == '\n' {
                    newlines += 1;
                    line_start = pos;
                }
            }
        }
    };

    let origin = Origin::of(ctx);
    let lexeme = if newlines == 0 {
        ctx.advance(end)
    } else {
        let column = 1 + rest[line_start..end].chars().count();
        ctx.advance_lines(end, newlines, column)
    };
    let text = &lexeme[1..end - 1];
    Outcome::Token(origin.token(ctx, TokenKind::TerminalElement, text, true))
}

/// One of a pair of single-character delimiters: the opening activation
/// symbol yields `open`, the closing one `close`.
///
/// `(*` is reserved for explanatory comments and is not a grouping start.
pub(super) fn delimiter<'a>(
    ctx: &mut Context<'a>,
    open: TokenKind,
    close: TokenKind,
) -> Outcome<'a> {
    let rest = ctx.rest().as_bytes();
    let kind = match rest[0] {
        b'(' if rest.get(1) == Some(&b'*') => return Outcome::Reject,
        b'(' | b'[' | b'{' => open,
        _ => close,
    };
    let origin = Origin::of(ctx);
    let text = ctx.advance(1);
    Outcome::Token(origin.token(ctx, kind, text, true))
}

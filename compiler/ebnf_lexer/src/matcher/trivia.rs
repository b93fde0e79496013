//! Whitespace and comments. Always accepted as [`Outcome::Skip`].

use crate::context::Context;
use crate::token::TokenKind;

use super::{Origin, Outcome};

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

pub(super) fn whitespace<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let origin = Origin::of(ctx);
    let len = ctx
        .rest()
        .bytes()
        .take_while(|&b| is_whitespace(b))
        .count();
    let text = ctx.advance_measured(len);
    Outcome::Skip(origin.token(ctx, TokenKind::Whitespace, text, true))
}

/// `//` to the next LF, which is consumed with the comment. A comment on
/// the last line may end at end-of-input instead.
pub(super) fn line_comment<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let rest = ctx.rest();
    if !rest.starts_with("//") {
        return Outcome::Reject;
    }
    let origin = Origin::of(ctx);
    let text = match memchr::memchr(b'\n', &rest.as_bytes()[2..]) {
        Some(pos) => {
            let lexeme = ctx.advance_lines(2 + pos + 1, 1, 1);
            &lexeme[2..lexeme.len() - 1]
        }
        None => &ctx.advance(rest.len())[2..],
    };
    Outcome::Skip(origin.token(ctx, TokenKind::SingleLineComment, text, true))
}

/// `/*` to the first unescaped `*/`.
///
/// A backslash escapes the following character, so `\*/` does not close
/// the comment. Every LF inside counts toward the line delta, escaped or
/// not. No closing delimiter before end-of-input rejects the match.
pub(super) fn block_comment<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let rest = ctx.rest();
    if !rest.starts_with("/*") {
        return Outcome::Reject;
    }
    let bytes = rest.as_bytes();

    let mut pos = 2;
    let mut newlines = 0;
    let mut line_start = 0;
    let end = loop {
        let Some(offset) = memchr::memchr3(b'/', b'\\', b'\n', &bytes[pos..]) else {
            return Outcome::Reject;
        };
        let found = pos + offset;
        match bytes[found] {
            b'\n' => {
                newlines += 1;
                line_start = found + 1;
                pos = found + 1;
            }
            b'\\' => {
                let Some(escaped) = rest[found + 1..].chars().next() else {
                    return Outcome::Reject;
                };
                pos = found + 1 + escaped.len_utf8();
                if escaped == '\n' {
                    newlines += 1;
                    line_start = pos;
                }
            }
            _ => {
                // A `*` right before `/` closes the comment, unless that `*`
                // was consumed by an escape (then `found == pos`).
                if found > pos && bytes[found - 1] == b'*' {
                    break found + 1;
                }
                pos = found + 1;
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
    let text = &lexeme[2..end - 2];
    Outcome::Skip(origin.token(ctx, TokenKind::MultiLineComment, text, true))
}

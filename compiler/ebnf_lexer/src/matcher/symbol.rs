//! Definition symbols: `::=`, `;` and `|`.

use crate::context::Context;
use crate::token::TokenKind;

use super::{Origin, Outcome};

const DEFINITION_START: &str = "::=";

/// `::=` (three-character lookahead) or `;`.
pub(super) fn definition<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let (len, kind) = match ctx.first_byte() {
        Some(b';') => (1, TokenKind::DefinitionEnd),
        _ if ctx.rest().starts_with(DEFINITION_START) => {
            (DEFINITION_START.len(), TokenKind::DefinitionStart)
        }
        _ => return Outcome::Reject,
    };
    let origin = Origin::of(ctx);
    let text = ctx.advance(len);
    Outcome::Token(origin.token(ctx, kind, text, true))
}

pub(super) fn alternative<'a>(ctx: &mut Context<'a>) -> Outcome<'a> {
    let origin = Origin::of(ctx);
    let text = ctx.advance(1);
    Outcome::Token(origin.token(ctx, TokenKind::Alternative, text, true))
}

//! Grammar productions.
//!
//! Position convention: a production starts with the cursor on its first
//! token and returns with the cursor on its last token. The statement loop
//! advances past it.

mod expr;
mod stmt;

use quill_ir::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// If the peek token is `kind`, advance onto it. Otherwise fail without
    /// moving.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.cursor.peek_is(kind) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected(kind, self.cursor.peek()))
        }
    }

    /// Advance past a trailing `;` if one follows.
    pub(crate) fn eat_optional_semicolon(&mut self) {
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}

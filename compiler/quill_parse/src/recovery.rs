//! Error recovery: skip to the next statement boundary.

use quill_ir::TokenKind;
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Record `error` and move the cursor to where the next statement can
    /// start.
    ///
    /// Stops after a `;` or before `var`/`return`, counting only tokens
    /// outside any braces still open at the error point. Always consumes at
    /// least one token unless already at `Eof`.
    pub(crate) fn recover(&mut self, error: ParseError) {
        let start = self.cursor.position();
        let mut depth = self.block_depth;
        loop {
            let kind = self.cursor.current_kind();
            let moved = self.cursor.position() > start;
            match kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Var | TokenKind::Return if depth == 0 && moved => break,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.cursor.advance();
        }
        debug!(
            %error,
            skipped = self.cursor.position() - start,
            "recovered from parse error"
        );
        self.block_depth = 0;
        self.errors.push(error);
    }
}

//! Token cursor with one token of peek.

use quill_ir::{Span, Token, TokenKind};

/// Position in a token slice that always ends with `Eof`.
///
/// Advancing past the last token is a no-op, so `current()` is always valid.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// The current token. A stream without tokens reads as a synthetic `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or_else(|| eof_token(self.tokens))
    }

    /// The token after the current one; `Eof` once the end is reached.
    #[inline]
    pub(crate) fn peek(&self) -> &'a Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| eof_token(self.tokens))
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current_is(TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
            tracing::trace!(kind = ?self.current_kind(), pos = self.pos, "advance");
        }
    }
}

fn eof_token(tokens: &[Token]) -> &Token {
    static EOF: std::sync::OnceLock<Token> = std::sync::OnceLock::new();
    tokens
        .last()
        .unwrap_or_else(|| EOF.get_or_init(|| Token::new(TokenKind::Eof, "", Span::DUMMY)))
}

//! Parse error types.

use quill_ir::{Span, Token, TokenKind};
use quill_lexer::LexError;
use thiserror::Error;

/// An error recorded while parsing.
///
/// `expected` and `found` are rendered descriptions (see [`describe_kind`]
/// and [`describe_token`]), so messages read the same in every consumer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The next token is not the one the grammar requires.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    /// No expression can start with this token.
    #[error("no prefix parse rule for {found}")]
    NoPrefixRule { found: String, span: Span },

    /// `a[]`
    #[error("expected an index expression between `[` and `]`")]
    EmptyIndex { span: Span },

    /// Integer literal outside the 64-bit signed range.
    #[error("integer literal `{literal}` is out of range")]
    InvalidInteger { literal: String, span: Span },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    pub(crate) fn unexpected(expected: TokenKind, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected: describe_kind(expected),
            found: describe_token(found),
            span: found.span,
        }
    }

    pub(crate) fn no_prefix_rule(found: &Token) -> Self {
        ParseError::NoPrefixRule {
            found: describe_token(found),
            span: found.span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixRule { span, .. }
            | ParseError::EmptyIndex { span }
            | ParseError::InvalidInteger { span, .. } => *span,
            ParseError::Lex(err) => err.span(),
        }
    }
}

/// `identifier`, `end of file`, or a quoted symbol like `` `)` ``.
pub fn describe_kind(kind: TokenKind) -> String {
    match kind {
        TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Str
        | TokenKind::Eof
        | TokenKind::Illegal => kind.display_name().to_owned(),
        _ => format!("`{}`", kind.display_name()),
    }
}

/// The token's own text in backticks, or `end of file`.
pub fn describe_token(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of file".to_owned(),
        _ => format!("`{token}`"),
    }
}

//! Lexical errors.

use quill_ir::Span;
use thiserror::Error;

/// Problems found while scanning. Scanning continues after each one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    /// A `"` with no closing quote before end of input.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span } => *span,
        }
    }
}

//! Quill lexer.
//!
//! Turns source text into a [`TokenList`]. Scanning never fails: characters
//! outside the token vocabulary become `Illegal` tokens for the parser to
//! reject, and an unterminated string still yields its token together with a
//! [`LexError`] so callers can report it.

mod cursor;
mod error;
mod scanner;

use quill_ir::TokenList;

pub use error::LexError;
pub use scanner::Scanner;

/// Output of [`lex`]: the token stream plus any lexical errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source` into a list terminated by exactly one `Eof` token.
pub fn lex(source: &str) -> LexOutput {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is(quill_ir::TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }
    LexOutput {
        tokens: TokenList::new(tokens),
        errors: scanner.into_errors(),
    }
}

#[cfg(test)]
mod tests;

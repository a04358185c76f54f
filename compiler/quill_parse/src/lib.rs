//! Recursive descent parser for Quill, with Pratt-style expressions.
//!
//! The parser keeps two tokens of lookahead (current and peek). Every
//! production returns `Result<_, ParseError>`; a failed statement is recorded
//! and the parser resynchronizes at the next statement boundary, so one
//! mistake does not hide the rest of the program's errors and no partial node
//! ever reaches the AST.

mod cursor;
mod error;
mod grammar;
mod precedence;
mod recovery;

use quill_ir::{Program, Span, TokenList};

pub use error::ParseError;
pub use precedence::Precedence;

use cursor::Cursor;

/// Result of parsing: the statements that parsed cleanly plus every error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Number of `{ ... }` blocks entered and not yet closed. Unwound by
    /// recovery, which uses it to skip the rest of an interrupted block.
    block_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
            errors: Vec::new(),
            block_depth: 0,
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.current_is(quill_ir::TokenKind::Semicolon) {
                self.cursor.advance();
                continue;
            }
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.cursor.advance();
                }
                Err(error) => self.recover(error),
            }
        }
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Span from `start` through the current token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.current_span())
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Lex and parse `source`. Lexer errors come first in `errors`.
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = quill_lexer::lex(source);
    let mut output = parse(&lexed.tokens);
    if lexed.has_errors() {
        let mut errors: Vec<ParseError> = lexed.errors.into_iter().map(ParseError::Lex).collect();
        errors.append(&mut output.errors);
        output.errors = errors;
    }
    output
}

#[cfg(test)]
mod tests;

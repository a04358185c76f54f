//! Hand-written scanner.
//!
//! Dispatches on the current byte. Everything the language uses is ASCII;
//! a non-ASCII character is consumed whole and reported as one `Illegal`
//! token.

use quill_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::LexError;

/// Produces tokens one at a time from a source string.
///
/// After reaching the end, every further call returns `Eof`.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            errors: Vec::new(),
        }
    }

    /// Errors collected so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Produce the next token, skipping whitespace.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(is_whitespace);
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => self.eof(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'=' => self.with_eq(start, TokenKind::Assign, TokenKind::EqEq),
            b'!' => self.with_eq(start, TokenKind::Bang, TokenKind::NotEq),
            b'<' => self.with_eq(start, TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.with_eq(start, TokenKind::Gt, TokenKind::GtEq),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.single(start, TokenKind::Star),
            b'/' => self.single(start, TokenKind::Slash),
            b'~' => self.single(start, TokenKind::Tilde),
            b';' => self.single(start, TokenKind::Semicolon),
            b':' => self.single(start, TokenKind::Colon),
            b',' => self.single(start, TokenKind::Comma),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            b'[' => self.single(start, TokenKind::LBracket),
            b']' => self.single(start, TokenKind::RBracket),
            _ => self.illegal(start),
        }
    }

    fn make(&self, kind: TokenKind, start: usize) -> Token {
        let literal = self.cursor.slice_from(start);
        Token::new(kind, literal, Span::from_range(start..self.cursor.pos()))
    }

    fn eof(&self, start: usize) -> Token {
        Token::new(TokenKind::Eof, "", Span::from_range(start..start))
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make(kind, start)
    }

    /// One-character operator, or its two-character form when followed by `=`.
    fn with_eq(&mut self, start: usize, short: TokenKind, long: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.make(long, start)
        } else {
            self.make(short, start)
        }
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let word = self.cursor.slice_from(start);
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Ident);
        self.make(kind, start)
    }

    fn number(&mut self, start: usize) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.make(TokenKind::Int, start)
    }

    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.pos();
        let terminated = self.cursor.eat_until(b'"');
        let content = self.cursor.slice_from(content_start).to_owned();
        if terminated {
            self.cursor.advance(); // closing quote
        } else {
            self.errors.push(LexError::UnterminatedString {
                span: Span::from_range(start..self.cursor.pos()),
            });
        }
        Token::new(
            TokenKind::Str,
            content,
            Span::from_range(start..self.cursor.pos()),
        )
    }

    fn illegal(&mut self, start: usize) -> Token {
        if self.cursor.advance_char().is_none() {
            self.cursor.advance();
        }
        self.make(TokenKind::Illegal, start)
    }
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

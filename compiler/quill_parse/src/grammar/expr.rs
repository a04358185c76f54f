//! Expressions: prefix and infix rule tables and the precedence loop.

use std::rc::Rc;

use quill_ir::{BinaryOp, Expr, ExprKind, FunctionLit, Ident, MapEntry, PrefixOp, TokenKind};
use quill_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Precedence};

type PrefixFn<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;
type InfixFn<'a> = fn(&mut Parser<'a>, Expr) -> Result<Expr, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression whose operators all bind tighter than `min`.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(min))
    }

    fn parse_expression_inner(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        let Some(prefix) = Self::prefix_rule(self.cursor.current_kind()) else {
            return Err(ParseError::no_prefix_rule(self.cursor.current()));
        };
        let mut left = prefix(self)?;

        while !self.cursor.peek_is(TokenKind::Semicolon)
            && min < Precedence::of(self.cursor.peek_kind())
        {
            let Some(infix) = Self::infix_rule(self.cursor.peek_kind()) else {
                return Ok(left);
            };
            self.cursor.advance();
            left = infix(self, left)?;
        }
        Ok(left)
    }

    fn prefix_rule(kind: TokenKind) -> Option<PrefixFn<'a>> {
        let rule: PrefixFn<'a> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer,
            TokenKind::Str => Self::parse_string,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix,
            TokenKind::LParen => Self::parse_grouped,
            TokenKind::LBracket => Self::parse_array,
            TokenKind::LBrace => Self::parse_map,
            TokenKind::If => Self::parse_if,
            TokenKind::Fn => Self::parse_function,
            _ => return None,
        };
        Some(rule)
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixFn<'a>> {
        let rule: InfixFn<'a> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq
            | TokenKind::EqEq
            | TokenKind::NotEq => Self::parse_infix,
            TokenKind::LParen => Self::parse_call,
            TokenKind::LBracket => Self::parse_index,
            _ => return None,
        };
        Some(rule)
    }

    // Prefix rules

    fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        Ok(Expr::new(
            ExprKind::Ident(token.literal.as_str().into()),
            token.span,
        ))
    }

    fn parse_integer(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let value = token
            .literal
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                literal: token.literal.clone(),
                span: token.span,
            })?;
        Ok(Expr::new(ExprKind::Int(value), token.span))
    }

    fn parse_string(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        Ok(Expr::new(
            ExprKind::Str(token.literal.as_str().into()),
            token.span,
        ))
    }

    fn parse_boolean(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        Ok(Expr::new(
            ExprKind::Bool(token.is(TokenKind::True)),
            token.span,
        ))
    }

    /// `-x`, `!x`
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let op = match self.cursor.current_kind() {
            TokenKind::Minus => PrefixOp::Neg,
            _ => PrefixOp::Not,
        };
        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            self.span_from(start),
        ))
    }

    /// `( expr )`
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();
        let inner = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(Expr::new(inner.kind, self.span_from(start)))
    }

    /// `[ a, b, ... ]`
    fn parse_array(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Ok(Expr::new(ExprKind::Array(elements), self.span_from(start)))
    }

    /// `{ k: v, ... }`
    fn parse_map(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        let mut entries = Vec::new();
        while !self.cursor.peek_is(TokenKind::RBrace) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            entries.push(MapEntry { key, value });
            if !self.cursor.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }
        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expr::new(ExprKind::Map(entries), self.span_from(start)))
    }

    /// `if (cond) { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.cursor.peek_is(TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            self.span_from(start),
        ))
    }

    /// `fn (a, b) { ... }`
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.current_span();
        self.expect_peek(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block()?;
        Ok(Expr::new(
            ExprKind::Function(Rc::new(FunctionLit { params, body })),
            self.span_from(start),
        ))
    }

    /// Parameter names after `(`, through the closing `)`.
    fn parse_params(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut params = Vec::new();
        if self.cursor.peek_is(TokenKind::RParen) {
            self.cursor.advance();
            return Ok(params);
        }
        loop {
            self.expect_peek(TokenKind::Ident)?;
            let token = self.cursor.current();
            params.push(Ident::new(token.literal.as_str(), token.span));
            if !self.cursor.peek_is(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }
        self.expect_peek(TokenKind::RParen)?;
        Ok(params)
    }

    // Infix rules

    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::EqEq => BinaryOp::Eq,
            _ => BinaryOp::NotEq,
        };
        let precedence = Precedence::of(self.cursor.current_kind());
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        let span = self.span_from(left.span);
        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `callee(args)` with the cursor on `(`.
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        let span = self.span_from(callee.span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// `collection[index]` with the cursor on `[`.
    fn parse_index(&mut self, collection: Expr) -> Result<Expr, ParseError> {
        if self.cursor.peek_is(TokenKind::RBracket) {
            let span = self.cursor.current_span().merge(self.cursor.peek().span);
            return Err(ParseError::EmptyIndex { span });
        }
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        let span = self.span_from(collection.span);
        Ok(Expr::new(
            ExprKind::Index {
                collection: Box::new(collection),
                index: Box::new(index),
            },
            span,
        ))
    }

    /// Comma-separated expressions up to `end`, with the cursor on the
    /// opening delimiter. Shared by array literals and call arguments.
    fn parse_expression_list(&mut self, end: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.peek_is(end) {
            self.cursor.advance();
            return Ok(items);
        }
        self.cursor.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(end)?;
        Ok(items)
    }
}

//! Statements and blocks.

use quill_ir::{BlockStmt, Ident, Stmt, StmtKind, TokenKind};

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => self.parse_var_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `var IDENT = expr [;]`
    fn parse_var_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.expect_peek(TokenKind::Ident)?;
        let name_token = self.cursor.current();
        let name = Ident::new(name_token.literal.as_str(), name_token.span);
        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Ok(Stmt::new(StmtKind::Var { name, value }, self.span_from(start)))
    }

    /// `return expr [;]`
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Ok(Stmt::new(StmtKind::Return(value), self.span_from(start)))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.eat_optional_semicolon();
        Ok(Stmt::new(StmtKind::Expression(expr), self.span_from(start)))
    }

    /// `{ stmt* }` with the cursor on `{`. Ends on the closing `}`, or at
    /// `Eof` if the block is never closed.
    pub(crate) fn parse_block(&mut self) -> Result<BlockStmt, ParseError> {
        let start = self.cursor.current_span();
        self.block_depth += 1;
        self.cursor.advance();

        let mut statements = Vec::new();
        while !self.cursor.current_is(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if self.cursor.current_is(TokenKind::Semicolon) {
                self.cursor.advance();
                continue;
            }
            statements.push(self.parse_statement()?);
            self.cursor.advance();
        }

        self.block_depth -= 1;
        Ok(BlockStmt::new(statements, self.span_from(start)))
    }
}

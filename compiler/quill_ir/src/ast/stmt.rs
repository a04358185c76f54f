//! Statement nodes and the program root.

use std::fmt;

use super::{Expr, Ident};
use crate::Span;

/// Parsed program: statements in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

/// A statement with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `var name = value;`
    Var { name: Ident, value: Expr },

    /// `return value;`
    Return(Expr),

    /// A bare expression; its value is the statement's value.
    Expression(Expr),

    /// A nested `{ ... }` block. The parser never produces one: a `{` at
    /// statement start begins a map literal, so blocks only occur as `if`
    /// arms and function bodies. Host code may still build it.
    Block(BlockStmt),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Var { name, value } => write!(f, "var {name} = {value};"),
            StmtKind::Return(value) => write!(f, "return {value};"),
            StmtKind::Expression(expr) => write!(f, "{expr}"),
            StmtKind::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Braced statement sequence: `if`/`else` arms and function bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        BlockStmt { statements, span }
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        f.write_str(" }")
    }
}

//! Quill IR - shared data types for the Quill pipeline.
//!
//! This crate contains the passive structures every stage agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for tokenizer output
//! - AST nodes (`Program`, `Stmt`, `Expr`, `BlockStmt`) produced by the parser
//!   and walked by the evaluator
//!
//! # Design Philosophy
//!
//! - **Closed sets**: statements and expressions are enums, so every consumer
//!   matches exhaustively and a new variant is a compile error everywhere it
//!   is not handled.
//! - **Immutable trees**: nodes are never mutated after parsing. Function
//!   literals are the one shared node: they sit behind an `Rc` so closures
//!   created at runtime reference the body instead of copying it.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, BlockStmt, Expr, ExprKind, FunctionLit, Ident, MapEntry, Name, PrefixOp, Program,
    Stmt, StmtKind,
};
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind, TokenList};

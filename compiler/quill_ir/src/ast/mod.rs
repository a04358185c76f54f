//! Abstract syntax tree.
//!
//! A [`Program`] is a list of statements. Statements and expressions each
//! pair a `kind` enum with the [`Span`](crate::Span) they were parsed from.
//!
//! Every node implements `Display` as a canonical, fully parenthesized
//! rendering. Parser tests compare against it, so the exact format matters:
//! infix `(l op r)`, prefix `(opx)`, index `(a[i])`, calls `f(a, b)`.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, FunctionLit, Ident, MapEntry, Name};
pub use operators::{BinaryOp, PrefixOp};
pub use stmt::{BlockStmt, Program, Stmt, StmtKind};

//! Expression nodes.

use std::fmt;
use std::rc::Rc;

use quill_stack::ensure_sufficient_stack;

use super::{BinaryOp, BlockStmt, PrefixOp, StmtKind};
use crate::Span;

/// Identifier text, shared between the AST and runtime environments.
pub type Name = Rc<str>;

/// An identifier occurrence with its location.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<Name>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An expression with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// One `key: value` pair of a map literal, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapEntry {
    pub key: Expr,
    pub value: Expr,
}

/// A function literal. Closures share it by `Rc` instead of copying the body.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionLit {
    pub params: Vec<Ident>,
    pub body: BlockStmt,
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Variable reference: `x`
    Ident(Name),

    /// Integer literal: `42`
    Int(i64),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// String literal, without quotes: `"hi"`
    Str(Rc<str>),

    /// Array literal: `[a, b, c]`
    Array(Vec<Expr>),

    /// Map literal: `{k: v, ...}`
    Map(Vec<MapEntry>),

    /// Prefix operation: `-x`, `!x`
    Prefix { op: PrefixOp, operand: Box<Expr> },

    /// Infix operation: `left op right`
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Conditional: `if (cond) { ... } else { ... }`
    If {
        condition: Box<Expr>,
        consequence: BlockStmt,
        alternative: Option<BlockStmt>,
    },

    /// Function literal: `fn(a, b) { ... }`
    Function(Rc<FunctionLit>),

    /// Call: `callee(args)`
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// Index: `collection[index]`
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for FunctionLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, &self.params)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| fmt::Display::fmt(&self.kind, f))
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Str(value) => write!(f, "\"{value}\""),
            ExprKind::Array(elements) => {
                f.write_str("[")?;
                write_comma_separated(f, elements)?;
                f.write_str("]")
            }
            ExprKind::Map(entries) => {
                f.write_str("{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.key, entry.value)?;
                }
                f.write_str("}")
            }
            ExprKind::Prefix { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {alt}")?;
                }
                Ok(())
            }
            ExprKind::Function(lit) => write!(f, "{lit}"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, args)?;
                f.write_str(")")
            }
            ExprKind::Index { collection, index } => write!(f, "({collection}[{index}])"),
        }
    }
}

/// Tears the tree down from a worklist: child expressions are detached
/// before their parent is freed, so dropping a deeply nested expression
/// needs constant native stack.
impl Drop for ExprKind {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut ExprKind, out: &mut Vec<Expr>) {
    match kind {
        ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Str(_) => {}
        ExprKind::Array(elements) => out.append(elements),
        ExprKind::Map(entries) => {
            for entry in entries.drain(..) {
                out.push(entry.key);
                out.push(entry.value);
            }
        }
        ExprKind::Prefix { operand, .. } => out.push(take(operand)),
        ExprKind::Infix { left, right, .. } => {
            out.push(take(left));
            out.push(take(right));
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            out.push(take(condition));
            detach_block(consequence, out);
            if let Some(alternative) = alternative {
                detach_block(alternative, out);
            }
        }
        // A literal still shared by a closure is torn down by its last owner.
        ExprKind::Function(lit) => {
            if let Some(lit) = Rc::get_mut(lit) {
                detach_block(&mut lit.body, out);
            }
        }
        ExprKind::Call { callee, args } => {
            out.push(take(callee));
            out.append(args);
        }
        ExprKind::Index { collection, index } => {
            out.push(take(collection));
            out.push(take(index));
        }
    }
}

fn detach_block(block: &mut BlockStmt, out: &mut Vec<Expr>) {
    let mut blocks = vec![std::mem::take(&mut block.statements)];
    while let Some(statements) = blocks.pop() {
        for stmt in statements {
            match stmt.kind {
                StmtKind::Var { value, .. }
                | StmtKind::Return(value)
                | StmtKind::Expression(value) => out.push(value),
                StmtKind::Block(inner) => blocks.push(inner.statements),
            }
        }
    }
}

/// Swap a boxed child for a leaf so it can be freed on its own.
fn take(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::new(ExprKind::Int(0), Span::DUMMY))
}

//! Builtin functions.
//!
//! The registry is built once on first use and never changes afterwards.
//! Each builtin declares its arity; [`Builtin::call`] checks it before the
//! implementation runs, so implementations can index `args` freely.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::errors::{wrong_argument_count, wrong_argument_type, EvalError};
use crate::Entity;

type BuiltinFn = fn(&[Entity]) -> Result<Entity, EvalError>;

/// A host-implemented function callable from Quill code.
#[derive(Copy, Clone)]
pub struct Builtin {
    name: &'static str,
    arity: usize,
    func: BuiltinFn,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke with already-evaluated arguments.
    pub fn call(&self, args: &[Entity]) -> Result<Entity, EvalError> {
        if args.len() != self.arity {
            return Err(wrong_argument_count(self.name, self.arity, args.len()));
        }
        (self.func)(args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Builtin) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// Names of every builtin, in registration order.
pub const BUILTIN_NAMES: [&str; 5] = ["len", "head", "tail", "last", "push"];

static REGISTRY: LazyLock<FxHashMap<&'static str, Builtin>> = LazyLock::new(|| {
    let table: [(&'static str, usize, BuiltinFn); 5] = [
        ("len", 1, len),
        ("head", 1, head),
        ("tail", 1, tail),
        ("last", 1, last),
        ("push", 2, push),
    ];
    table
        .into_iter()
        .map(|(name, arity, func)| (name, Builtin { name, arity, func }))
        .collect()
});

/// Find a builtin by name.
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    REGISTRY.get(name).copied()
}

/// Length of a string in characters, or of an array in elements.
fn len(args: &[Entity]) -> Result<Entity, EvalError> {
    let count = match &args[0] {
        Entity::Str(s) => s.chars().count(),
        Entity::Array(elements) => elements.borrow().len(),
        other => return Err(wrong_argument_type("len", "STRING or ARRAY", other)),
    };
    Ok(Entity::int(i64::try_from(count).unwrap_or(i64::MAX)))
}

fn head(args: &[Entity]) -> Result<Entity, EvalError> {
    match &args[0] {
        Entity::Array(elements) => Ok(elements
            .borrow()
            .first()
            .cloned()
            .unwrap_or_else(|| Entity::array(Vec::new()))),
        other => Err(wrong_argument_type("head", "ARRAY", other)),
    }
}

/// All but the first element, as a new array.
fn tail(args: &[Entity]) -> Result<Entity, EvalError> {
    match &args[0] {
        Entity::Array(elements) => {
            let rest = elements.borrow().iter().skip(1).cloned().collect();
            Ok(Entity::array(rest))
        }
        other => Err(wrong_argument_type("tail", "ARRAY", other)),
    }
}

fn last(args: &[Entity]) -> Result<Entity, EvalError> {
    match &args[0] {
        Entity::Array(elements) => Ok(elements
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| Entity::array(Vec::new()))),
        other => Err(wrong_argument_type("last", "ARRAY", other)),
    }
}

/// Append in place and return the same array.
fn push(args: &[Entity]) -> Result<Entity, EvalError> {
    match &args[0] {
        Entity::Array(elements) => {
            elements.borrow_mut().push(args[1].clone());
            Ok(args[0].clone())
        }
        other => Err(wrong_argument_type("push", "ARRAY", other)),
    }
}

//! Runtime values ("entities").
//!
//! # Heap Enforcement
//!
//! Arrays and maps live behind [`Heap`], whose constructor is private to this
//! module. Create them with [`Entity::array`] and [`Entity::map`]:
//!
//! ```text
//! let a = Entity::array(vec![Entity::int(1)]);   // OK
//! let a = Entity::Array(Heap::new(vec![]));      // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Equality
//!
//! Two notions exist and must not be mixed up:
//! - [`Entity::is_identical`] is the language's `==`: integers and strings by
//!   value, booleans and null by value, collections and functions by
//!   allocation.
//! - `PartialEq` is structural and exists for tests and host code.

mod heap;
mod map_key;

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::rc::Rc;

use quill_ir::{BlockStmt, FunctionLit, Ident};
use quill_stack::ensure_sufficient_stack;

pub use heap::Heap;
pub use map_key::MapKey;

use crate::builtins::Builtin;
use crate::{Environment, EvalError};

/// Type tag of an entity, as shown in error messages.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityType {
    Integer,
    Boolean,
    String,
    Null,
    Array,
    Map,
    Function,
    Builtin,
    Error,
}

impl EntityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityType::Integer => "INTEGER",
            EntityType::Boolean => "BOOLEAN",
            EntityType::String => "STRING",
            EntityType::Null => "NULL",
            EntityType::Array => "ARRAY",
            EntityType::Map => "MAP",
            EntityType::Function => "FUNCTION",
            EntityType::Builtin => "BUILTIN",
            EntityType::Error => "ERROR",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closure: a function literal plus the environment it was created in.
pub struct FunctionValue {
    literal: Rc<FunctionLit>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(literal: Rc<FunctionLit>, env: Environment) -> Self {
        FunctionValue { literal, env }
    }

    pub fn params(&self) -> &[Ident] {
        &self.literal.params
    }

    pub fn body(&self) -> &BlockStmt {
        &self.literal.body
    }

    /// The captured defining environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("literal", &self.literal.to_string())
            .finish_non_exhaustive()
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Entity {
    Integer(i64),
    Boolean(bool),
    Str(Rc<str>),
    Null,
    Array(Heap<Vec<Entity>>),
    Map(Heap<BTreeMap<MapKey, Entity>>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    /// A runtime error that ended evaluation.
    Error(EvalError),
}

impl Entity {
    // Factory methods

    #[inline]
    pub fn int(n: i64) -> Self {
        Entity::Integer(n)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Entity::Boolean(b)
    }

    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Entity::Str(s.into())
    }

    pub fn array(elements: Vec<Entity>) -> Self {
        Entity::Array(Heap::new(elements))
    }

    pub fn map(entries: BTreeMap<MapKey, Entity>) -> Self {
        Entity::Map(Heap::new(entries))
    }

    pub fn function(literal: Rc<FunctionLit>, env: Environment) -> Self {
        Entity::Function(Rc::new(FunctionValue::new(literal, env)))
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Integer(_) => EntityType::Integer,
            Entity::Boolean(_) => EntityType::Boolean,
            Entity::Str(_) => EntityType::String,
            Entity::Null => EntityType::Null,
            Entity::Array(_) => EntityType::Array,
            Entity::Map(_) => EntityType::Map,
            Entity::Function(_) => EntityType::Function,
            Entity::Builtin(_) => EntityType::Builtin,
            Entity::Error(_) => EntityType::Error,
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Entity::Boolean(false) | Entity::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Entity::Error(_))
    }

    /// Whether the value may be stored in a map (as key or as value).
    #[inline]
    pub fn is_map_scalar(&self) -> bool {
        matches!(
            self,
            Entity::Integer(_) | Entity::Boolean(_) | Entity::Str(_)
        )
    }

    /// The language's `==`.
    pub fn is_identical(&self, other: &Entity) -> bool {
        match (self, other) {
            (Entity::Integer(a), Entity::Integer(b)) => a == b,
            (Entity::Str(a), Entity::Str(b)) => a == b,
            (Entity::Boolean(a), Entity::Boolean(b)) => a == b,
            (Entity::Null, Entity::Null) => true,
            (Entity::Array(a), Entity::Array(b)) => a.ptr_eq(b),
            (Entity::Map(a), Entity::Map(b)) => a.ptr_eq(b),
            (Entity::Function(a), Entity::Function(b)) => Rc::ptr_eq(a, b),
            (Entity::Builtin(a), Entity::Builtin(b)) => a == b,
            _ => false,
        }
    }

    /// Display string for presenting a value to the user.
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        self.write_inspect(&mut out, &mut Vec::new());
        out
    }

    /// `seen` holds the collections currently being printed, so an array
    /// that contains itself prints `[...]` instead of recursing forever.
    fn write_inspect(&self, out: &mut String, seen: &mut Vec<usize>) {
        match self {
            Entity::Integer(n) => {
                let _ = write!(out, "{n}");
            }
            Entity::Boolean(b) => {
                let _ = write!(out, "{b}");
            }
            Entity::Str(s) => {
                let _ = write!(out, "\"{s}\"");
            }
            Entity::Null => out.push_str("null"),
            Entity::Array(elements) => {
                if seen.contains(&elements.addr()) {
                    out.push_str("[...]");
                    return;
                }
                seen.push(elements.addr());
                out.push('[');
                for (i, element) in elements.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    ensure_sufficient_stack(|| element.write_inspect(out, seen));
                }
                out.push(']');
                seen.pop();
            }
            Entity::Map(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "{key}: ");
                    ensure_sufficient_stack(|| value.write_inspect(out, seen));
                }
                out.push('}');
            }
            Entity::Function(func) => {
                let _ = write!(out, "{}", func.literal);
            }
            Entity::Builtin(_) => out.push_str("builtin function"),
            Entity::Error(err) => {
                let _ = write!(out, "ERROR: {err}");
            }
        }
    }
}

/// Nested arrays are torn down from a worklist instead of recursively, so a
/// deeply nested value does not exhaust the stack when it goes away. Arrays
/// still shared elsewhere are left to their other handles.
impl Drop for Entity {
    fn drop(&mut self) {
        let Entity::Array(elements) = self else {
            return;
        };
        let Some(mut pending) = elements.take_if_unique() else {
            return;
        };
        while let Some(mut entity) = pending.pop() {
            if let Entity::Array(inner) = &mut entity {
                if let Some(children) = inner.take_if_unique() {
                    pending.extend(children);
                }
            }
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

/// Structural equality. Collections compare by contents, functions by
/// allocation. Not the language's `==`; see [`Entity::is_identical`].
impl PartialEq for Entity {
    fn eq(&self, other: &Entity) -> bool {
        match (self, other) {
            (Entity::Array(a), Entity::Array(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Entity::Map(a), Entity::Map(b)) => a.ptr_eq(b) || *a.borrow() == *b.borrow(),
            (Entity::Error(a), Entity::Error(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

impl From<i64> for Entity {
    fn from(n: i64) -> Self {
        Entity::Integer(n)
    }
}

impl From<bool> for Entity {
    fn from(b: bool) -> Self {
        Entity::Boolean(b)
    }
}

impl From<&str> for Entity {
    fn from(s: &str) -> Self {
        Entity::Str(s.into())
    }
}

//! Runtime errors and their centralized constructors.
//!
//! Every runtime failure is an [`EvalError`] built by one of the factory
//! functions below, so message wording lives in one place.

use quill_ir::{BinaryOp, PrefixOp};
use thiserror::Error;

use crate::{Entity, EntityType};

/// A runtime error.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

/// Typed error category. `Display` is the user-facing message.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: EntityType,
        op: BinaryOp,
        right: EntityType,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: EntityType,
        op: BinaryOp,
        right: EntityType,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: PrefixOp, operand: EntityType },
    #[error("division by zero")]
    DivisionByZero,

    // Names and calls
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: EntityType },
    #[error("wrong number of arguments to `{callee}`: want {want}, got {got}")]
    WrongArgumentCount {
        callee: String,
        want: usize,
        got: usize,
    },
    #[error("wrong type of argument to `{builtin}`: expected {expected}, got {got}")]
    WrongArgumentType {
        builtin: String,
        expected: String,
        got: EntityType,
    },
    #[error("maximum call depth exceeded: {limit}")]
    CallDepthExceeded { limit: usize },

    // Indexing
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: EntityType },
    #[error("index type mismatch: expected {expected}, got {got}")]
    IndexTypeMismatch {
        expected: EntityType,
        got: EntityType,
    },
    #[error("index out of bounds: max index {max}, got {index}")]
    IndexOutOfBounds { max: i64, index: i64 },
    #[error("no value for key: {key}")]
    KeyNotFound { key: String },

    // Map construction
    #[error("unusable as map key: {type_name}")]
    UnusableAsMapKey { type_name: EntityType },
    #[error("map value type mismatch: expected STRING, BOOLEAN or INTEGER, got {got}")]
    MapValueTypeMismatch { got: EntityType },
}

/// Non-local exits threaded through the evaluator's `Err` channel.
///
/// `Return` is not an error: it unwinds to the nearest function call, or to
/// the program when there is none.
#[derive(Clone, Debug)]
pub(crate) enum ControlAction {
    Return(Entity),
    Error(EvalError),
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

/// Result of evaluating a node.
pub(crate) type EvalResult = Result<Entity, ControlAction>;

// Operator errors

#[cold]
pub fn type_mismatch(left: &Entity, op: BinaryOp, right: &Entity) -> EvalError {
    EvalErrorKind::TypeMismatch {
        left: left.entity_type(),
        op,
        right: right.entity_type(),
    }
    .into()
}

#[cold]
pub fn unknown_infix_operator(left: &Entity, op: BinaryOp, right: &Entity) -> EvalError {
    EvalErrorKind::UnknownInfixOperator {
        left: left.entity_type(),
        op,
        right: right.entity_type(),
    }
    .into()
}

#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &Entity) -> EvalError {
    EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.entity_type(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

// Name and call errors

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalErrorKind::IdentifierNotFound {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn not_a_function(callee: &Entity) -> EvalError {
    EvalErrorKind::NotAFunction {
        type_name: callee.entity_type(),
    }
    .into()
}

#[cold]
pub fn wrong_argument_count(callee: &str, want: usize, got: usize) -> EvalError {
    EvalErrorKind::WrongArgumentCount {
        callee: callee.to_owned(),
        want,
        got,
    }
    .into()
}

#[cold]
pub fn wrong_argument_type(builtin: &str, expected: &str, got: &Entity) -> EvalError {
    EvalErrorKind::WrongArgumentType {
        builtin: builtin.to_owned(),
        expected: expected.to_owned(),
        got: got.entity_type(),
    }
    .into()
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalErrorKind::CallDepthExceeded { limit }.into()
}

// Index errors

#[cold]
pub fn index_not_supported(collection: &Entity) -> EvalError {
    EvalErrorKind::IndexNotSupported {
        type_name: collection.entity_type(),
    }
    .into()
}

#[cold]
pub fn index_type_mismatch(expected: EntityType, got: &Entity) -> EvalError {
    EvalErrorKind::IndexTypeMismatch {
        expected,
        got: got.entity_type(),
    }
    .into()
}

#[cold]
pub fn index_out_of_bounds(len: usize, index: i64) -> EvalError {
    let max = i64::try_from(len).map_or(i64::MAX, |len| len - 1);
    EvalErrorKind::IndexOutOfBounds { max, index }.into()
}

#[cold]
pub fn key_not_found(key: &Entity) -> EvalError {
    EvalErrorKind::KeyNotFound { key: key.inspect() }.into()
}

// Map construction errors

#[cold]
pub fn unusable_as_map_key(key: &Entity) -> EvalError {
    EvalErrorKind::UnusableAsMapKey {
        type_name: key.entity_type(),
    }
    .into()
}

#[cold]
pub fn map_value_type_mismatch(value: &Entity) -> EvalError {
    EvalErrorKind::MapValueTypeMismatch {
        got: value.entity_type(),
    }
    .into()
}

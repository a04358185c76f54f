//! Prefix operator implementations for the evaluator.

use quill_ir::PrefixOp;

use crate::errors::{unknown_prefix_operator, EvalError};
use crate::Entity;

/// `-` negates integers (wrapping at `i64::MIN`); `!` negates truthiness and
/// accepts any value.
pub(crate) fn evaluate_unary(operand: &Entity, op: PrefixOp) -> Result<Entity, EvalError> {
    match op {
        PrefixOp::Not => Ok(Entity::bool(!operand.is_truthy())),
        PrefixOp::Neg => match operand {
            Entity::Integer(n) => Ok(Entity::int(n.wrapping_neg())),
            _ => Err(unknown_prefix_operator(op, operand)),
        },
    }
}

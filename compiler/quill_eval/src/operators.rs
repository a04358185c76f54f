//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch on the operand pair. The type set is closed, so a
//! `match` gives exhaustiveness checking for free.

use quill_ir::BinaryOp;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix_operator, EvalError};
use crate::Entity;

/// Evaluate `left op right` on already-evaluated operands.
///
/// Integers support every operator. Strings support `+` and equality.
/// Any other pair supports only `==`/`!=`, which compare by identity.
pub(crate) fn evaluate_binary(
    left: &Entity,
    right: &Entity,
    op: BinaryOp,
) -> Result<Entity, EvalError> {
    match (left, right) {
        (Entity::Integer(a), Entity::Integer(b)) => eval_int_binary(*a, *b, op),
        (Entity::Str(a), Entity::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Entity::string(joined))
            }
            BinaryOp::Eq => Ok(Entity::bool(a == b)),
            BinaryOp::NotEq => Ok(Entity::bool(a != b)),
            _ => Err(unknown_infix_operator(left, op, right)),
        },
        _ => match op {
            BinaryOp::Eq => Ok(Entity::bool(left.is_identical(right))),
            BinaryOp::NotEq => Ok(Entity::bool(!left.is_identical(right))),
            _ if left.entity_type() != right.entity_type() => {
                Err(type_mismatch(left, op, right))
            }
            _ => Err(unknown_infix_operator(left, op, right)),
        },
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Entity, EvalError> {
    let value = match op {
        BinaryOp::Add => Entity::int(a.wrapping_add(b)),
        BinaryOp::Sub => Entity::int(a.wrapping_sub(b)),
        BinaryOp::Mul => Entity::int(a.wrapping_mul(b)),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Entity::int(a.wrapping_div(b))
        }
        BinaryOp::Lt => Entity::bool(a < b),
        BinaryOp::LtEq => Entity::bool(a <= b),
        BinaryOp::Gt => Entity::bool(a > b),
        BinaryOp::GtEq => Entity::bool(a >= b),
        BinaryOp::Eq => Entity::bool(a == b),
        BinaryOp::NotEq => Entity::bool(a != b),
    };
    Ok(value)
}

use pretty_assertions::assert_eq;
use quill_ir::PrefixOp;

use crate::unary_operators::evaluate_unary;
use crate::Entity;

#[test]
fn negate_integers() {
    assert_eq!(
        evaluate_unary(&Entity::int(5), PrefixOp::Neg),
        Ok(Entity::int(-5))
    );
    assert_eq!(
        evaluate_unary(&Entity::int(i64::MIN), PrefixOp::Neg),
        Ok(Entity::int(i64::MIN))
    );
}

#[test]
fn negate_non_integer_is_unknown_operator() {
    let result = evaluate_unary(&Entity::bool(true), PrefixOp::Neg).map_err(|e| e.to_string());
    assert_eq!(result, Err("unknown operator: -BOOLEAN".to_owned()));
    let result = evaluate_unary(&Entity::string("x"), PrefixOp::Neg).map_err(|e| e.to_string());
    assert_eq!(result, Err("unknown operator: -STRING".to_owned()));
}

#[test]
fn bang_uses_truthiness() {
    let cases = [
        (Entity::bool(true), false),
        (Entity::bool(false), true),
        (Entity::Null, true),
        (Entity::int(0), false),
        (Entity::int(5), false),
        (Entity::string(""), false),
        (Entity::array(vec![]), false),
    ];
    for (operand, expected) in cases {
        assert_eq!(
            evaluate_unary(&operand, PrefixOp::Not),
            Ok(Entity::bool(expected)),
            "!{}",
            operand.inspect()
        );
    }
}

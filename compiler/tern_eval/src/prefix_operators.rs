//! Prefix operator semantics.

use tern_ir::PrefixOp;
use tern_object::{integer_overflow, unknown_prefix_operator, Object};

use crate::OverflowPolicy;

/// Evaluate `<operator><right>`.
///
/// `operator` is the raw token; a token with no rule yields an
/// `unknown operator` error for the operand type.
pub fn evaluate_prefix(operator: &str, right: &Object, overflow: OverflowPolicy) -> Object {
    match PrefixOp::from_symbol(operator) {
        Some(PrefixOp::Not) => eval_not(right),
        Some(PrefixOp::Neg) => eval_neg(right, overflow),
        None => unknown_prefix_operator(operator, right.type_tag()),
    }
}

/// `!`: inverts booleans, `!null` is `true`, anything else is `false`.
fn eval_not(right: &Object) -> Object {
    match right {
        Object::Boolean(b) => Object::native_bool(!b.value()),
        Object::Null(_) => Object::native_bool(true),
        Object::Integer(_) | Object::ReturnValue(_) | Object::Error(_) => Object::native_bool(false),
    }
}

/// `-`: integers only.
fn eval_neg(right: &Object, overflow: OverflowPolicy) -> Object {
    match right {
        Object::Integer(n) => overflow
            .select(n.checked_neg(), n.wrapping_neg())
            .map_or_else(|| integer_overflow("negation"), Object::integer),
        _ => unknown_prefix_operator(PrefixOp::Neg.as_symbol(), right.type_tag()),
    }
}

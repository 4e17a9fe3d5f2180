//! Infix operator semantics.
//!
//! Direct enum-based dispatch: the operand types are a closed set, so the
//! rules are a `match` over `(left, right)` and the resolved operator.
//!
//! - two integers: arithmetic and numeric comparison
//! - different types: `type mismatch`
//! - same non-integer type: `==`/`!=` by identity, anything else unknown

use tern_ir::InfixOp;
use tern_object::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator, Object, ObjectType,
};

use crate::OverflowPolicy;

/// Evaluate `left <operator> right`.
///
/// `operator` is the raw token; a token with no rule yields an
/// `unknown operator` error for the operand types.
pub fn evaluate_infix(
    operator: &str,
    left: &Object,
    right: &Object,
    overflow: OverflowPolicy,
) -> Object {
    let (left_type, right_type) = (left.type_tag(), right.type_tag());
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(operator, *a, *b, overflow),
        _ if left_type != right_type => type_mismatch(left_type, operator, right_type),
        // Booleans and null are singletons, so identity is equality here.
        _ => match InfixOp::from_symbol(operator) {
            Some(InfixOp::Eq) => Object::native_bool(left.is_identical(right)),
            Some(InfixOp::NotEq) => Object::native_bool(!left.is_identical(right)),
            _ => unknown_infix_operator(left_type, operator, right_type),
        },
    }
}

/// Binary operations on integers.
///
/// Division truncates toward zero. A zero divisor is an error; the remaining
/// overflow cases (including `i64::MIN / -1`) follow the policy.
fn eval_integer_infix(operator: &str, a: i64, b: i64, overflow: OverflowPolicy) -> Object {
    let Some(op) = InfixOp::from_symbol(operator) else {
        return unknown_infix_operator(ObjectType::Integer, operator, ObjectType::Integer);
    };
    match op {
        InfixOp::Add => arith(overflow, a.checked_add(b), a.wrapping_add(b), "addition"),
        InfixOp::Sub => arith(overflow, a.checked_sub(b), a.wrapping_sub(b), "subtraction"),
        InfixOp::Mul => arith(overflow, a.checked_mul(b), a.wrapping_mul(b), "multiplication"),
        InfixOp::Div => {
            if b == 0 {
                division_by_zero()
            } else {
                arith(overflow, a.checked_div(b), a.wrapping_div(b), "division")
            }
        }
        InfixOp::Lt => Object::native_bool(a < b),
        InfixOp::Gt => Object::native_bool(a > b),
        InfixOp::Eq => Object::native_bool(a == b),
        InfixOp::NotEq => Object::native_bool(a != b),
    }
}

#[inline]
fn arith(
    overflow: OverflowPolicy,
    checked: Option<i64>,
    wrapped: i64,
    operation: &'static str,
) -> Object {
    overflow
        .select(checked, wrapped)
        .map_or_else(|| integer_overflow(operation), Object::integer)
}

//! Tests for prefix operator semantics.

use crate::{eval, evaluate_prefix, OverflowPolicy};
use pretty_assertions::assert_eq;
use tern_ir::Expression;
use tern_object::Object;

fn bang(expr: Expression) -> Expression {
    Expression::prefix("!", expr)
}

mod bang_operator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inverts_booleans() {
        assert_eq!(eval(&bang(Expression::bool(true))), Object::native_bool(false));
        assert_eq!(eval(&bang(Expression::bool(false))), Object::native_bool(true));
    }

    #[test]
    fn integers_are_false() {
        assert_eq!(eval(&bang(Expression::int(5))), Object::native_bool(false));
        assert_eq!(eval(&bang(Expression::int(0))), Object::native_bool(false));
    }

    #[test]
    fn double_bang() {
        assert_eq!(
            eval(&bang(bang(Expression::bool(true)))),
            Object::native_bool(true)
        );
        assert_eq!(
            eval(&bang(bang(Expression::bool(false)))),
            Object::native_bool(false)
        );
        assert_eq!(eval(&bang(bang(Expression::int(5)))), Object::native_bool(true));
    }

    #[test]
    fn null_is_true() {
        let result = evaluate_prefix("!", &Object::null(), OverflowPolicy::Wrapping);
        assert!(result.is_identical(&Object::native_bool(true)));
    }

    #[test]
    fn agrees_with_negated_truthiness() {
        for operand in [
            Object::native_bool(true),
            Object::native_bool(false),
            Object::null(),
            Object::integer(0),
            Object::integer(-3),
        ] {
            let result = evaluate_prefix("!", &operand, OverflowPolicy::Wrapping);
            assert_eq!(result, Object::native_bool(!operand.is_truthy()), "!{operand}");
        }
    }

    #[test]
    fn results_are_singletons() {
        let result = eval(&bang(Expression::bool(false)));
        assert!(result.is_identical(&Object::native_bool(true)));
    }
}

mod minus_operator {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negates_integers() {
        assert_eq!(eval(&Expression::prefix("-", Expression::int(5))), Object::integer(-5));
        assert_eq!(eval(&Expression::prefix("-", Expression::int(-10))), Object::integer(10));
        assert_eq!(eval(&Expression::prefix("-", Expression::int(0))), Object::integer(0));
    }

    #[test]
    fn double_negation() {
        let expr = Expression::prefix("-", Expression::prefix("-", Expression::int(7)));
        assert_eq!(eval(&expr), Object::integer(7));
    }

    #[test]
    fn boolean_is_unknown_operator() {
        assert_eq!(
            eval(&Expression::prefix("-", Expression::bool(true))).inspect(),
            "ERROR: unknown operator: -BOOLEAN"
        );
    }

    #[test]
    fn null_is_unknown_operator() {
        let result = evaluate_prefix("-", &Object::null(), OverflowPolicy::Wrapping);
        assert_eq!(result.inspect(), "ERROR: unknown operator: -NULL");
    }

    #[test]
    fn min_wraps_by_default() {
        assert_eq!(
            eval(&Expression::prefix("-", Expression::int(i64::MIN))),
            Object::integer(i64::MIN)
        );
    }
}

#[test]
fn unknown_prefix_token() {
    assert_eq!(
        eval(&Expression::prefix("~", Expression::int(1))).inspect(),
        "ERROR: unknown operator: ~INTEGER"
    );
}

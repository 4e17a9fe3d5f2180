use super::*;
use pretty_assertions::assert_eq;

fn message(obj: &Object) -> &str {
    match obj {
        Object::Error(err) => err.message(),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn prefix_operator_message() {
    let err = unknown_prefix_operator("-", ObjectType::Boolean);
    assert_eq!(message(&err), "unknown operator: -BOOLEAN");
}

#[test]
fn infix_operator_message() {
    let err = unknown_infix_operator(ObjectType::Boolean, "+", ObjectType::Boolean);
    assert_eq!(message(&err), "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn type_mismatch_message() {
    let err = type_mismatch(ObjectType::Integer, "+", ObjectType::Boolean);
    assert_eq!(message(&err), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn arithmetic_messages() {
    assert_eq!(message(&division_by_zero()), "division by zero");
    assert_eq!(
        message(&integer_overflow("multiplication")),
        "integer overflow in multiplication"
    );
}

#[test]
fn kind_display_matches_error_value() {
    let kind = EvalErrorKind::TypeMismatch {
        left: ObjectType::Null,
        operator: "==".to_string(),
        right: ObjectType::Integer,
    };
    let rendered = kind.to_string();
    assert_eq!(ErrorValue::from(kind).message(), rendered);
}

#[test]
fn error_value_keeps_message_only() {
    let err = ErrorValue::new("something broke");
    assert_eq!(err.to_string(), "something broke");
    assert_eq!(err, ErrorValue::new("something broke"));
}

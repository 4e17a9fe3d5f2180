//! Error values.
//!
//! Errors are ordinary objects: the evaluator returns them like any other
//! result and every caller checks for them before going further. There is no
//! separate error channel.
//!
//! `EvalErrorKind` owns the message formats. An `ErrorValue` keeps only the
//! rendered message; no kind, position or code survives construction.
//! Factory functions (e.g. `type_mismatch()`) build the finished
//! `Object::Error`.

use std::fmt;

use thiserror::Error;

use crate::object::{Object, ObjectType};

/// Every diagnostic the evaluator can produce.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// Prefix operator not defined for the operand type.
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator { operator: String, right: ObjectType },

    /// Infix operator not defined for two operands of the same type.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: String,
        right: ObjectType,
    },

    /// Infix operator applied to operands of different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectType,
        operator: String,
        right: ObjectType,
    },

    #[error("division by zero")]
    DivisionByZero,

    /// Only raised under the checked overflow policy.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// Message-bearing error object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    message: String,
}

impl ErrorValue {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        ErrorValue {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<EvalErrorKind> for ErrorValue {
    fn from(kind: EvalErrorKind) -> Self {
        ErrorValue::new(kind.to_string())
    }
}

// Factory functions

#[cold]
pub fn unknown_prefix_operator(operator: &str, right: ObjectType) -> Object {
    Object::error(EvalErrorKind::UnknownPrefixOperator {
        operator: operator.to_owned(),
        right,
    })
}

#[cold]
pub fn unknown_infix_operator(left: ObjectType, operator: &str, right: ObjectType) -> Object {
    Object::error(EvalErrorKind::UnknownInfixOperator {
        left,
        operator: operator.to_owned(),
        right,
    })
}

#[cold]
pub fn type_mismatch(left: ObjectType, operator: &str, right: ObjectType) -> Object {
    Object::error(EvalErrorKind::TypeMismatch {
        left,
        operator: operator.to_owned(),
        right,
    })
}

#[cold]
pub fn division_by_zero() -> Object {
    Object::error(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> Object {
    Object::error(EvalErrorKind::IntegerOverflow { operation })
}

#[cfg(test)]
mod tests;

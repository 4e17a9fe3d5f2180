//! Runtime objects.
//!
//! # Singletons
//!
//! `Boolean` and `Null` have private fields, so the statics [`TRUE`],
//! [`FALSE`] and [`NULL`] are the only instances that can exist. Objects hold
//! `&'static` references to them:
//!
//! ```text
//! Object::native_bool(true)   // Object::Boolean(&TRUE)
//! Object::null()              // Object::Null(&NULL)
//! ```
//!
//! Integers, return wrappers and errors are created fresh for every result.

mod heap;

use std::fmt;
use std::ptr;

use crate::errors::ErrorValue;

pub use heap::Heap;

/// Type tag reported by every object.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    ReturnValue,
    Error,
}

impl ObjectType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean instance. Only [`TRUE`] and [`FALSE`] exist.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Boolean {
    value: bool,
}

impl Boolean {
    #[inline]
    pub const fn value(&self) -> bool {
        self.value
    }
}

/// Null instance. Only [`NULL`] exists.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Null {
    _private: (),
}

pub static TRUE: Boolean = Boolean { value: true };
pub static FALSE: Boolean = Boolean { value: false };
pub static NULL: Null = Null { _private: () };

/// Runtime value produced by evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Object {
    /// 64-bit signed integer.
    Integer(i64),
    /// Always `&TRUE` or `&FALSE`.
    Boolean(&'static Boolean),
    /// Always `&NULL`.
    Null(&'static Null),
    /// Result of a `return` statement, unwrapped once at program level.
    ReturnValue(Heap<Object>),
    /// Diagnostic that aborts the enclosing evaluation.
    Error(ErrorValue),
}

// Factory methods
impl Object {
    #[inline]
    pub fn integer(value: i64) -> Self {
        Object::Integer(value)
    }

    /// The shared boolean singleton for `value`.
    #[inline]
    pub fn native_bool(value: bool) -> Self {
        Object::Boolean(if value { &TRUE } else { &FALSE })
    }

    /// The shared null singleton.
    #[inline]
    pub fn null() -> Self {
        Object::Null(&NULL)
    }

    pub fn return_value(inner: Object) -> Self {
        Object::ReturnValue(Heap::new(inner))
    }

    pub fn error(error: impl Into<ErrorValue>) -> Self {
        Object::Error(error.into())
    }
}

impl Object {
    pub fn type_tag(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null(_) => ObjectType::Null,
            Object::ReturnValue(_) => ObjectType::ReturnValue,
            Object::Error(_) => ObjectType::Error,
        }
    }

    /// Human-readable rendering, as shown by a REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// `null` and `false` are falsy; everything else, `0` included, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Null(_) => false,
            Object::Boolean(b) => b.value(),
            Object::Integer(_) | Object::ReturnValue(_) | Object::Error(_) => true,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Whether evaluation of a block must stop at this result.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Object::ReturnValue(_) | Object::Error(_))
    }

    /// Identity comparison.
    ///
    /// True only when both sides are the same instance: the same singleton, or
    /// the same heap allocation. Integers and errors have no shared instance,
    /// so they are never identical, even to an equal value.
    pub fn is_identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Boolean(a), Object::Boolean(b)) => ptr::eq(*a, *b),
            (Object::Null(a), Object::Null(b)) => ptr::eq(*a, *b),
            (Object::ReturnValue(a), Object::ReturnValue(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Strip one `ReturnValue` wrapper, if present.
    pub fn unwrap_return(self) -> Object {
        match self {
            Object::ReturnValue(inner) => inner.into_inner(),
            other => other,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::Boolean(b) => write!(f, "{}", b.value()),
            Object::Null(_) => f.write_str("null"),
            Object::ReturnValue(inner) => write!(f, "{}", **inner),
            Object::Error(err) => write!(f, "ERROR: {}", err.message()),
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::native_bool(value)
    }
}

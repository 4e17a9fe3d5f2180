//! Tern Object - runtime values produced by evaluation.
//!
//! - [`Object`]: the closed set of runtime values
//! - [`ObjectType`]: the type tag every object reports
//! - [`TRUE`], [`FALSE`], [`NULL`]: the only boolean and null instances
//! - [`ErrorValue`] and [`EvalErrorKind`]: errors as ordinary values
//!
//! Objects are immutable. Booleans and null are never constructed during
//! evaluation; they always point at the process-wide singletons, which is
//! what makes identity a valid equality test for them.

mod errors;
mod object;

pub use errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator,
    unknown_prefix_operator, ErrorValue, EvalErrorKind,
};
pub use object::{Boolean, Heap, Null, Object, ObjectType, FALSE, NULL, TRUE};

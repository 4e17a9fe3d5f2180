#![deny(clippy::arithmetic_side_effects)]
//! Tern Eval - tree-walking evaluator for Tern programs.
//!
//! # Architecture
//!
//! - [`eval`]: single entry point, evaluates any [`Node`] with the default config
//! - [`Evaluator`]: the recursive walk, configured through [`EvaluatorBuilder`]
//! - [`evaluate_infix`]: direct enum-based binary operator dispatch
//! - [`evaluate_prefix`]: direct enum-based prefix operator dispatch
//! - `Object` types from `tern_object`
//!
//! # Control Flow
//!
//! Errors and return signals are both ordinary objects. Every recursive call
//! site stops on an `Error` and hands it back unchanged. A `ReturnValue`
//! stops a block without being unwrapped; only program evaluation strips it.

mod config;
mod interpreter;
mod operators;
mod prefix_operators;

#[cfg(test)]
mod tests;

pub use config::{EvalConfig, OverflowPolicy};
pub use interpreter::{Evaluator, EvaluatorBuilder};
pub use operators::evaluate_infix;
pub use prefix_operators::evaluate_prefix;

// Re-export the object model and tree for drivers
pub use tern_ir::Node;
pub use tern_object::{ErrorValue, EvalErrorKind, Object, ObjectType};

/// Evaluate `node` with the default configuration.
///
/// Intended to be called once per parsed [`tern_ir::Program`]; the caller
/// renders the result with [`Object::inspect`] and decides what to do with
/// an `Error`.
pub fn eval<'a>(node: impl Into<Node<'a>>) -> Object {
    Evaluator::default().eval(node)
}

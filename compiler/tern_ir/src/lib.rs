//! Tern IR - syntax tree types for the Tern evaluator.
//!
//! The lexer and parser live outside this workspace. They produce the tree
//! defined here and hand its root to `tern_eval::eval`, which only reads it.
//!
//! - [`Program`] and [`BlockStatement`] hold ordered statements.
//! - [`Statement`] is either a `return` or a bare expression.
//! - [`Expression`] covers prefix/infix operators, `if`, and literals.
//! - [`Node`] borrows any of the above as the evaluator's single input.
//!
//! Operators travel as the raw token text. [`PrefixOp`] and [`InfixOp`]
//! resolve the tokens the evaluator understands.
//!
//! Every node derives `Clone`, `Eq`, `Hash` and `Debug`. With the `serde`
//! feature enabled, every node is also `Serialize`/`Deserialize`.

pub mod ast;

pub use ast::{
    BlockStatement, BooleanLiteral, Expression, ExpressionStatement, IfExpression, InfixExpression,
    InfixOp, IntegerLiteral, Node, PrefixExpression, PrefixOp, Program, ReturnStatement, Statement,
};

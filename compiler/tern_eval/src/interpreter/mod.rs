//! Recursive evaluation of the syntax tree.
//!
//! Two unwinding rules make `return` work:
//!
//! - a block stops at the first `ReturnValue` or `Error` and returns it as is,
//!   so the wrapper survives any number of enclosing blocks and `if`s;
//! - a program stops at the same results but strips the `ReturnValue`
//!   wrapper, which happens exactly once, at the outermost level.

mod builder;

use tern_ir::{BlockStatement, Expression, IfExpression, Node, Program, Statement};
use tern_object::Object;
use tern_stack::with_stack_growth;

use crate::{evaluate_infix, evaluate_prefix, EvalConfig};

pub use builder::EvaluatorBuilder;

/// Hand back `$obj` from the enclosing function if it is an error,
/// otherwise yield it.
macro_rules! propagate {
    ($obj:expr) => {
        match $obj {
            err @ Object::Error(_) => return err,
            obj => obj,
        }
    };
}

/// Tree-walking evaluator.
///
/// Holds only its configuration. Evaluation keeps no state between calls,
/// so one evaluator can serve any number of trees, from any number of threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator { config }
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate any node.
    ///
    /// Only a [`Program`] unwraps return signals: evaluating a block, statement
    /// or expression directly can yield an `Object::ReturnValue`.
    pub fn eval<'a>(&self, node: impl Into<Node<'a>>) -> Object {
        match node.into() {
            Node::Program(program) => self.eval_program(program),
            Node::Block(block) => self.eval_block(block),
            Node::Statement(stmt) => self.eval_statement(stmt),
            Node::Expression(expr) => self.eval_expression(expr),
        }
    }

    /// Evaluate statements in order; the last result is the program's result.
    ///
    /// An empty program evaluates to `null`.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program) -> Object {
        let mut result = Object::null();
        for stmt in &program.statements {
            result = self.eval_statement(stmt);
            match &result {
                Object::ReturnValue(_) => {
                    tracing::trace!("return reached program level");
                    return result.unwrap_return();
                }
                Object::Error(err) => {
                    tracing::debug!(error = %err, "program stopped on error");
                    return result;
                }
                _ => {}
            }
        }
        result
    }

    /// Evaluate statements in order, stopping without unwrapping at the first
    /// return signal or error. An empty block evaluates to `null`.
    pub fn eval_block(&self, block: &BlockStatement) -> Object {
        let mut result = Object::null();
        for stmt in &block.statements {
            result = self.eval_statement(stmt);
            match &result {
                Object::ReturnValue(_) => {
                    tracing::trace!("block stopped on return");
                    return result;
                }
                Object::Error(err) => {
                    tracing::debug!(error = %err, "block stopped on error");
                    return result;
                }
                _ => {}
            }
        }
        result
    }

    fn eval_statement(&self, stmt: &Statement) -> Object {
        match stmt {
            Statement::Return(ret) => {
                let value = propagate!(self.eval_expression(&ret.return_value));
                Object::return_value(value)
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression),
        }
    }

    fn eval_expression(&self, expr: &Expression) -> Object {
        with_stack_growth(self.config.grow_stack, || self.eval_expression_inner(expr))
    }

    fn eval_expression_inner(&self, expr: &Expression) -> Object {
        match expr {
            Expression::Integer(lit) => Object::integer(lit.value),
            Expression::Boolean(lit) => Object::native_bool(lit.value),
            Expression::Prefix(prefix) => {
                let right = propagate!(self.eval_expression(&prefix.right));
                evaluate_prefix(&prefix.operator, &right, self.config.overflow)
            }
            Expression::Infix(infix) => {
                let left = propagate!(self.eval_expression(&infix.left));
                let right = propagate!(self.eval_expression(&infix.right));
                evaluate_infix(&infix.operator, &left, &right, self.config.overflow)
            }
            Expression::If(if_expr) => self.eval_if(if_expr),
        }
    }

    /// Taken branch's result, or `null` when the condition is falsy and there
    /// is no `else`.
    fn eval_if(&self, if_expr: &IfExpression) -> Object {
        let condition = propagate!(self.eval_expression(&if_expr.condition));
        if condition.is_truthy() {
            self.eval_block(&if_expr.consequence)
        } else if let Some(alternative) = &if_expr.alternative {
            self.eval_block(alternative)
        } else {
            Object::null()
        }
    }
}

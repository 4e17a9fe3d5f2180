//! Evaluation tests grouped by concern.

mod prefix_operators_tests;

use tern_ir::{BlockStatement, Expression, Program, Statement};

/// `<left> <op> <right>` over integer literals.
fn int_infix(left: i64, op: &str, right: i64) -> Expression {
    Expression::infix(Expression::int(left), op, Expression::int(right))
}

/// A program of expression statements, one per expression.
fn program_of(exprs: Vec<Expression>) -> Program {
    Program::new(exprs.into_iter().map(Statement::expr).collect())
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement::new(statements)
}

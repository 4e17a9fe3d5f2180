//! Syntax tree nodes.
//!
//! Recursive expressions are boxed; statements and blocks own their children.
//! The tree is immutable from the evaluator's point of view.

mod expr;
mod operators;
mod stmt;

#[cfg(test)]
mod tests;

use std::fmt;

pub use expr::{
    BooleanLiteral, Expression, IfExpression, InfixExpression, IntegerLiteral, PrefixExpression,
};
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{BlockStatement, ExpressionStatement, ReturnStatement, Statement};

/// Root of a parsed source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

/// Any evaluable node, borrowed from its owner.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Block(&'a BlockStatement),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Statement(stmt) => write!(f, "{stmt}"),
            Node::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

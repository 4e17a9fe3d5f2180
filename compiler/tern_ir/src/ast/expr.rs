//! Expression Types
//!
//! Operator tokens are kept verbatim so the evaluator can report the exact
//! text of an operator it does not know.

use std::fmt;

use super::BlockStatement;

/// Expression kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// `<op><right>`, e.g. `!ok`, `-5`
    Prefix(PrefixExpression),
    /// `<left> <op> <right>`
    Infix(InfixExpression),
    /// `if (<condition>) { ... } else { ... }`
    If(IfExpression),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
}

// Constructors
impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Integer(IntegerLiteral { value })
    }

    pub fn bool(value: bool) -> Self {
        Expression::Boolean(BooleanLiteral { value })
    }

    pub fn prefix(operator: impl Into<String>, right: Expression) -> Self {
        Expression::Prefix(PrefixExpression {
            operator: operator.into(),
            right: Box::new(right),
        })
    }

    pub fn infix(left: Expression, operator: impl Into<String>, right: Expression) -> Self {
        Expression::Infix(InfixExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn if_else(
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Prefix(expr) => write!(f, "{expr}"),
            Expression::Infix(expr) => write!(f, "{expr}"),
            Expression::If(expr) => write!(f, "{expr}"),
            Expression::Integer(lit) => write!(f, "{}", lit.value),
            Expression::Boolean(lit) => write!(f, "{}", lit.value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixExpression {
    pub operator: String,
    pub right: Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfixExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prefix and infix expressions already render inside parentheses.
        match &*self.condition {
            Expression::Prefix(_) | Expression::Infix(_) => write!(f, "if {}", self.condition)?,
            condition => write!(f, "if ({condition})")?,
        }
        write!(f, " {}", self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerLiteral {
    pub value: i64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanLiteral {
    pub value: bool,
}

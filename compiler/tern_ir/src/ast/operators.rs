//! Prefix and infix operators.
//!
//! The tree stores operators as token text; these enums are the closed set
//! the evaluator gives meaning to. Anything else is an unknown operator at
//! evaluation time, not a malformed tree.

use std::fmt;

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `-`
    Neg,
}

impl PrefixOp {
    /// Resolve a token, or `None` if the evaluator has no rule for it.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(Self::Not),
            "-" => Some(Self::Neg),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Infix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOp {
    /// Resolve a token, or `None` if the evaluator has no rule for it.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            _ => None,
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

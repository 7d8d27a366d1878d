//! Operator kinds.

use std::fmt;

/// Binary operators. `Assign` is an expression-level operator in Slate,
/// distinct from the assignment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Eq,
    Gt,
    Lt,
    Add,
    Sub,
    Mult,
    Div,
    Assign,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Eq => "eq",
            BinaryOp::Gt => "gt",
            BinaryOp::Lt => "lt",
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mult => "mult",
            BinaryOp::Div => "div",
            BinaryOp::Assign => "assign",
        };
        write!(f, "{name}")
    }
}

/// Unary operators. `Inc` and `Dec` are the postfix forms and require an
/// integer lvalue operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Inc,
    Dec,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnaryOp::Not => "not",
            UnaryOp::Minus => "minus",
            UnaryOp::Inc => "inc",
            UnaryOp::Dec => "dec",
        };
        write!(f, "{name}")
    }
}

//! Expression nodes.

use crate::op::{BinaryOp, UnaryOp};
use slate_core::Span;

/// An identifier occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Expressions in Slate.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal
    IntLiteral { value: i64, span: Span },

    /// Boolean literal
    BoolLiteral { value: bool, span: Span },

    /// Identifier reference (variable, function, or struct name)
    Identifier(Ident),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },

    /// Unary operation: `op expr` (or postfix for inc/dec)
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },

    /// List element access: `instance[index]`
    ListIndex {
        instance: Box<Expr>,
        index: Box<Expr>,
        span: Span,
    },

    /// Struct member access: `instance.member`
    StructAccess {
        instance: Box<Expr>,
        member: Ident,
        span: Span,
    },

    /// List size query: `size(list)`
    ListSize { list: Box<Expr>, span: Span },

    /// List append: `append(list, element)`
    ListAppend {
        list: Box<Expr>,
        element: Box<Expr>,
        span: Span,
    },

    /// Parenthesized expression: `(inner)`
    Paren { inner: Box<Expr>, span: Span },

    /// Function call: `callee(args...)`
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    /// The source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Expr::IntLiteral { span, .. }
            | Expr::BoolLiteral { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::ListIndex { span, .. }
            | Expr::StructAccess { span, .. }
            | Expr::ListSize { span, .. }
            | Expr::ListAppend { span, .. }
            | Expr::Paren { span, .. }
            | Expr::Call { span, .. } => *span,
            Expr::Identifier(ident) => ident.span,
        }
    }
}

//! Statement nodes.

use crate::decl::VarDecl;
use crate::expr::Expr;
use slate_core::Span;

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Statements in Slate.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Block statement: `{ ... }`
    Block(Block),

    /// Variable declaration statement; one statement may declare several
    /// variables.
    VarDec { vars: Vec<VarDecl>, span: Span },

    /// Assignment statement: `lvalue = rvalue;`
    Assign {
        lvalue: Expr,
        rvalue: Expr,
        span: Span,
    },

    /// Conditional: `if cond then ... [else ...]`
    Conditional {
        condition: Expr,
        then_body: Box<Statement>,
        else_body: Option<Box<Statement>>,
        span: Span,
    },

    /// Loop: `loop (cond) { ... }`
    Loop {
        condition: Expr,
        body: Box<Statement>,
        span: Span,
    },

    /// Display statement: `display(arg);`
    Display { arg: Expr, span: Span },

    /// Return statement: `return [expr];`
    Return { value: Option<Expr>, span: Span },

    /// Function call in statement position: `f(args);`
    Call { call: Expr, span: Span },

    /// List append in statement position: `append(list, element);`
    Append { expr: Expr, span: Span },

    /// List size query in statement position: `size(list);`
    Size { expr: Expr, span: Span },
}

impl Statement {
    /// The source span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Statement::Block(block) => block.span,
            Statement::VarDec { span, .. }
            | Statement::Assign { span, .. }
            | Statement::Conditional { span, .. }
            | Statement::Loop { span, .. }
            | Statement::Display { span, .. }
            | Statement::Return { span, .. }
            | Statement::Call { span, .. }
            | Statement::Append { span, .. }
            | Statement::Size { span, .. } => *span,
        }
    }
}

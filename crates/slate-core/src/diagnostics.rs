//! Semantic diagnostics emitted by type checking.
//!
//! Every finding is local and non-fatal: the checker records the diagnostic,
//! substitutes `NoType` (or a best-guess fallback) for the offending
//! expression, and keeps going. Nothing in this taxonomy aborts analysis.

use crate::span::Span;
use miette::Diagnostic;
use thiserror::Error;

/// The kinds of semantic errors the type checker can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("left side of assignment must be a valid lvalue")]
    LeftSideNotLvalue,

    #[error("unsupported operand type for {0}")]
    UnsupportedOperandType(String),

    #[error("calling a value that is not a function pointer")]
    CallOnNonCallable,

    #[error("cannot use the value of a void function")]
    VoidValueMisuse,

    #[error("number of arguments does not match the definition of the function")]
    ArityMismatch,

    #[error("argument type does not match the definition of the function")]
    ArgTypeMismatch,

    #[error("variable `{0}` is not declared")]
    VarNotDeclared(String),

    #[error("struct `{0}` is not declared")]
    StructNotDeclared(String),

    #[error("struct `{0}` has no member `{1}`")]
    StructMemberNotFound(String, String),

    #[error("list index must be an integer")]
    ListIndexNotInt,

    #[error("access by index on a value that is not a list")]
    AccessByIndexOnNonList,

    #[error("member access on a value that is not a struct")]
    AccessOnNonStruct,

    #[error("operand is not a list")]
    NotAList,

    #[error("condition must be a boolean")]
    ConditionNotBool,

    #[error("returned value does not match the declared return type")]
    ReturnTypeMismatch,

    #[error("cannot use return here")]
    CannotReturnHere,

    #[error("missing return statement")]
    MissingReturnStatement,

    #[error("cannot declare a variable here")]
    CannotDeclareHere,

    #[error("unsupported type for display")]
    UnsupportedDisplayType,
}

/// A single semantic finding, anchored to the source span of the offending
/// node. The surrounding driver is responsible for rendering these.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
#[diagnostic(code(slate::semantic))]
pub struct SemanticDiagnostic {
    pub kind: DiagnosticKind,
    #[label("here")]
    pub span: Span,
}

impl SemanticDiagnostic {
    #[must_use]
    pub const fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The source line this diagnostic points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.span.line()
    }
}

//! Declaration nodes.

use crate::expr::{Expr, Ident};
use crate::stmt::Statement;
use slate_core::{Span, Type};

/// A complete Slate program (compilation unit).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub structs: Vec<StructDecl>,
    pub functions: Vec<FunctionDecl>,
    pub main: MainDecl,
}

/// Struct declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Ident,
    pub members: Vec<StructMember>,
    pub span: Span,
}

/// A struct body entry: a plain field or a setter/getter member.
#[derive(Debug, Clone, PartialEq)]
pub enum StructMember {
    Field(VarDecl),
    SetGet(SetGetDecl),
}

/// Setter/getter member declaration. The setter body receives the incoming
/// value through an implicit parameter; the getter body must produce a value
/// of the member type on every path.
#[derive(Debug, Clone, PartialEq)]
pub struct SetGetDecl {
    pub name: Ident,
    pub member_type: Type,
    pub setter_body: Box<Statement>,
    pub getter_body: Box<Statement>,
    pub span: Span,
}

/// Function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<VarDecl>,
    pub return_type: Type,
    pub body: Box<Statement>,
    pub span: Span,
}

/// The program entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct MainDecl {
    pub body: Box<Statement>,
    pub span: Span,
}

/// A single variable declaration, also used for function parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ident,
    pub var_type: Type,
    pub default: Option<Expr>,
    pub span: Span,
}

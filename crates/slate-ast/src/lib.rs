//! Abstract Syntax Tree (AST) definitions for Slate.
//!
//! The parser produces these nodes; semantic analysis consumes them. Every
//! node carries the span of the source text it came from, which is where
//! semantic diagnostics are anchored.

mod decl;
mod expr;
mod op;
mod stmt;

pub use decl::{FunctionDecl, MainDecl, Program, SetGetDecl, StructDecl, StructMember, VarDecl};
pub use expr::{Expr, Ident};
pub use op::{BinaryOp, UnaryOp};
pub use stmt::{Block, Statement};

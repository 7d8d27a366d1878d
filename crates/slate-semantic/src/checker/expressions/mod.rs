//! Expression type checking.
//!
//! This module is split into focused submodules:
//! - `operators`: binary and unary operator rules
//! - `access`: list indexing, list size/append, struct member access
//! - `calls`: function call checking
//!
//! Every handler that does not denote assignable storage sets the
//! `saw_non_lvalue` flag on entry; identifier references, struct member
//! access, and list index access are the only handlers that leave it alone.

mod access;
mod calls;
mod operators;

use crate::checker::core::TypeChecker;
use crate::symbol_table::{Namespace, Symbol};
use slate_ast::{Expr, Ident};
use slate_core::{DiagnosticKind, Type};

impl TypeChecker {
    /// Computes the static type of an expression.
    ///
    /// Diagnostics are recorded against the offending node and evaluation
    /// continues; a node whose type cannot be determined yields
    /// [`Type::NoType`], which downstream checks absorb.
    pub fn type_of(&mut self, expr: &Expr) -> Type {
        match expr {
            Expr::IntLiteral { .. } => {
                self.saw_non_lvalue = true;
                Type::Int
            }
            Expr::BoolLiteral { .. } => {
                self.saw_non_lvalue = true;
                Type::Bool
            }
            Expr::Identifier(ident) => self.type_of_identifier(ident),
            Expr::Binary {
                op,
                left,
                right,
                span,
            } => self.check_binary(*op, left, right, *span),
            Expr::Unary { op, operand, span } => self.check_unary(*op, operand, *span),
            Expr::ListIndex {
                instance,
                index,
                span,
            } => self.check_list_index(instance, index, *span),
            Expr::StructAccess {
                instance,
                member,
                span,
            } => self.check_struct_access(instance, member, *span),
            Expr::ListSize { list, span } => self.check_list_size(list, *span),
            Expr::ListAppend {
                list,
                element,
                span,
            } => self.check_list_append(list, element, *span),
            Expr::Paren { inner, .. } => {
                // A parenthesized bare identifier is deliberately not an
                // lvalue; any other parenthesized form keeps the lvalue-ness
                // of its contents.
                if matches!(inner.as_ref(), Expr::Identifier(_)) {
                    self.saw_non_lvalue = true;
                }
                self.type_of(inner)
            }
            Expr::Call { callee, args, span } => self.check_call(callee, args, *span),
        }
    }

    /// Whether `expr` denotes assignable storage.
    ///
    /// Re-evaluates the expression with diagnostics muted and a fresh
    /// non-lvalue flag, then restores both, so the probe leaves no trace on
    /// the enclosing traversal and nests correctly when queried from within
    /// another probe.
    pub fn is_lvalue(&mut self, expr: &Expr) -> bool {
        let prev_muted = self.diagnostics.set_muted(true);
        let prev_seen = std::mem::replace(&mut self.saw_non_lvalue, false);

        self.type_of(expr);
        let is_lvalue = !self.saw_non_lvalue;

        self.saw_non_lvalue = prev_seen;
        self.diagnostics.set_muted(prev_muted);
        is_lvalue
    }

    /// Resolution priority: struct name, then function name (both global),
    /// then the innermost variable. First match wins.
    fn type_of_identifier(&mut self, ident: &Ident) -> Type {
        if self
            .symbols
            .lookup_root(Namespace::Struct, &ident.name)
            .is_some()
        {
            return Type::Struct(ident.name.clone());
        }
        if let Some(Symbol::Function {
            params,
            return_type,
            ..
        }) = self.symbols.lookup_root(Namespace::Function, &ident.name)
        {
            // A function name used as a value denotes a function pointer;
            // the constructor applies nullary normalization.
            return Type::function_pointer(params.clone(), return_type.clone());
        }
        if let Some(Symbol::Variable { ty }) = self.symbols.lookup(Namespace::Variable, &ident.name)
        {
            return ty.clone();
        }
        self.report(
            DiagnosticKind::VarNotDeclared(ident.name.clone()),
            ident.span,
        );
        Type::NoType
    }
}

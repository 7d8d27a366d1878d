//! List indexing, list size/append, and struct member access.

use crate::checker::core::TypeChecker;
use crate::symbol_table::{Namespace, Symbol};
use slate_ast::{Expr, Ident};
use slate_core::{DiagnosticKind, Span, Type};

impl TypeChecker {
    pub(super) fn check_list_index(
        &mut self,
        instance: &Expr,
        index: &Expr,
        span: Span,
    ) -> Type {
        // Indexing denotes storage, so this handler leaves the non-lvalue
        // flag alone; the index sub-expression must not disturb it either.
        let saved = self.saw_non_lvalue;
        let index_type = self.type_of(index);
        self.saw_non_lvalue = saved;

        let instance_type = self.type_of(instance);

        if !matches!(index_type, Type::Int | Type::NoType) {
            // Non-fatal: the element type is still produced below.
            self.report(DiagnosticKind::ListIndexNotInt, span);
        }
        if instance_type.is_no_type() {
            return Type::NoType;
        }
        match instance_type {
            Type::List(element) => {
                if matches!(index_type, Type::Int) {
                    *element
                } else {
                    Type::NoType
                }
            }
            _ => {
                self.report(DiagnosticKind::AccessByIndexOnNonList, span);
                Type::NoType
            }
        }
    }

    pub(super) fn check_struct_access(
        &mut self,
        instance: &Expr,
        member: &Ident,
        span: Span,
    ) -> Type {
        let instance_type = self.type_of(instance);
        match instance_type {
            Type::Struct(name) => {
                let scope = match self.symbols.lookup_root(Namespace::Struct, &name) {
                    Some(Symbol::Struct { scope }) => *scope,
                    // Declaration collection guarantees the record; a miss
                    // means an earlier error, so only this check is skipped.
                    _ => return Type::NoType,
                };
                let member_type = match self
                    .symbols
                    .lookup_local(scope, Namespace::Variable, &member.name)
                {
                    Some(Symbol::Variable { ty }) => Some(ty.clone()),
                    _ => None,
                };
                match member_type {
                    Some(ty) => ty,
                    None => {
                        self.report(
                            DiagnosticKind::StructMemberNotFound(name, member.name.clone()),
                            span,
                        );
                        Type::NoType
                    }
                }
            }
            Type::NoType => Type::NoType,
            _ => {
                self.report(DiagnosticKind::AccessOnNonStruct, span);
                Type::NoType
            }
        }
    }

    pub(super) fn check_list_size(&mut self, list: &Expr, span: Span) -> Type {
        self.saw_non_lvalue = true;
        let list_type = self.type_of(list);
        match list_type {
            Type::List(_) => Type::Int,
            Type::NoType => Type::NoType,
            _ => {
                self.report(DiagnosticKind::NotAList, span);
                Type::NoType
            }
        }
    }

    pub(super) fn check_list_append(&mut self, list: &Expr, element: &Expr, span: Span) -> Type {
        self.saw_non_lvalue = true;
        let list_type = self.type_of(list);
        // The element is always typed, even when the first argument is not a
        // list, so its own diagnostics are recorded.
        let element_type = self.type_of(element);

        match list_type {
            Type::List(declared_element) => {
                // compatible(evaluated, declared); NoType elements absorb.
                if !element_type.compatible(&declared_element) {
                    self.report(
                        DiagnosticKind::UnsupportedOperandType("append".to_string()),
                        element.span(),
                    );
                }
                // Append mutates the list; it produces no value even when
                // the element checks out.
                Type::Void
            }
            Type::NoType => Type::NoType,
            _ => {
                self.report(DiagnosticKind::NotAList, span);
                Type::NoType
            }
        }
    }
}

//! Declaration collection.
//!
//! Builds the global scope the type checker consumes: every top-level struct
//! and function signature, struct member scopes, and the pre-built body
//! scopes owned by function and setter/getter records. The checker only
//! reads this population; it never adds to the root scope.

use crate::symbol_table::{Namespace, Symbol, SymbolTable};
use slate_ast::{Program, StructMember};

/// The name under which a setter body sees its incoming value.
pub const SETTER_VALUE_PARAM: &str = "value";

/// Collects all top-level declarations of `program` into a fresh symbol
/// table. Duplicate top-level names are a name-analysis concern, not a
/// type-checking one; the first record wins here.
#[must_use]
pub fn collect_declarations(program: &Program) -> SymbolTable {
    let mut table = SymbolTable::new();

    for decl in &program.structs {
        let scope = table.create_scope(None);
        for member in &decl.members {
            match member {
                StructMember::Field(field) => {
                    let _ = table.declare_in(
                        scope,
                        Namespace::Variable,
                        &field.name.name,
                        Symbol::Variable {
                            ty: field.var_type.clone(),
                        },
                    );
                }
                StructMember::SetGet(set_get) => {
                    let body_scope = table.create_scope(Some(scope));
                    let _ = table.declare_in(
                        body_scope,
                        Namespace::Variable,
                        SETTER_VALUE_PARAM,
                        Symbol::Variable {
                            ty: set_get.member_type.clone(),
                        },
                    );
                    let _ = table.declare_in(
                        scope,
                        Namespace::Function,
                        &set_get.name.name,
                        Symbol::Function {
                            params: vec![set_get.member_type.clone()],
                            return_type: set_get.member_type.clone(),
                            scope: body_scope,
                        },
                    );
                    // Member access reads the declared member type, same as
                    // a plain field.
                    let _ = table.declare_in(
                        scope,
                        Namespace::Variable,
                        &set_get.name.name,
                        Symbol::Variable {
                            ty: set_get.member_type.clone(),
                        },
                    );
                }
            }
        }
        let _ = table.declare_in(
            SymbolTable::ROOT,
            Namespace::Struct,
            &decl.name.name,
            Symbol::Struct { scope },
        );
    }

    for func in &program.functions {
        let body_scope = table.create_scope(Some(SymbolTable::ROOT));
        let params = func.params.iter().map(|p| p.var_type.clone()).collect();
        let _ = table.declare_in(
            SymbolTable::ROOT,
            Namespace::Function,
            &func.name.name,
            Symbol::Function {
                params,
                return_type: func.return_type.clone(),
                scope: body_scope,
            },
        );
    }

    table
}

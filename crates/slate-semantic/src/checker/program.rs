//! Program and declaration type checking.

use crate::checker::core::TypeChecker;
use crate::symbol_table::{Namespace, Symbol};
use slate_ast::{FunctionDecl, Program, SetGetDecl, StructDecl, StructMember};
use slate_core::{DiagnosticKind, Type};

impl TypeChecker {
    /// Checks a complete program: all struct declarations, then all function
    /// declarations, then the entry point.
    pub fn check_program(&mut self, program: &Program) {
        self.in_main = false;
        for decl in &program.structs {
            self.check_struct(decl);
        }
        for func in &program.functions {
            self.check_function(func);
        }

        self.in_main = true;
        self.return_types.push(Type::NoType);
        self.symbols.enter_new_scope();
        self.check_statement(&program.main.body);
        self.symbols.exit_scope();
        self.return_types.pop();
        self.in_main = false;
    }

    pub(crate) fn check_function(&mut self, func: &FunctionDecl) {
        // Enter the body scope owned by the function's record; parameters
        // are bound below. A missing record means declaration collection
        // never saw this function, so a fresh scope stands in.
        match self.symbols.lookup_root(Namespace::Function, &func.name.name) {
            Some(Symbol::Function { scope, .. }) => {
                let scope = *scope;
                self.symbols.enter_scope(scope);
            }
            _ => self.symbols.enter_new_scope(),
        }
        let mut return_type = func.return_type.clone();
        if let Type::Struct(name) = &return_type
            && self.symbols.lookup_root(Namespace::Struct, name).is_none()
        {
            self.report(DiagnosticKind::StructNotDeclared(name.clone()), func.span);
            return_type = Type::NoType;
        }
        let needs_return = !matches!(return_type, Type::Void | Type::NoType);
        self.return_types.push(return_type);

        for param in &func.params {
            self.check_var_decl(param);
        }
        self.check_statement(&func.body);

        if needs_return && !self.all_paths_return(&func.body) {
            self.report(DiagnosticKind::MissingReturnStatement, func.span);
        }

        self.return_types.pop();
        self.symbols.exit_scope();
    }

    pub(crate) fn check_struct(&mut self, decl: &StructDecl) {
        let scope = match self.symbols.lookup_root(Namespace::Struct, &decl.name.name) {
            Some(Symbol::Struct { scope }) => *scope,
            // Collection did not record it; nothing to check against.
            _ => return,
        };
        self.symbols.enter_scope(scope);
        for member in &decl.members {
            match member {
                StructMember::Field(field) => self.check_var_decl(field),
                StructMember::SetGet(set_get) => self.check_set_get(set_get),
            }
        }
        self.symbols.exit_scope();
    }

    /// Setter/getter members: the setter body runs in the member's pre-built
    /// scope with the implicit value parameter bound, and may not contain
    /// `return`; the getter body runs in the struct scope and is held to the
    /// same return rules as a function returning the member type. Neither
    /// body may declare variables.
    fn check_set_get(&mut self, set_get: &SetGetDecl) {
        let scope = match self.symbols.lookup(Namespace::Function, &set_get.name.name) {
            Some(Symbol::Function { scope, .. }) => *scope,
            _ => return,
        };
        self.return_types.push(set_get.member_type.clone());
        self.in_setter_getter = true;

        self.symbols.enter_scope(scope);
        self.in_setter = true;
        self.check_statement(&set_get.setter_body);
        self.in_setter = false;
        self.symbols.exit_scope();

        self.check_statement(&set_get.getter_body);
        if !set_get.member_type.is_void() && !self.all_paths_return(&set_get.getter_body) {
            self.report(DiagnosticKind::MissingReturnStatement, set_get.span);
        }

        self.in_setter_getter = false;
        self.return_types.pop();
    }
}

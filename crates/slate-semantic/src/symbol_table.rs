//! Symbol table for tracking variables, functions, and structs during
//! semantic analysis.
//!
//! Scopes live in an arena indexed by [`ScopeId`]; struct and function
//! records refer to the scopes they own by id, and the table additionally
//! keeps the stack of currently active scopes. Each symbol kind lives in its
//! own namespace, so a variable, a function, and a struct may share a name
//! without collision.

use slate_core::Type;
use std::collections::HashMap;
use thiserror::Error;

/// The namespaces a name can be declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Variable,
    Function,
    Struct,
}

/// Handle to a scope in the table's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// A declared symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A variable with its declared type.
    Variable { ty: Type },
    /// A function signature together with the scope owning its body.
    Function {
        params: Vec<Type>,
        return_type: Type,
        scope: ScopeId,
    },
    /// A struct together with the scope listing its members.
    Struct { scope: ScopeId },
}

/// Errors from scoped declaration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("`{0}` is already declared in this scope")]
    AlreadyDeclared(String),
}

#[derive(Debug, Default)]
struct Scope {
    entries: HashMap<(Namespace, String), Symbol>,
    parent: Option<ScopeId>,
}

/// Scoped, namespaced symbol table.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    stack: Vec<ScopeId>,
}

impl SymbolTable {
    /// The global scope, created once for the whole program.
    pub const ROOT: ScopeId = ScopeId(0);

    /// Creates a table containing only the root scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::default()],
            stack: vec![Self::ROOT],
        }
    }

    /// Allocates a scope without entering it.
    pub fn create_scope(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            entries: HashMap::new(),
            parent,
        });
        id
    }

    /// The innermost active scope.
    #[must_use]
    pub fn current_scope(&self) -> ScopeId {
        *self.stack.last().unwrap()
    }

    /// Creates a child of the current scope and enters it.
    pub fn enter_new_scope(&mut self) {
        let child = self.create_scope(Some(self.current_scope()));
        self.stack.push(child);
    }

    /// Enters an existing scope (e.g. a pre-built function body scope).
    pub fn enter_scope(&mut self, scope: ScopeId) {
        self.stack.push(scope);
    }

    /// Exits the current scope.
    ///
    /// # Panics
    /// Panics if attempting to exit the root scope.
    pub fn exit_scope(&mut self) {
        if self.stack.len() <= 1 {
            panic!("cannot exit the root scope");
        }
        self.stack.pop();
    }

    /// Declares a symbol in the given scope.
    ///
    /// # Errors
    /// Returns [`SymbolError::AlreadyDeclared`] if the namespaced name is
    /// already present in that scope; the existing record is kept.
    pub fn declare_in(
        &mut self,
        scope: ScopeId,
        namespace: Namespace,
        name: impl Into<String>,
        symbol: Symbol,
    ) -> Result<(), SymbolError> {
        let name = name.into();
        let entries = &mut self.scopes[scope.0].entries;
        if entries.contains_key(&(namespace, name.clone())) {
            return Err(SymbolError::AlreadyDeclared(name));
        }
        entries.insert((namespace, name), symbol);
        Ok(())
    }

    /// Defines a variable in the current scope. Redeclaring a variable name
    /// in the same scope is not an error: the new type replaces the old one.
    pub fn define_variable(&mut self, name: impl Into<String>, ty: Type) {
        let current = self.current_scope();
        self.scopes[current.0]
            .entries
            .insert((Namespace::Variable, name.into()), Symbol::Variable { ty });
    }

    /// Looks up a name starting at the innermost active scope and walking
    /// outward through parents.
    #[must_use]
    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<&Symbol> {
        self.lookup_from(self.current_scope(), namespace, name)
    }

    /// Looks up a name starting at `scope` and walking outward.
    #[must_use]
    pub fn lookup_from(
        &self,
        scope: ScopeId,
        namespace: Namespace,
        name: &str,
    ) -> Option<&Symbol> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(symbol) = scope.entries.get(&(namespace, name.to_string())) {
                return Some(symbol);
            }
            current = scope.parent;
        }
        None
    }

    /// Looks up a name in exactly one scope, without walking parents.
    #[must_use]
    pub fn lookup_local(
        &self,
        scope: ScopeId,
        namespace: Namespace,
        name: &str,
    ) -> Option<&Symbol> {
        self.scopes[scope.0].entries.get(&(namespace, name.to_string()))
    }

    /// Looks up a name in the root scope only. Struct and function
    /// declarations are global, so their lookups start and end here.
    #[must_use]
    pub fn lookup_root(&self, namespace: Namespace, name: &str) -> Option<&Symbol> {
        self.lookup_local(Self::ROOT, namespace, name)
    }

    /// Returns the current scope depth (0 = root scope).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut table = SymbolTable::new();
        table.define_variable("x", Type::Int);

        let found = table.lookup(Namespace::Variable, "x");
        assert_eq!(found, Some(&Symbol::Variable { ty: Type::Int }));
        assert!(table.lookup(Namespace::Variable, "y").is_none());
    }

    #[test]
    fn test_shadowing_and_scope_exit() {
        let mut table = SymbolTable::new();
        table.define_variable("x", Type::Int);

        table.enter_new_scope();
        table.define_variable("x", Type::Bool);
        assert_eq!(
            table.lookup(Namespace::Variable, "x"),
            Some(&Symbol::Variable { ty: Type::Bool })
        );

        table.exit_scope();
        assert_eq!(
            table.lookup(Namespace::Variable, "x"),
            Some(&Symbol::Variable { ty: Type::Int })
        );
    }

    #[test]
    fn test_variable_redefinition_overwrites() {
        let mut table = SymbolTable::new();
        table.define_variable("x", Type::Int);
        table.define_variable("x", Type::Bool);
        // last declaration in a scope wins
        assert_eq!(
            table.lookup(Namespace::Variable, "x"),
            Some(&Symbol::Variable { ty: Type::Bool })
        );
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let mut table = SymbolTable::new();
        let scope = table.create_scope(None);
        table.define_variable("point", Type::Int);
        table
            .declare_in(
                SymbolTable::ROOT,
                Namespace::Struct,
                "point",
                Symbol::Struct { scope },
            )
            .unwrap();

        assert_eq!(
            table.lookup(Namespace::Variable, "point"),
            Some(&Symbol::Variable { ty: Type::Int })
        );
        assert_eq!(
            table.lookup_root(Namespace::Struct, "point"),
            Some(&Symbol::Struct { scope })
        );
    }

    #[test]
    fn test_declare_duplicate_keeps_first() {
        let mut table = SymbolTable::new();
        let scope = table.create_scope(None);
        table
            .declare_in(
                SymbolTable::ROOT,
                Namespace::Function,
                "f",
                Symbol::Function {
                    params: vec![Type::Int],
                    return_type: Type::Void,
                    scope,
                },
            )
            .unwrap();
        let err = table.declare_in(
            SymbolTable::ROOT,
            Namespace::Function,
            "f",
            Symbol::Function {
                params: vec![],
                return_type: Type::Int,
                scope,
            },
        );
        assert_eq!(err, Err(SymbolError::AlreadyDeclared("f".to_string())));
    }

    #[test]
    fn test_local_lookup_does_not_walk() {
        let mut table = SymbolTable::new();
        table.define_variable("x", Type::Int);
        let child = table.create_scope(Some(SymbolTable::ROOT));
        assert!(table.lookup_local(child, Namespace::Variable, "x").is_none());
        assert!(table.lookup_from(child, Namespace::Variable, "x").is_some());
    }
}

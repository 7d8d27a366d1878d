//! Core type checker structure.

use crate::diagnostics::DiagnosticBag;
use crate::symbol_table::SymbolTable;
use slate_core::{DiagnosticKind, SemanticDiagnostic, Span, Type};

/// Type checker for Slate programs.
///
/// Owns the scope stack and the diagnostic bag, and carries the traversal
/// state the visit methods consult: the expected-return-type stack and the
/// main/setter context flags. All of it is pushed and popped in strict
/// traversal order, including on error paths, so a visit call never observes
/// state left over from a sibling.
pub struct TypeChecker {
    /// Symbol table with the pre-populated global scope
    pub(crate) symbols: SymbolTable,
    /// Accumulated findings
    pub(crate) diagnostics: DiagnosticBag,
    /// Stack of expected return types; the top is the innermost context
    pub(crate) return_types: Vec<Type>,
    /// Whether the expression currently being typed sits directly in
    /// call-statement position (permits void-returning calls)
    pub(crate) in_call_statement: bool,
    /// Set by every expression handler that does not denote storage;
    /// inspected by the lvalue probe
    pub(crate) saw_non_lvalue: bool,
    /// Inside the program entry point
    pub(crate) in_main: bool,
    /// Inside a setter body
    pub(crate) in_setter: bool,
    /// Inside a setter or getter body
    pub(crate) in_setter_getter: bool,
}

impl TypeChecker {
    /// Creates a checker over an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::new())
    }

    /// Creates a checker over a pre-populated symbol table, normally the
    /// output of [`crate::collect_declarations`].
    #[must_use]
    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            diagnostics: DiagnosticBag::new(),
            return_types: Vec::new(),
            in_call_statement: false,
            saw_non_lvalue: false,
            in_main: false,
            in_setter: false,
            in_setter_getter: false,
        }
    }

    /// The findings recorded so far, in reporting order.
    #[must_use]
    pub fn diagnostics(&self) -> &[SemanticDiagnostic] {
        self.diagnostics.as_slice()
    }

    /// Consumes the checker and returns its findings.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<SemanticDiagnostic> {
        self.diagnostics.into_vec()
    }

    pub(crate) fn report(&mut self, kind: DiagnosticKind, span: Span) {
        self.diagnostics.report(kind, span);
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

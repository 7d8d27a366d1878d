//! Semantic analysis for Slate programs.
//!
//! This crate type-checks a parsed Slate program: it resolves identifiers to
//! their declarations, computes the static type of every expression,
//! determines which expressions are assignable, and verifies control-flow
//! rules such as "every non-void function path must return". Findings are
//! accumulated and returned together; analysis never stops at the first
//! error.

mod checker;
mod collector;
mod diagnostics;
mod symbol_table;

pub use checker::TypeChecker;
pub use collector::{SETTER_VALUE_PARAM, collect_declarations};
pub use diagnostics::DiagnosticBag;
pub use symbol_table::{Namespace, ScopeId, Symbol, SymbolError, SymbolTable};

use slate_ast::Program;
use slate_core::SemanticDiagnostic;

/// Performs semantic analysis on a Slate program.
///
/// Collects top-level declarations into the global scope, then type-checks
/// every struct, function, and the entry point.
///
/// # Errors
/// Returns the accumulated diagnostics, ordered by source position, if any
/// check failed.
pub fn analyze(program: &Program) -> Result<(), Vec<SemanticDiagnostic>> {
    let symbols = collect_declarations(program);
    let mut checker = TypeChecker::with_symbols(symbols);
    checker.check_program(program);

    let mut diagnostics = checker.into_diagnostics();
    if diagnostics.is_empty() {
        Ok(())
    } else {
        diagnostics.sort_by_key(|d| (d.span.start.line, d.span.start.column));
        Err(diagnostics)
    }
}

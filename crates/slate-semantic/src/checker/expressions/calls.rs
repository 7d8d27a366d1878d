//! Function call type checking.

use crate::checker::core::TypeChecker;
use slate_ast::Expr;
use slate_core::{DiagnosticKind, Span, Type};

impl TypeChecker {
    pub(super) fn check_call(&mut self, callee: &Expr, args: &[Expr], span: Span) -> Type {
        self.saw_non_lvalue = true;
        let callee_type = self.type_of(callee);

        // Arguments sit in value position even when the call itself is a
        // statement; the flag is restored before the void check below.
        let prev_call_statement = std::mem::replace(&mut self.in_call_statement, false);
        let arg_types: Vec<Type> = args.iter().map(|arg| self.type_of(arg)).collect();
        self.in_call_statement = prev_call_statement;

        let (params, return_type) = match callee_type {
            Type::FunctionPointer {
                params,
                return_type,
            } => (params, *return_type),
            Type::NoType => return Type::NoType,
            _ => {
                self.report(DiagnosticKind::CallOnNonCallable, span);
                return Type::NoType;
            }
        };

        // The callee may carry a signature spelled with a void placeholder
        // parameter (e.g. a declared fptr variable); normalize before the
        // arity comparison.
        let params: Vec<Type> = match params.as_slice() {
            [Type::Void] => Vec::new(),
            _ => params,
        };

        let mut void_misuse = false;
        if return_type.is_void() && !self.in_call_statement {
            self.report(DiagnosticKind::VoidValueMisuse, span);
            void_misuse = true;
        }

        if arg_types.len() != params.len() {
            // Arity is wrong; per-argument checks are skipped.
            self.report(DiagnosticKind::ArityMismatch, span);
        } else {
            // compatible(evaluated, declared) at each position; the first
            // mismatch is reported and the rest are skipped.
            for (arg_type, param_type) in arg_types.iter().zip(&params) {
                if !arg_type.compatible(param_type) {
                    self.report(DiagnosticKind::ArgTypeMismatch, span);
                    break;
                }
            }
        }

        // The declared return type is the best guess for the call's type
        // even when an argument check failed.
        if void_misuse { Type::NoType } else { return_type }
    }
}

//! Statement type checking.

use crate::checker::core::TypeChecker;
use crate::symbol_table::Namespace;
use slate_ast::{BinaryOp, Block, Expr, Statement, VarDecl};
use slate_core::{DiagnosticKind, Span, Type};

impl TypeChecker {
    pub(crate) fn check_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.check_block(block),

            Statement::VarDec { vars, .. } => {
                for var in vars {
                    self.check_var_decl(var);
                }
            }

            Statement::Assign {
                lvalue,
                rvalue,
                span,
            } => self.check_assign(lvalue, rvalue, *span),

            Statement::Conditional {
                condition,
                then_body,
                else_body,
                ..
            } => self.check_conditional(condition, then_body, else_body.as_deref()),

            Statement::Loop {
                condition, body, ..
            } => self.check_loop(condition, body),

            Statement::Display { arg, .. } => self.check_display(arg),

            Statement::Return { value, span } => self.check_return(value.as_ref(), *span),

            Statement::Call { call, .. } => {
                self.in_call_statement = true;
                self.type_of(call);
                self.in_call_statement = false;
            }

            Statement::Append { expr, .. } | Statement::Size { expr, .. } => {
                self.type_of(expr);
            }
        }
    }

    pub(crate) fn check_block(&mut self, block: &Block) {
        for statement in &block.statements {
            self.check_statement(statement);
        }
    }

    /// Declares a variable in the current scope. The last declaration of a
    /// name in a scope wins; redeclaration is not an error.
    pub(crate) fn check_var_decl(&mut self, decl: &VarDecl) {
        if self.in_setter_getter {
            self.report(DiagnosticKind::CannotDeclareHere, decl.span);
        }

        let mut var_type = decl.var_type.clone();
        if let Type::Struct(name) = &var_type
            && self.symbols.lookup_root(Namespace::Struct, name).is_none()
        {
            self.report(DiagnosticKind::StructNotDeclared(name.clone()), decl.span);
            var_type = Type::NoType;
        }
        self.symbols.define_variable(&decl.name.name, var_type);

        if let Some(default) = &decl.default {
            self.type_of(default);
        }
    }

    /// Statement-level assignment. This mirrors the binary assign operator
    /// but is checked independently, since assignment also occurs in
    /// statement position.
    fn check_assign(&mut self, lvalue: &Expr, rvalue: &Expr, span: Span) {
        let target_type = self.type_of(lvalue);
        let source_type = self.type_of(rvalue);

        if !self.is_lvalue(lvalue) {
            self.report(DiagnosticKind::LeftSideNotLvalue, span);
        }
        // compatible(target, source); NoType on either side absorbs, so an
        // erroneous operand cannot trigger a second report here.
        if !target_type.compatible(&source_type) {
            self.report(
                DiagnosticKind::UnsupportedOperandType(BinaryOp::Assign.to_string()),
                span,
            );
        }
    }

    fn check_conditional(
        &mut self,
        condition: &Expr,
        then_body: &Statement,
        else_body: Option<&Statement>,
    ) {
        self.check_condition(condition);

        self.symbols.enter_new_scope();
        self.check_statement(then_body);
        self.symbols.exit_scope();

        if let Some(else_body) = else_body {
            self.symbols.enter_new_scope();
            self.check_statement(else_body);
            self.symbols.exit_scope();
        }
    }

    fn check_loop(&mut self, condition: &Expr, body: &Statement) {
        self.check_condition(condition);

        self.symbols.enter_new_scope();
        self.check_statement(body);
        self.symbols.exit_scope();
    }

    fn check_condition(&mut self, condition: &Expr) {
        let condition_type = self.type_of(condition);
        if !matches!(condition_type, Type::Bool | Type::NoType) {
            self.report(DiagnosticKind::ConditionNotBool, condition.span());
        }
    }

    fn check_display(&mut self, arg: &Expr) {
        let arg_type = self.type_of(arg);
        if !matches!(
            arg_type,
            Type::Int | Type::Bool | Type::List(_) | Type::NoType
        ) {
            self.report(DiagnosticKind::UnsupportedDisplayType, arg.span());
        }
    }

    fn check_return(&mut self, value: Option<&Expr>, span: Span) {
        let returned_type = match value {
            Some(expr) => self.type_of(expr),
            None => Type::Void,
        };
        let expected = self.return_types.last().cloned().unwrap_or(Type::NoType);

        // Two function pointer types are never the same case by tag alone;
        // they get the full structural comparison. Everything else is
        // compared by case identity.
        let matches_expected = match (&returned_type, &expected) {
            (Type::FunctionPointer { .. }, Type::FunctionPointer { .. }) => {
                returned_type.compatible(&expected)
            }
            _ => returned_type.same_case(&expected),
        };

        // Returning an expression that produces no value (an append, for
        // instance) is a void misuse; omitting the value entirely is not.
        let void_misuse = value.is_some() && returned_type.is_void();

        if !matches_expected
            && !void_misuse
            && !self.in_setter
            && !self.in_main
            && !returned_type.is_no_type()
            && !expected.is_no_type()
        {
            self.report(DiagnosticKind::ReturnTypeMismatch, span);
        }
        if self.in_setter || self.in_main {
            self.report(DiagnosticKind::CannotReturnHere, span);
        }
        if void_misuse {
            self.report(DiagnosticKind::VoidValueMisuse, span);
        }
    }
}

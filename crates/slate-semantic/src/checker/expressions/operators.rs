//! Binary and unary operator type checking.

use crate::checker::core::TypeChecker;
use slate_ast::{BinaryOp, Expr, UnaryOp};
use slate_core::{DiagnosticKind, Span, Type};

impl TypeChecker {
    pub(super) fn check_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> Type {
        self.saw_non_lvalue = true;
        let left_type = self.type_of(left);
        let right_type = self.type_of(right);

        match op {
            BinaryOp::And | BinaryOp::Or => {
                if matches!((&left_type, &right_type), (Type::Bool, Type::Bool)) {
                    return Type::Bool;
                }
                if matches!(left_type, Type::Bool | Type::NoType)
                    && matches!(right_type, Type::Bool | Type::NoType)
                {
                    return Type::NoType;
                }
                self.report(
                    DiagnosticKind::UnsupportedOperandType(op.to_string()),
                    left.span(),
                );
                Type::NoType
            }
            BinaryOp::Eq => {
                // Equality is undefined on lists, whatever the other side is.
                if left_type.is_list() || right_type.is_list() {
                    self.report(
                        DiagnosticKind::UnsupportedOperandType(op.to_string()),
                        left.span(),
                    );
                    return Type::NoType;
                }
                if !left_type.compatible(&right_type) {
                    self.report(
                        DiagnosticKind::UnsupportedOperandType(op.to_string()),
                        right.span(),
                    );
                    return Type::NoType;
                }
                if left_type.is_no_type() || right_type.is_no_type() {
                    Type::NoType
                } else {
                    Type::Bool
                }
            }
            BinaryOp::Gt | BinaryOp::Lt => {
                if matches!((&left_type, &right_type), (Type::Int, Type::Int)) {
                    return Type::Bool;
                }
                if matches!(left_type, Type::Int | Type::NoType)
                    && matches!(right_type, Type::Int | Type::NoType)
                {
                    return Type::NoType;
                }
                self.report(
                    DiagnosticKind::UnsupportedOperandType(op.to_string()),
                    left.span(),
                );
                Type::NoType
            }
            BinaryOp::Assign => {
                // Both sides are typed above, before the lvalue probe, so
                // their own diagnostics are recorded exactly once.
                let left_is_lvalue = self.is_lvalue(left);
                if !left_is_lvalue {
                    self.report(DiagnosticKind::LeftSideNotLvalue, span);
                }
                if left_type.is_no_type() || right_type.is_no_type() {
                    return Type::NoType;
                }
                // compatible(source, target): the right side must fit the
                // storage on the left.
                if right_type.compatible(&left_type) {
                    if left_is_lvalue {
                        left_type
                    } else {
                        Type::NoType
                    }
                } else {
                    self.report(DiagnosticKind::UnsupportedOperandType(op.to_string()), span);
                    Type::NoType
                }
            }
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mult | BinaryOp::Div => {
                if matches!((&left_type, &right_type), (Type::Int, Type::Int)) {
                    return Type::Int;
                }
                if matches!(left_type, Type::Int | Type::NoType)
                    && matches!(right_type, Type::Int | Type::NoType)
                {
                    return Type::NoType;
                }
                self.report(
                    DiagnosticKind::UnsupportedOperandType(op.to_string()),
                    left.span(),
                );
                Type::NoType
            }
        }
    }

    pub(super) fn check_unary(&mut self, op: UnaryOp, operand: &Expr, span: Span) -> Type {
        self.saw_non_lvalue = true;
        let operand_type = self.type_of(operand);

        match op {
            UnaryOp::Not => match operand_type {
                Type::Bool => Type::Bool,
                Type::NoType => Type::NoType,
                _ => {
                    self.report(
                        DiagnosticKind::UnsupportedOperandType(op.to_string()),
                        operand.span(),
                    );
                    Type::NoType
                }
            },
            UnaryOp::Minus => match operand_type {
                Type::Int => Type::Int,
                Type::NoType => Type::NoType,
                _ => {
                    self.report(
                        DiagnosticKind::UnsupportedOperandType(op.to_string()),
                        operand.span(),
                    );
                    Type::NoType
                }
            },
            UnaryOp::Inc | UnaryOp::Dec => {
                let operand_is_lvalue = self.is_lvalue(operand);
                match operand_type {
                    Type::NoType => Type::NoType,
                    // A non-lvalue integer operand yields NoType without a
                    // separate lvalue diagnostic; only the assign operator
                    // reports that.
                    Type::Int => {
                        if operand_is_lvalue {
                            Type::Int
                        } else {
                            Type::NoType
                        }
                    }
                    _ => {
                        self.report(DiagnosticKind::UnsupportedOperandType(op.to_string()), span);
                        Type::NoType
                    }
                }
            }
        }
    }
}

//! Statement-level checks: assignment, conditions, scoping, display.

mod common;
use common::*;

use slate_ast::BinaryOp;
use slate_core::{DiagnosticKind, Type};
use slate_semantic::analyze;

#[test]
fn test_condition_must_be_bool() {
    let program = main_program(vec![cond(int(1, 2), block(vec![], 2), None, 2)]);
    assert_eq!(analyze_kinds(&program), vec![DiagnosticKind::ConditionNotBool]);
}

#[test]
fn test_loop_condition_must_be_bool() {
    let program = main_program(vec![loop_stmt(int(1, 2), block(vec![], 2), 2)]);
    assert_eq!(analyze_kinds(&program), vec![DiagnosticKind::ConditionNotBool]);
}

#[test]
fn test_erroneous_condition_reports_only_its_own_error() {
    // the condition's NoType does not trigger ConditionNotBool on top
    let program = main_program(vec![cond(var("ghost", 2), block(vec![], 2), None, 2)]);
    assert_eq!(
        analyze_kinds(&program),
        vec![DiagnosticKind::VarNotDeclared("ghost".to_string())]
    );
}

#[test]
fn test_conditional_without_else_is_legal() {
    let program = main_program(vec![cond(
        boolean(true, 2),
        block(vec![display(int(1, 3), 3)], 2),
        None,
        2,
    )]);
    assert_clean(&program);
}

#[test]
fn test_branch_declarations_do_not_escape() {
    let program = main_program(vec![
        cond(
            boolean(true, 2),
            block(vec![var_dec("y", Type::Int, 3)], 2),
            None,
            2,
        ),
        assign(var("y", 5), int(1, 5), 5),
    ]);
    assert_eq!(
        analyze_kinds(&program),
        vec![DiagnosticKind::VarNotDeclared("y".to_string())]
    );
}

#[test]
fn test_redeclaration_overwrites_type() {
    // the second declaration of x wins within the scope
    let program = main_program(vec![
        var_dec("x", Type::Int, 2),
        var_dec("x", Type::Bool, 3),
        assign(var("x", 4), boolean(true, 4), 4),
    ]);
    assert_clean(&program);

    let stale = main_program(vec![
        var_dec("x", Type::Int, 2),
        var_dec("x", Type::Bool, 3),
        assign(var("x", 4), int(1, 4), 4),
    ]);
    assert_eq!(
        analyze_kinds(&stale),
        vec![DiagnosticKind::UnsupportedOperandType("assign".to_string())]
    );
}

#[test]
fn test_display_accepts_int_bool_and_list() {
    let program = main_program(vec![
        var_dec("l", list_of(Type::Int), 2),
        display(int(1, 3), 3),
        display(boolean(true, 4), 4),
        display(var("l", 5), 5),
    ]);
    assert_clean(&program);
}

#[test]
fn test_display_rejects_structs() {
    let program = program_with(
        vec![strukt("point", vec![field("x", Type::Int, 1)], 1)],
        vec![],
        vec![
            var_dec("p", Type::Struct("point".to_string()), 2),
            display(var("p", 3), 3),
        ],
    );
    assert_eq!(
        analyze_kinds(&program),
        vec![DiagnosticKind::UnsupportedDisplayType]
    );
}

#[test]
fn test_display_rejects_function_pointers() {
    let program = program_with(
        vec![],
        vec![func(
            "f",
            vec![],
            Type::Void,
            vec![],
            1,
        )],
        vec![display(var("f", 2), 2)],
    );
    assert_eq!(
        analyze_kinds(&program),
        vec![DiagnosticKind::UnsupportedDisplayType]
    );
}

#[test]
fn test_assignment_between_incompatible_types() {
    let program = main_program(vec![
        var_dec("x", Type::Int, 2),
        assign(var("x", 3), boolean(true, 3), 3),
    ]);
    assert_eq!(
        analyze_kinds(&program),
        vec![DiagnosticKind::UnsupportedOperandType("assign".to_string())]
    );
}

#[test]
fn test_assign_operator_in_expression_position() {
    // y = (x = 3) works because the inner assign yields the left type
    let program = main_program(vec![
        var_dec("x", Type::Int, 2),
        var_dec("y", Type::Int, 3),
        assign(
            var("y", 4),
            bin(BinaryOp::Assign, var("x", 4), int(3, 4), 4),
            4,
        ),
    ]);
    assert_clean(&program);
}

#[test]
fn test_diagnostic_rendering() {
    let program = main_program(vec![cond(int(1, 2), block(vec![], 2), None, 2)]);
    let diagnostics = analyze(&program).unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    let rendered = format!("Line {}: {}", diagnostics[0].line(), diagnostics[0]);
    insta::assert_snapshot!(rendered, @"Line 2: condition must be a boolean");
}

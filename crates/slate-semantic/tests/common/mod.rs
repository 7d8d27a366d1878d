//! Common test utilities: AST builders and analysis helpers.
//!
//! Semantic tests construct ASTs directly (the parser lives upstream of this
//! crate), so the builders here keep the test bodies close to the source
//! programs they stand for. Line numbers are explicit because diagnostics
//! are anchored to them.

#![allow(dead_code)]

use slate_ast::{
    BinaryOp, Block, Expr, FunctionDecl, Ident, MainDecl, Program, SetGetDecl, Statement,
    StructDecl, StructMember, UnaryOp, VarDecl,
};
use slate_core::{DiagnosticKind, Span, Type};
use slate_semantic::{SymbolTable, TypeChecker, analyze, collect_declarations};

pub fn sp(line: usize) -> Span {
    Span::at(line, 1)
}

// Expressions

pub fn int(value: i64, line: usize) -> Expr {
    Expr::IntLiteral {
        value,
        span: sp(line),
    }
}

pub fn boolean(value: bool, line: usize) -> Expr {
    Expr::BoolLiteral {
        value,
        span: sp(line),
    }
}

pub fn ident(name: &str, line: usize) -> Ident {
    Ident::new(name, sp(line))
}

pub fn var(name: &str, line: usize) -> Expr {
    Expr::Identifier(ident(name, line))
}

pub fn bin(op: BinaryOp, left: Expr, right: Expr, line: usize) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        span: sp(line),
    }
}

pub fn un(op: UnaryOp, operand: Expr, line: usize) -> Expr {
    Expr::Unary {
        op,
        operand: Box::new(operand),
        span: sp(line),
    }
}

pub fn index(instance: Expr, idx: Expr, line: usize) -> Expr {
    Expr::ListIndex {
        instance: Box::new(instance),
        index: Box::new(idx),
        span: sp(line),
    }
}

pub fn access(instance: Expr, member: &str, line: usize) -> Expr {
    Expr::StructAccess {
        instance: Box::new(instance),
        member: ident(member, line),
        span: sp(line),
    }
}

pub fn size_of(list: Expr, line: usize) -> Expr {
    Expr::ListSize {
        list: Box::new(list),
        span: sp(line),
    }
}

pub fn append(list: Expr, element: Expr, line: usize) -> Expr {
    Expr::ListAppend {
        list: Box::new(list),
        element: Box::new(element),
        span: sp(line),
    }
}

pub fn paren(inner: Expr, line: usize) -> Expr {
    Expr::Paren {
        inner: Box::new(inner),
        span: sp(line),
    }
}

pub fn call(callee: Expr, args: Vec<Expr>, line: usize) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
        args,
        span: sp(line),
    }
}

// Types

pub fn list_of(element: Type) -> Type {
    Type::List(Box::new(element))
}

pub fn fptr(params: Vec<Type>, return_type: Type) -> Type {
    Type::FunctionPointer {
        params,
        return_type: Box::new(return_type),
    }
}

// Statements

pub fn block(statements: Vec<Statement>, line: usize) -> Statement {
    Statement::Block(Block {
        statements,
        span: sp(line),
    })
}

pub fn var_decl(name: &str, var_type: Type, line: usize) -> VarDecl {
    VarDecl {
        name: ident(name, line),
        var_type,
        default: None,
        span: sp(line),
    }
}

pub fn var_dec(name: &str, var_type: Type, line: usize) -> Statement {
    Statement::VarDec {
        vars: vec![var_decl(name, var_type, line)],
        span: sp(line),
    }
}

pub fn assign(lvalue: Expr, rvalue: Expr, line: usize) -> Statement {
    Statement::Assign {
        lvalue,
        rvalue,
        span: sp(line),
    }
}

pub fn cond(
    condition: Expr,
    then_body: Statement,
    else_body: Option<Statement>,
    line: usize,
) -> Statement {
    Statement::Conditional {
        condition,
        then_body: Box::new(then_body),
        else_body: else_body.map(Box::new),
        span: sp(line),
    }
}

pub fn loop_stmt(condition: Expr, body: Statement, line: usize) -> Statement {
    Statement::Loop {
        condition,
        body: Box::new(body),
        span: sp(line),
    }
}

pub fn display(arg: Expr, line: usize) -> Statement {
    Statement::Display {
        arg,
        span: sp(line),
    }
}

pub fn ret(value: Option<Expr>, line: usize) -> Statement {
    Statement::Return {
        value,
        span: sp(line),
    }
}

pub fn call_stmt(call_expr: Expr, line: usize) -> Statement {
    Statement::Call {
        call: call_expr,
        span: sp(line),
    }
}

pub fn append_stmt(expr: Expr, line: usize) -> Statement {
    Statement::Append {
        expr,
        span: sp(line),
    }
}

// Declarations

pub fn func(
    name: &str,
    params: Vec<VarDecl>,
    return_type: Type,
    body: Vec<Statement>,
    line: usize,
) -> FunctionDecl {
    FunctionDecl {
        name: ident(name, line),
        params,
        return_type,
        body: Box::new(block(body, line)),
        span: sp(line),
    }
}

pub fn field(name: &str, ty: Type, line: usize) -> StructMember {
    StructMember::Field(var_decl(name, ty, line))
}

pub fn set_get(
    name: &str,
    member_type: Type,
    setter: Vec<Statement>,
    getter: Vec<Statement>,
    line: usize,
) -> StructMember {
    StructMember::SetGet(SetGetDecl {
        name: ident(name, line),
        member_type,
        setter_body: Box::new(block(setter, line)),
        getter_body: Box::new(block(getter, line)),
        span: sp(line),
    })
}

pub fn strukt(name: &str, members: Vec<StructMember>, line: usize) -> StructDecl {
    StructDecl {
        name: ident(name, line),
        members,
        span: sp(line),
    }
}

pub fn program_with(
    structs: Vec<StructDecl>,
    functions: Vec<FunctionDecl>,
    main_stmts: Vec<Statement>,
) -> Program {
    Program {
        structs,
        functions,
        main: MainDecl {
            body: Box::new(block(main_stmts, 1)),
            span: sp(1),
        },
    }
}

pub fn main_program(main_stmts: Vec<Statement>) -> Program {
    program_with(Vec::new(), Vec::new(), main_stmts)
}

// Analysis helpers

/// The diagnostic kinds reported for `program`, ordered by source position.
pub fn analyze_kinds(program: &Program) -> Vec<DiagnosticKind> {
    match analyze(program) {
        Ok(()) => Vec::new(),
        Err(diagnostics) => diagnostics.into_iter().map(|d| d.kind).collect(),
    }
}

/// Asserts that `program` analyzes without any diagnostics.
pub fn assert_clean(program: &Program) {
    assert_eq!(analyze(program), Ok(()));
}

/// A checker over the given program's collected declarations, for tests that
/// drive the expression checker directly.
pub fn checker_for(program: &Program) -> TypeChecker {
    TypeChecker::with_symbols(collect_declarations(program))
}

/// A checker whose root scope holds the given variables.
pub fn checker_with_vars(vars: &[(&str, Type)]) -> TypeChecker {
    let mut table = SymbolTable::new();
    for (name, ty) in vars {
        table.define_variable(*name, ty.clone());
    }
    TypeChecker::with_symbols(table)
}

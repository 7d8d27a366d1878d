//! Control-flow completeness analysis.

use crate::checker::core::TypeChecker;
use slate_ast::Statement;

impl TypeChecker {
    /// Whether every execution path through `stmt` reaches a `return`.
    ///
    /// A block satisfies as soon as any of its statements does, so code
    /// after a returning conditional is not required to return on its own.
    /// A loop whose body satisfies is accepted even though the body may
    /// never execute; callers rely on this approximation and tests pin it.
    pub(crate) fn all_paths_return(&self, stmt: &Statement) -> bool {
        match stmt {
            Statement::Return { .. } => true,
            Statement::Block(block) => block
                .statements
                .iter()
                .any(|statement| self.all_paths_return(statement)),
            Statement::Conditional {
                then_body,
                else_body: Some(else_body),
                ..
            } => self.all_paths_return(then_body) && self.all_paths_return(else_body),
            Statement::Loop { body, .. } => self.all_paths_return(body),
            _ => false,
        }
    }
}

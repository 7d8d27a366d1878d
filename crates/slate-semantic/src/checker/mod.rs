//! Type checking implementation modules.

mod control_flow;
mod core;
mod expressions;
mod program;
mod statements;

pub use self::core::TypeChecker;

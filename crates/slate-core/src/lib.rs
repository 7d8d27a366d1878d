//! Core types for the Slate language compiler.
//!
//! This crate provides the fundamental vocabulary shared by all compiler
//! stages: source spans, the static type model, and the semantic-diagnostic
//! taxonomy. It has no dependency on any other Slate crate.

pub mod diagnostics;
pub mod span;
pub mod types;

pub use diagnostics::{DiagnosticKind, SemanticDiagnostic};
pub use span::{Location, Span};
pub use types::Type;

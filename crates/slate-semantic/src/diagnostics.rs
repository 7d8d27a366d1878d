//! Accumulation of semantic diagnostics.

use slate_core::{DiagnosticKind, SemanticDiagnostic, Span};

/// Ordered collection of semantic findings.
///
/// Reporting is non-fatal and can be muted while the checker re-evaluates an
/// expression as a probe (the lvalue query). Reporting the same kind at the
/// same span twice is a no-op, so re-evaluating an unchanged node never
/// duplicates findings.
#[derive(Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<SemanticDiagnostic>,
    muted: bool,
}

impl DiagnosticBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding unless muted or already recorded.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) {
        if self.muted {
            return;
        }
        let diagnostic = SemanticDiagnostic::new(kind, span);
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Sets the mute flag, returning its previous value so callers can
    /// restore it. Mute windows nest through this save/restore discipline.
    pub(crate) fn set_muted(&mut self, muted: bool) -> bool {
        std::mem::replace(&mut self.muted, muted)
    }

    /// The findings recorded so far, in reporting order.
    #[must_use]
    pub fn as_slice(&self) -> &[SemanticDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<SemanticDiagnostic> {
        self.diagnostics
    }
}

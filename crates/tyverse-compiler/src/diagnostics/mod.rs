//! User-facing errors and their rendering.
//!
//! Two families share one channel:
//! - `semantic` - illegal permutations (the closed taxonomy of the core)
//! - `validation` - duplicate tags and dangling references
//!
//! Internal invariant violations never show up here; they panic from
//! `invariants`.

mod printer;
mod semantic;
mod validation;

#[cfg(test)]
mod tests;

use tyverse_core::Meta;

pub use printer::DiagnosticsPrinter;
pub use semantic::{SemanticError, SemanticErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Diagnostic {
    pub fn meta(&self) -> &Meta {
        match self {
            Diagnostic::Semantic(e) => &e.meta,
            Diagnostic::Validation(e) => &e.meta,
        }
    }

    /// The message without its location prefix.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::Semantic(e) => e.kind.to_string(),
            Diagnostic::Validation(e) => e.kind.to_string(),
        }
    }

    pub fn as_semantic(&self) -> Option<&SemanticErrorKind> {
        match self {
            Diagnostic::Semantic(e) => Some(&e.kind),
            Diagnostic::Validation(_) => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationErrorKind> {
        match self {
            Diagnostic::Semantic(_) => None,
            Diagnostic::Validation(e) => Some(&e.kind),
        }
    }
}

/// Diagnostics collected while resolving a universe, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.0.push(diagnostic.into());
    }

    pub fn extend(&mut self, iter: impl IntoIterator<Item = Diagnostic>) {
        self.0.extend(iter);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every diagnostic is an error; kept for symmetry with callers that gate
    /// on it.
    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Plain `<location>: <message>` lines.
    pub fn render(&self) -> String {
        self.printer().render()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

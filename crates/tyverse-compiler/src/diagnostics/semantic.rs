use tyverse_core::Meta;

use crate::types::TypeKind;

/// Semantic errors raised while materializing a permuted domain.
///
/// Closed set: each kind carries the tags needed for an actionable message,
/// and the enclosing [`SemanticError`] carries the source location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticErrorKind {
    #[error("domain `{domain}` permutes nonexistent domain `{base}`")]
    DomainPermutesNonexistentDomain { domain: String, base: String },

    #[error("cannot remove nonexistent type `{tag}` from domain `{domain}`")]
    CannotRemoveNonexistentType { domain: String, tag: String },

    #[error("cannot remove builtin type `{tag}` from domain `{domain}`")]
    CannotRemoveBuiltinType { domain: String, tag: String },

    #[error("cannot permute nonexistent sum `{tag}` in domain `{domain}`")]
    CannotPermuteNonexistentSum { domain: String, tag: String },

    #[error("cannot permute non-sum type `{tag}` in domain `{domain}`: `{tag}` is a {kind}")]
    CannotPermuteNonSumType {
        domain: String,
        tag: String,
        kind: TypeKind,
    },

    #[error("cannot remove nonexistent variant `{variant}` from sum `{sum}` in domain `{domain}`")]
    CannotRemoveNonexistentSumVariant {
        domain: String,
        sum: String,
        variant: String,
    },
}

/// A [`SemanticErrorKind`] raised at a declaration's source location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {kind}", .meta.location())]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub meta: Meta,
}

impl SemanticError {
    /// Raise `kind` at the declaration or clause described by `meta`.
    pub fn at(meta: &Meta, kind: SemanticErrorKind) -> Self {
        Self {
            kind,
            meta: meta.clone(),
        }
    }
}

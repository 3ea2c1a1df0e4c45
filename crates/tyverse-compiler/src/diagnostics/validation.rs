use tyverse_core::Meta;

/// Errors found by the validation pass.
///
/// These establish the invariants the domain core assumes: unique tags and
/// resolvable references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("domain `{domain}` is already defined")]
    DuplicateDomain { domain: String },

    #[error("type `{tag}` is already defined in domain `{domain}`")]
    DuplicateType { domain: String, tag: String },

    #[error("variant `{variant}` is already defined in sum `{sum}`")]
    DuplicateVariant { sum: String, variant: String },

    #[error("field `{field}` is already defined in `{product}`")]
    DuplicateField { product: String, field: String },

    #[error("`{type_name}` is not defined in domain `{domain}`")]
    UndefinedReference { domain: String, type_name: String },

    #[error("transform `{transform}` refers to undefined domain `{domain}`")]
    UndefinedDomain { transform: String, domain: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {kind}", .meta.location())]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub meta: Meta,
}

impl ValidationError {
    pub fn at(meta: &Meta, kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            meta: meta.clone(),
        }
    }
}

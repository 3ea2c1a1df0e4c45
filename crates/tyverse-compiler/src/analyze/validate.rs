//! Domain validation.
//!
//! Establishes what the domain core takes for granted: tags are unique across
//! builtins and user types, variants are unique within their sum, field names
//! are unique within their product, and every field type resolves.

use indexmap::IndexSet;

use crate::diagnostics::{ValidationError, ValidationErrorKind};
use crate::domain::TypeDomain;
use crate::types::{ProductType, Type};

/// All problems in `domain`: duplicate type tags first, then per-type
/// problems in declaration order.
pub fn validate_domain(domain: &TypeDomain) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: IndexSet<&str> = IndexSet::new();

    for ty in domain.types() {
        if !seen.insert(ty.tag()) {
            // Builtins come first and are unique, so a clash is always on a
            // user type, which has metadata.
            if let Some(meta) = ty.meta() {
                errors.push(ValidationError::at(
                    meta,
                    ValidationErrorKind::DuplicateType {
                        domain: domain.tag().to_string(),
                        tag: ty.tag().to_string(),
                    },
                ));
            }
        }
    }

    for ty in domain.user_types() {
        match ty {
            Type::Builtin(_) => {}
            Type::Product(product) => validate_product(domain, product, &mut errors),
            Type::Sum(sum) => {
                let mut variants: IndexSet<&str> = IndexSet::new();
                for variant in &sum.variants {
                    if !variants.insert(&variant.tag) {
                        errors.push(ValidationError::at(
                            &variant.meta,
                            ValidationErrorKind::DuplicateVariant {
                                sum: sum.tag.clone(),
                                variant: variant.tag.clone(),
                            },
                        ));
                    }
                    validate_product(domain, variant, &mut errors);
                }
            }
        }
    }

    errors
}

fn validate_product(
    domain: &TypeDomain,
    product: &ProductType,
    errors: &mut Vec<ValidationError>,
) {
    let mut names: IndexSet<&str> = IndexSet::new();
    for field in &product.fields {
        if !names.insert(&field.name) {
            errors.push(ValidationError::at(
                &field.meta,
                ValidationErrorKind::DuplicateField {
                    product: product.tag.clone(),
                    field: field.name.clone(),
                },
            ));
        }

        if domain.get(&field.ty.type_name).is_none() {
            errors.push(ValidationError::at(
                &field.ty.meta,
                ValidationErrorKind::UndefinedReference {
                    domain: domain.tag().to_string(),
                    type_name: field.ty.type_name.clone(),
                },
            ));
        }
    }
}

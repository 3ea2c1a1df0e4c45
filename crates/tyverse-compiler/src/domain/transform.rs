//! Structural delta between two versions of a domain.
//!
//! The delta is a copy of the source domain in which everything that does not
//! survive unchanged into the destination is flagged `is_removed`. Code
//! generators use the flags to decide what needs migration code. The delta
//! only ever contains source-side entries.

use tracing::debug;

use crate::types::{ProductType, SumType, Type};

use super::TypeDomain;

impl TypeDomain {
    /// Delta of `self` against `destination`.
    ///
    /// The result keeps this domain's tag, metadata, and user type order.
    /// Products are compared wholesale; sums are never removed as a whole for
    /// variant-level differences, their variants are compared one by one.
    pub fn compute_transform(&self, destination: &TypeDomain) -> TypeDomain {
        let user_types: Vec<Type> = self
            .user_types()
            .iter()
            .map(|source| transform_type(source, destination))
            .collect();

        debug!(
            source = self.tag(),
            destination = destination.tag(),
            removed = user_types.iter().filter(|t| t.is_removed()).count(),
            "computed transform delta"
        );

        TypeDomain::new(self.tag(), user_types, self.meta().clone())
    }
}

fn transform_type(source: &Type, destination: &TypeDomain) -> Type {
    let Some(target) = destination.get(source.tag()) else {
        return source.clone().removed();
    };

    match (source, target) {
        (Type::Product(s), Type::Product(d)) => Type::Product(transform_product(s, d)),
        (Type::Sum(s), Type::Sum(d)) => Type::Sum(transform_sum(s, d)),
        (Type::Product(_) | Type::Sum(_), _) => source.clone().removed(),
        (Type::Builtin(_), _) => source.clone(),
    }
}

fn transform_product(source: &ProductType, destination: &ProductType) -> ProductType {
    if source.same_shape(destination) {
        source.clone()
    } else {
        source.clone().removed()
    }
}

fn transform_sum(source: &SumType, destination: &SumType) -> SumType {
    let variants = source
        .variants
        .iter()
        .map(|variant| match destination.variant(&variant.tag) {
            Some(target) => transform_product(variant, target),
            None => variant.clone().removed(),
        })
        .collect();

    source.clone().with_variants(variants)
}

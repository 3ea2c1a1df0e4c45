//! Fixture builders for unit tests. Everything is built without metadata.

use tyverse_core::Meta;

use crate::domain::TypeDomain;
use crate::permute::DomainMap;
use crate::types::{Field, ProductType, SumType, Type, TypeRef};

pub fn field(name: &str, type_name: &str) -> Field {
    Field::new(name, TypeRef::new(type_name, Meta::default()), Meta::default())
}

/// Keyed product from `(field name, type name)` pairs.
pub fn product(tag: &str, fields: &[(&str, &str)]) -> ProductType {
    let fields = fields.iter().map(|(name, ty)| field(name, ty)).collect();
    ProductType::new(tag, fields, Meta::default())
}

pub fn sum(tag: &str, variants: Vec<ProductType>) -> SumType {
    SumType::new(tag, variants, Meta::default())
}

pub fn domain(tag: &str, user_types: Vec<Type>) -> TypeDomain {
    TypeDomain::new(tag, user_types, Meta::default())
}

pub fn domain_map(domains: impl IntoIterator<Item = TypeDomain>) -> DomainMap {
    domains
        .into_iter()
        .map(|d| (d.tag().to_string(), d))
        .collect()
}

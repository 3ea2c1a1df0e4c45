//! The type algebra: builtins, products, and sums.
//!
//! Values here are immutable once published in a domain. Derivations
//! (`removed`, `with_variants`) consume and rebuild rather than patch a
//! shared value.

use serde::{Deserialize, Serialize};
use tyverse_core::Meta;

use super::{BuiltinType, TypeKind};

/// A type as stored in a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Never serialized: builtins are re-derived for every domain.
    #[serde(skip)]
    Builtin(BuiltinType),
    Product(ProductType),
    Sum(SumType),
}

impl Type {
    pub fn tag(&self) -> &str {
        match self {
            Type::Builtin(b) => b.tag(),
            Type::Product(p) => &p.tag,
            Type::Sum(s) => &s.tag,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Builtin(_) => TypeKind::Builtin,
            Type::Product(_) => TypeKind::Product,
            Type::Sum(_) => TypeKind::Sum,
        }
    }

    /// Builtins have no declaration site and therefore no metadata.
    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Type::Builtin(_) => None,
            Type::Product(p) => Some(&p.meta),
            Type::Sum(s) => Some(&s.meta),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Type::Builtin(_))
    }

    pub fn is_removed(&self) -> bool {
        match self {
            Type::Builtin(_) => false,
            Type::Product(p) => p.is_removed,
            Type::Sum(s) => s.is_removed,
        }
    }

    pub fn as_product(&self) -> Option<&ProductType> {
        match self {
            Type::Product(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_sum(&self) -> Option<&SumType> {
        match self {
            Type::Sum(s) => Some(s),
            _ => None,
        }
    }

    /// Copy of this type flagged as removed. Builtins are returned unchanged.
    pub fn removed(self) -> Type {
        match self {
            Type::Builtin(b) => Type::Builtin(b),
            Type::Product(p) => Type::Product(p.removed()),
            Type::Sum(s) => Type::Sum(SumType {
                is_removed: true,
                ..s
            }),
        }
    }
}

impl From<ProductType> for Type {
    fn from(p: ProductType) -> Self {
        Type::Product(p)
    }
}

impl From<SumType> for Type {
    fn from(s: SumType) -> Self {
        Type::Sum(s)
    }
}

/// How a product is laid out by code generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Fields addressed by name.
    #[default]
    Keyed,
    /// Fields addressed by position.
    Positional,
}

/// Unresolved reference to a type by name.
///
/// Resolution happens against a specific domain, see
/// [`TypeDomain::resolve`](crate::TypeDomain::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub type_name: String,
    #[serde(default)]
    pub meta: Meta,
}

impl TypeRef {
    pub fn new(type_name: impl Into<String>, meta: Meta) -> Self {
        Self {
            type_name: type_name.into(),
            meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub meta: Meta,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef, meta: Meta) -> Self {
        Self {
            name: name.into(),
            ty,
            meta,
        }
    }
}

/// Named type with an ordered list of typed fields.
///
/// Also used for the variants of a [`SumType`], where the tag is unique only
/// within the owning sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub tag: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub encoding: Encoding,
    #[serde(default)]
    pub meta: Meta,
    /// Set only by transform-delta computation.
    #[serde(default, skip_deserializing)]
    pub is_removed: bool,
}

impl ProductType {
    pub fn new(tag: impl Into<String>, fields: Vec<Field>, meta: Meta) -> Self {
        Self {
            tag: tag.into(),
            fields,
            encoding: Encoding::Keyed,
            meta,
            is_removed: false,
        }
    }

    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Structural equality: tag, encoding, and every field's name and type
    /// name, in order. Metadata and removal flags are not part of the shape.
    pub fn same_shape(&self, other: &ProductType) -> bool {
        self.tag == other.tag
            && self.encoding == other.encoding
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.name == b.name && a.ty.type_name == b.ty.type_name)
    }

    pub fn removed(self) -> Self {
        Self {
            is_removed: true,
            ..self
        }
    }
}

/// Tagged union: an ordered list of product variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumType {
    pub tag: String,
    #[serde(default)]
    pub variants: Vec<ProductType>,
    #[serde(default)]
    pub meta: Meta,
    /// Set only by transform-delta computation.
    #[serde(default, skip_deserializing)]
    pub is_removed: bool,
}

impl SumType {
    pub fn new(tag: impl Into<String>, variants: Vec<ProductType>, meta: Meta) -> Self {
        Self {
            tag: tag.into(),
            variants,
            meta,
            is_removed: false,
        }
    }

    pub fn variant(&self, tag: &str) -> Option<&ProductType> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    /// Same sum (tag, metadata, removal flag) over a new variant list.
    pub fn with_variants(self, variants: Vec<ProductType>) -> Self {
        Self { variants, ..self }
    }
}

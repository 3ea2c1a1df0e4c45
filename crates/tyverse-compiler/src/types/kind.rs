//! Canonical type kind and builtin definitions.

use std::fmt;

/// Semantic type kinds.
///
/// Builtins are stored alongside user types in a domain's type list, so every
/// lookup by tag can yield any of the three kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// One of the primitives every domain provides.
    Builtin,
    /// Named fields, keyed or positional.
    Product,
    /// Tagged union of product variants.
    Sum,
}

impl TypeKind {
    pub fn is_builtin(self) -> bool {
        matches!(self, Self::Builtin)
    }

    pub fn is_product(self) -> bool {
        matches!(self, Self::Product)
    }

    pub fn is_sum(self) -> bool {
        matches!(self, Self::Sum)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Product => "product",
            Self::Sum => "sum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The primitives present in every domain. They carry no shape and can never
/// be removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BuiltinType {
    Int,
    Symbol,
    OpaqueValue,
}

impl BuiltinType {
    /// All builtins, in the order they are prepended to a domain's types.
    pub const ALL: [BuiltinType; 3] = [Self::Int, Self::Symbol, Self::OpaqueValue];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Symbol => "symbol",
            Self::OpaqueValue => "opaque_value",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.tag() == tag)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

//! Named, closed collection of resolved types.

use serde::{Deserialize, Serialize};
use tyverse_core::Meta;

use crate::invariants;
use crate::types::{BuiltinType, Type, TypeRef};

/// The builtins every domain starts with, in lookup order.
pub static BUILTIN_TYPES: [Type; 3] = [
    Type::Builtin(BuiltinType::Int),
    Type::Builtin(BuiltinType::Symbol),
    Type::Builtin(BuiltinType::OpaqueValue),
];

/// One version of a schema.
///
/// Stores only user types, in declaration order. The full type list
/// ([`types`](Self::types)) is the builtins followed by the user types.
/// Tag uniqueness across that list is established by validation before a
/// domain is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDomain {
    tag: String,
    #[serde(default)]
    user_types: Vec<Type>,
    #[serde(default)]
    meta: Meta,
}

impl TypeDomain {
    /// # Panics
    /// Panics if `user_types` contains a builtin.
    pub fn new(tag: impl Into<String>, user_types: Vec<Type>, meta: Meta) -> Self {
        let tag = tag.into();
        invariants::ensure_no_builtins(&tag, &user_types);
        Self {
            tag,
            user_types,
            meta,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn user_types(&self) -> &[Type] {
        &self.user_types
    }

    /// Builtins first, then user types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        BUILTIN_TYPES.iter().chain(self.user_types.iter())
    }

    /// Non-fatal lookup by tag.
    pub fn get(&self, tag: &str) -> Option<&Type> {
        self.types().find(|t| t.tag() == tag)
    }

    /// Resolve a reference against this domain.
    ///
    /// # Panics
    /// A miss means a dangling reference slipped past validation. That is an
    /// internal error, reported with the reference's source location.
    pub fn resolve(&self, type_ref: &TypeRef) -> &Type {
        match self.get(&type_ref.type_name) {
            Some(ty) => ty,
            None => invariants::unresolved_reference(&self.tag, &type_ref.type_name, &type_ref.meta),
        }
    }
}

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tyverse_core::Meta;

use crate::types::{ProductType, Type};

/// A domain declared as edits against another, already defined domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutedDomain {
    pub tag: String,
    pub permutes_domain: String,
    #[serde(default)]
    pub excluded_types: IndexSet<String>,
    #[serde(default)]
    pub included_types: Vec<Type>,
    #[serde(default)]
    pub permuted_sums: Vec<PermutedSum>,
    #[serde(default)]
    pub meta: Meta,
}

impl PermutedDomain {
    pub fn new(tag: impl Into<String>, permutes_domain: impl Into<String>, meta: Meta) -> Self {
        Self {
            tag: tag.into(),
            permutes_domain: permutes_domain.into(),
            excluded_types: IndexSet::new(),
            included_types: Vec::new(),
            permuted_sums: Vec::new(),
            meta,
        }
    }

    pub fn exclude(mut self, tag: impl Into<String>) -> Self {
        self.excluded_types.insert(tag.into());
        self
    }

    pub fn include(mut self, ty: impl Into<Type>) -> Self {
        self.included_types.push(ty.into());
        self
    }

    pub fn permute_sum(mut self, sum: PermutedSum) -> Self {
        self.permuted_sums.push(sum);
        self
    }
}

/// Variant edits for one sum of the base domain.
///
/// `removed_variants` is a list, not a set: naming a variant twice is an
/// error on the second occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutedSum {
    pub tag: String,
    #[serde(default)]
    pub removed_variants: Vec<String>,
    #[serde(default)]
    pub added_variants: Vec<ProductType>,
    #[serde(default)]
    pub meta: Meta,
}

impl PermutedSum {
    pub fn new(tag: impl Into<String>, meta: Meta) -> Self {
        Self {
            tag: tag.into(),
            removed_variants: Vec::new(),
            added_variants: Vec::new(),
            meta,
        }
    }

    pub fn remove(mut self, variant: impl Into<String>) -> Self {
        self.removed_variants.push(variant.into());
        self
    }

    pub fn add(mut self, variant: ProductType) -> Self {
        self.added_variants.push(variant);
        self
    }
}

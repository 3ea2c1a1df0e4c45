//! Declarations handed over by the front-end.
//!
//! The front-end itself lives outside this crate. Its output is exchanged as a
//! JSON array of declarations, each tagged by `kind`.

use serde::{Deserialize, Serialize};
use tyverse_core::Meta;

use crate::domain::TypeDomain;
use crate::permute::PermutedDomain;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Domain(TypeDomain),
    Permutation(PermutedDomain),
    Transform(TransformRequest),
}

impl Declaration {
    /// Tag of the declared domain, or name of the transform.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Domain(d) => d.tag(),
            Declaration::Permutation(p) => &p.tag,
            Declaration::Transform(t) => &t.name,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Declaration::Domain(d) => d.meta(),
            Declaration::Permutation(p) => &p.meta,
            Declaration::Transform(t) => &t.meta,
        }
    }
}

/// Request for the delta between two domains. Not a result by itself; see
/// [`Transform`](crate::Transform).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    pub name: String,
    pub source_domain: String,
    pub destination_domain: String,
    #[serde(default)]
    pub meta: Meta,
}

impl TransformRequest {
    pub fn new(
        name: impl Into<String>,
        source_domain: impl Into<String>,
        destination_domain: impl Into<String>,
        meta: Meta,
    ) -> Self {
        Self {
            name: name.into(),
            source_domain: source_domain.into(),
            destination_domain: destination_domain.into(),
            meta,
        }
    }
}

/// Read a JSON array of declarations.
pub fn parse_declarations(json: &str) -> crate::Result<Vec<Declaration>> {
    serde_json::from_str(json).map_err(crate::Error::Declarations)
}

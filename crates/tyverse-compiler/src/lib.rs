//! Tyverse compiler: versioned type domains, permutations, and transforms.
//!
//! - `types` - the type algebra (builtins, products, sums)
//! - `domain` - type domains and transform-delta computation
//! - `permute` - deriving a domain from edits against another
//! - `analyze` - domain validation
//! - `universe` - resolution of a whole declaration list
//! - `diagnostics` - error values and their rendering
//! - `dump` - human-readable domain output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod declaration;
pub mod diagnostics;
pub mod domain;
pub mod dump;
pub mod permute;
pub mod types;
pub mod universe;

mod invariants;

#[cfg(test)]
mod test_utils;

pub use declaration::{Declaration, TransformRequest, parse_declarations};
pub use diagnostics::{Diagnostic, Diagnostics, DiagnosticsPrinter};
pub use domain::{BUILTIN_TYPES, TypeDomain};
pub use dump::{DumpConfig, dump_domain, dump_transform, dump_universe};
pub use invariants::INTERNAL_ERROR_PREFIX;
pub use permute::{DomainMap, PermutedDomain, PermutedSum, compute_permutation};
pub use universe::{Transform, Universe};

/// Errors that stop resolution before it starts.
///
/// Problems inside a well-formed declaration list are not errors of this
/// kind; they come back as [`Diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid declarations: {0}")]
    Declarations(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse a JSON declaration list and resolve it.
pub fn resolve_json(json: &str) -> Result<(Universe, Diagnostics)> {
    let declarations = parse_declarations(json)?;
    Ok(Universe::resolve(declarations))
}

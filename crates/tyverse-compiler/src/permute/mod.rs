//! Permutation descriptors and the engine that applies them.

mod descriptor;
mod engine;


pub use descriptor::{PermutedDomain, PermutedSum};
pub use engine::{DomainMap, compute_permutation};

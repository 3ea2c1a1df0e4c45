//! Type domains and the transform-delta computation.

#[allow(clippy::module_inception)]
mod domain;
mod transform;


pub use domain::{BUILTIN_TYPES, TypeDomain};

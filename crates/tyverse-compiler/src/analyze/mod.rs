//! Semantic analysis run before domains are published.

mod validate;

#[cfg(test)]
mod validate_tests;

pub use validate::validate_domain;

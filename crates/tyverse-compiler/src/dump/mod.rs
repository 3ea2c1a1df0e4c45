//! Human-readable rendering of domains and transform deltas.

mod config;
mod render;

#[cfg(test)]
mod dump_tests;

pub use config::DumpConfig;
pub use render::{dump_domain, dump_transform, dump_universe};

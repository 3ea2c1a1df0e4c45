//! Invariant checks excluded from coverage reports.
//!
//! Everything here panics. A panic raised from this module is a defect in
//! tyverse (or in the validation pass that should have run first), never a
//! problem with the user's universe. Messages start with `internal error:` so
//! tooling can tell them apart from diagnostics.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::fmt;

use tyverse_core::Meta;

use crate::types::Type;

/// Prefix shared by every invariant violation message.
pub const INTERNAL_ERROR_PREFIX: &str = "internal error:";

#[track_caller]
pub(crate) fn violated(meta: Option<&Meta>, detail: fmt::Arguments<'_>) -> ! {
    match meta {
        Some(meta) => panic!(
            "{INTERNAL_ERROR_PREFIX} {detail} (at {}); this is a bug in tyverse, please report it",
            meta.location()
        ),
        None => panic!("{INTERNAL_ERROR_PREFIX} {detail}; this is a bug in tyverse, please report it"),
    }
}

/// Reference resolution miss. Validation rejects dangling references before
/// any domain is published, so reaching this is a bug.
#[track_caller]
pub(crate) fn unresolved_reference(domain: &str, type_name: &str, meta: &Meta) -> ! {
    violated(
        Some(meta),
        format_args!("reference to `{type_name}` does not resolve in domain `{domain}`"),
    )
}

/// Tags are unique within a domain, so a tag never matches twice.
#[track_caller]
pub(crate) fn ensure_unique_match(domain: &str, tag: &str, matches: usize, meta: &Meta) {
    if matches > 1 {
        violated(
            Some(meta),
            format_args!("tag `{tag}` occurs {matches} times in domain `{domain}`"),
        )
    }
}

/// A user type list must never hold a builtin: builtins are re-derived.
#[track_caller]
pub(crate) fn ensure_no_builtins(domain: &str, user_types: &[Type]) {
    if let Some(builtin) = user_types.iter().find(|t| t.is_builtin()) {
        violated(
            None,
            format_args!(
                "builtin `{}` stored as a user type of domain `{domain}`",
                builtin.tag()
            ),
        )
    }
}

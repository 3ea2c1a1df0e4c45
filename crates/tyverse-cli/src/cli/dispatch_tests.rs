//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Shared flags: every command accepts --source, --color, and -v
//! 3. Command-specific flags are rejected elsewhere

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, transform_command};

#[test]
fn check_extracts_paths() {
    let m = check_command()
        .try_get_matches_from(["check", "universe.json", "--source", "lang.ty"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.universe_path, PathBuf::from("universe.json"));
    assert_eq!(params.source_path, Some(PathBuf::from("lang.ty")));
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_requires_universe_path() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_accepts_stdin_marker() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    assert_eq!(CheckParams::from_matches(&m).universe_path, PathBuf::from("-"));
}

#[test]
fn dump_extracts_flags() {
    let m = dump_command()
        .try_get_matches_from([
            "dump",
            "universe.json",
            "--domain",
            "v2",
            "--json",
            "--spans",
            "--annotations",
            "--color",
            "never",
        ])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.domain.as_deref(), Some("v2"));
    assert!(params.json);
    assert!(params.spans);
    assert!(params.annotations);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "universe.json"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.domain, None);
    assert!(!params.json);
    assert!(!params.spans);
    assert!(!params.annotations);
    assert_eq!(params.source_path, None);
}

#[test]
fn transform_extracts_name() {
    let m = transform_command()
        .try_get_matches_from(["transform", "universe.json", "--name", "upgrade", "--json"])
        .unwrap();
    let params = TransformParams::from_matches(&m);

    assert_eq!(params.name.as_deref(), Some("upgrade"));
    assert!(params.json);
}

#[test]
fn verbose_is_counted() {
    let m = dump_command()
        .try_get_matches_from(["dump", "universe.json", "-vv"])
        .unwrap();
    assert_eq!(verbosity(&m), 2);

    let m = check_command()
        .try_get_matches_from(["check", "universe.json", "--verbose", "-v"])
        .unwrap();
    assert_eq!(verbosity(&m), 2);

    let m = transform_command()
        .try_get_matches_from(["transform", "universe.json"])
        .unwrap();
    assert_eq!(verbosity(&m), 0);
}

#[test]
fn invalid_color_rejected() {
    let result = check_command().try_get_matches_from(["check", "u.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn domain_flag_is_dump_only() {
    let result =
        transform_command().try_get_matches_from(["transform", "u.json", "--domain", "v1"]);
    assert!(result.is_err());

    let result = check_command().try_get_matches_from(["check", "u.json", "--json"]);
    assert!(result.is_err());
}

#[test]
fn build_cli_routes_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["tyverse", "transform", "u.json", "--name", "upgrade"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "transform");
    assert_eq!(
        TransformParams::from_matches(sub).name.as_deref(),
        Some("upgrade")
    );
}

#[test]
fn build_cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["tyverse"]).is_err());
}

#[test]
fn build_cli_is_consistent() {
    build_cli().debug_assert();
}

//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declarations file (positional, `-` for stdin).
pub fn universe_path_arg() -> Arg {
    Arg::new("universe_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Declarations file (JSON), or - for stdin")
}

/// Universe source text, used to show source snippets in diagnostics.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .long("source")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Universe source the declarations were produced from")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Raise log verbosity (repeatable)")
}

/// Restrict output to one domain (--domain).
pub fn domain_arg() -> Arg {
    Arg::new("domain")
        .long("domain")
        .value_name("TAG")
        .help("Only show this domain")
}

/// Restrict output to one transform (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .help("Only show this transform")
}

/// Emit JSON instead of text (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Show annotations (--annotations).
pub fn annotations_arg() -> Arg {
    Arg::new("annotations")
        .long("annotations")
        .action(ArgAction::SetTrue)
        .help("Show annotations attached to declarations")
}

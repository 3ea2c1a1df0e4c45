//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw
//! [`ColorChoice`]; the `From` impls resolve it when bridging to the command
//! handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::loader::InputArgs;
use crate::commands::transform::TransformArgs;

pub struct CheckParams {
    pub universe_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            universe_path: parse_universe_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: InputArgs {
                universe_path: p.universe_path,
                source_path: p.source_path,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub universe_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub domain: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub annotations: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            universe_path: parse_universe_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            domain: m.get_one::<String>("domain").cloned(),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            annotations: m.get_flag("annotations"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: InputArgs {
                universe_path: p.universe_path,
                source_path: p.source_path,
            },
            domain: p.domain,
            json: p.json,
            spans: p.spans,
            annotations: p.annotations,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TransformParams {
    pub universe_path: PathBuf,
    pub source_path: Option<PathBuf>,
    pub name: Option<String>,
    pub json: bool,
    pub spans: bool,
    pub annotations: bool,
    pub color: ColorChoice,
}

impl TransformParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            universe_path: parse_universe_path(m),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            name: m.get_one::<String>("name").cloned(),
            json: m.get_flag("json"),
            spans: m.get_flag("spans"),
            annotations: m.get_flag("annotations"),
            color: parse_color(m),
        }
    }
}

impl From<TransformParams> for TransformArgs {
    fn from(p: TransformParams) -> Self {
        Self {
            input: InputArgs {
                universe_path: p.universe_path,
                source_path: p.source_path,
            },
            name: p.name,
            json: p.json,
            spans: p.spans,
            annotations: p.annotations,
            color: p.color.should_colorize(),
        }
    }
}

/// Number of `-v` flags given to a subcommand.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

/// The positional is required, so clap has already rejected its absence.
fn parse_universe_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("universe_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

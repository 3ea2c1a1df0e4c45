//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input, diagnostics, and logging args shared by every command.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(universe_path_arg())
        .arg(source_path_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tyverse")
        .about("Versioned type domains, permutations, and transform deltas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(transform_command())
}

/// Resolve a universe and report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Resolve a universe and report problems")
        .override_usage(
            "\
  tyverse check <FILE>
  tyverse check <FILE> --source <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  tyverse check universe.json                   # plain diagnostics
  tyverse check universe.json --source lang.ty  # with source snippets
  tyverse check - < universe.json               # from stdin"#,
        );

    with_common_args(cmd)
}

/// Show resolved domains.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show resolved domains")
        .override_usage(
            "\
  tyverse dump <FILE>
  tyverse dump <FILE> --domain <TAG>",
        )
        .after_help(
            r#"EXAMPLES:
  tyverse dump universe.json                # every domain
  tyverse dump universe.json --domain v2    # one domain
  tyverse dump universe.json --spans        # with source positions
  tyverse dump universe.json --json         # serialized domains"#,
        )
        .arg(domain_arg())
        .arg(json_arg())
        .arg(spans_arg())
        .arg(annotations_arg());

    with_common_args(cmd)
}

/// Show transform deltas.
pub fn transform_command() -> Command {
    let cmd = Command::new("transform")
        .about("Show transform deltas")
        .override_usage(
            "\
  tyverse transform <FILE>
  tyverse transform <FILE> --name <NAME>",
        )
        .after_help(
            r#"EXAMPLES:
  tyverse transform universe.json                  # every transform
  tyverse transform universe.json --name upgrade   # one transform
  tyverse transform universe.json --json           # serialized deltas"#,
        )
        .arg(name_arg())
        .arg(json_arg())
        .arg(spans_arg())
        .arg(annotations_arg());

    with_common_args(cmd)
}

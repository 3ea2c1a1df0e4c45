mod cli;
mod commands;
mod logging;

use cli::{CheckParams, DumpParams, TransformParams, build_cli, verbosity};
use tyverse_compiler::INTERNAL_ERROR_PREFIX;

fn main() {
    install_panic_hook();
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(verbosity(m));

    match name {
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "transform" => {
            let params = TransformParams::from_matches(m);
            commands::transform::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Internal errors already explain themselves; print them without the
/// thread/location preamble. Any other panic goes to the default hook.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied());

        match message {
            Some(message) if message.starts_with(INTERNAL_ERROR_PREFIX) => {
                eprintln!("{message}");
            }
            _ => default_hook(info),
        }
    }));
}

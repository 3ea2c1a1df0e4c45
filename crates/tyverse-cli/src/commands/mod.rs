pub mod check;
pub mod dump;
pub mod loader;
pub mod transform;


use loader::LoadError;

/// Why a command produced no output.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Diagnostics, already rendered for the terminal.
    #[error("{0}")]
    Rejected(String),

    #[error("domain `{0}` is not defined")]
    UnknownDomain(String),

    #[error("transform `{0}` is not defined")]
    UnknownTransform(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a command's output, or its error, and exit accordingly.
pub fn finish(result: Result<String, CommandError>) {
    match result {
        Ok(output) => print!("{output}"),
        Err(CommandError::Rejected(rendered)) => {
            eprint!("{rendered}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

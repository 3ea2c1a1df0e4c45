use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use tyverse_compiler::{Diagnostics, Universe};

/// Where the declarations come from, and optionally the text they were
/// produced from.
pub struct InputArgs {
    pub universe_path: PathBuf,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Declarations {
        path: String,
        #[source]
        source: tyverse_compiler::Error,
    },
}

/// A resolved universe together with what is needed to report on it.
pub struct LoadedUniverse {
    pub universe: Universe,
    pub diagnostics: Diagnostics,
    /// Label used in diagnostics: the source file if given, else the
    /// declarations file.
    pub label: String,
    pub source: Option<String>,
}

impl LoadedUniverse {
    /// Render the diagnostics the way `check` prints them.
    pub fn render_diagnostics(&self, colored: bool) -> String {
        let mut printer = self
            .diagnostics
            .printer()
            .path(&self.label)
            .colored(colored);
        if let Some(source) = &self.source {
            printer = printer.source(source);
        }
        printer.render()
    }
}

pub fn load_universe(input: &InputArgs) -> Result<LoadedUniverse, LoadError> {
    let (universe_label, json) = read_input(&input.universe_path)?;
    let (universe, diagnostics) =
        tyverse_compiler::resolve_json(&json).map_err(|source| LoadError::Declarations {
            path: universe_label.clone(),
            source,
        })?;
    debug!(
        path = %universe_label,
        domains = universe.domains().count(),
        transforms = universe.transforms().len(),
        diagnostics = diagnostics.len(),
        "loaded universe"
    );

    let (label, source) = match &input.source_path {
        Some(path) => {
            let (label, text) = read_input(path)?;
            (label, Some(text))
        }
        None => (universe_label, None),
    };

    Ok(LoadedUniverse {
        universe,
        diagnostics,
        label,
        source,
    })
}

/// Load and resolve, turning any diagnostic into a [`CommandError`].
///
/// [`CommandError`]: super::CommandError
pub fn load_clean_universe(
    input: &InputArgs,
    colored: bool,
) -> Result<Universe, super::CommandError> {
    let loaded = load_universe(input)?;
    if loaded.diagnostics.has_errors() {
        return Err(super::CommandError::Rejected(
            loaded.render_diagnostics(colored),
        ));
    }
    Ok(loaded.universe)
}

fn read_input(path: &Path) -> Result<(String, String), LoadError> {
    if path.as_os_str() == "-" {
        let label = "<stdin>".to_string();
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| LoadError::Read {
                path: label.clone(),
                source,
            })?;
        return Ok((label, buf));
    }

    let label = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: label.clone(),
        source,
    })?;
    Ok((label, text))
}

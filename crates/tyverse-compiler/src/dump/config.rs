//! Configuration for dump output.

use tyverse_core::Colors;

/// Configuration for [`dump_domain`](super::dump_domain) and friends.
#[derive(Clone, Debug, Default)]
pub struct DumpConfig {
    /// Append source positions to every declared entry
    pub(crate) spans: bool,
    /// Render annotations below the entry that carries them
    pub(crate) annotations: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to append `@line:column` to entries with a known position.
    pub fn spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Set whether to list annotations.
    pub fn annotations(mut self, value: bool) -> Self {
        self.annotations = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}

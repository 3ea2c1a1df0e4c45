#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives for tyverse.
//!
//! Every declaration the front-end hands over carries a [`Meta`] record:
//! where it came from in the source, plus free-form annotations. Derived
//! values (permuted domains, transform deltas) copy it verbatim.

use std::fmt;

use indexmap::IndexMap;

mod colors;


pub use colors::Colors;

/// Position of a declaration in the universe source.
///
/// Line and column are 1-based. The all-zero position means the location is
/// unknown (e.g. a value built programmatically).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub length: u32,
}

impl SourcePos {
    pub const UNKNOWN: Self = Self {
        line: 0,
        column: 0,
        length: 0,
    };

    pub fn new(line: u32, column: u32, length: u32) -> Self {
        Self {
            line,
            column,
            length,
        }
    }

    pub fn is_known(&self) -> bool {
        self.line != 0
    }

    /// Byte range of this position inside `source`.
    ///
    /// Returns `None` when the position is unknown or lies outside the text.
    /// Columns count characters, not bytes.
    pub fn byte_range(&self, source: &str) -> Option<std::ops::Range<usize>> {
        if !self.is_known() {
            return None;
        }

        let line_start = if self.line == 1 {
            0
        } else {
            source
                .match_indices('\n')
                .nth(self.line as usize - 2)
                .map(|(i, _)| i + 1)?
        };
        let line_text = source[line_start..].split('\n').next().unwrap_or("");

        let column = (self.column.max(1) - 1) as usize;
        let start = line_text
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(line_start + line_text.len());
        let end = source[start..]
            .char_indices()
            .nth(self.length as usize)
            .map(|(i, _)| start + i)
            .unwrap_or(source.len());

        Some(start..end)
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "<unknown>")
        }
    }
}

/// Metadata record attached to every declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pos: SourcePos,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub annotations: IndexMap<String, String>,
}

impl Meta {
    pub fn new(pos: SourcePos) -> Self {
        Self {
            pos,
            annotations: IndexMap::new(),
        }
    }

    /// Shorthand for tests and programmatic construction.
    pub fn at(line: u32, column: u32) -> Self {
        Self::new(SourcePos::new(line, column, 0))
    }

    /// Add an annotation, replacing any previous value under the same key.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Human-readable location, used as the prefix of every diagnostic.
    pub fn location(&self) -> SourcePos {
        self.pos
    }
}

//! Palette for `tyverse dump` output.
//!
//! A dump line such as `product point positional [removed] @2:3` is painted
//! piecewise: the `domain`/`product`/`sum` keywords, the `positional` marker,
//! `@line:col` spans and `# key = value` annotations are dim; domain, type and
//! variant tags are blue; the type name after a field's `:` is green; a
//! `[removed]` marker from a transform delta is red.

/// Escape sequences handed to the dump renderer.
///
/// With [`Colors::OFF`] every sequence is empty, so the same format strings
/// produce plain text.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}

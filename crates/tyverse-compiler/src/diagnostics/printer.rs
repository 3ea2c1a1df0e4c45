//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use super::Diagnostics;

/// Renders diagnostics as plain `<location>: <message>` lines, or as
/// annotated source snippets when the universe source text is available.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for diag in self.diagnostics {
            let message = diag.message();
            let Some(range) = diag.meta().pos.byte_range(source) else {
                // No usable position: fall back to the plain form for this one.
                writeln!(w, "error: {diag}")?;
                continue;
            };
            let range = widen_empty(range, source.len());

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(&message));
            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for diag in self.diagnostics {
            match self.path {
                Some(p) => writeln!(w, "{p}:{diag}")?,
                None => writeln!(w, "{diag}")?,
            }
        }
        Ok(())
    }
}

fn widen_empty(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

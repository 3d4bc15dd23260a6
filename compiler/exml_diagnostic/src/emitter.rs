//! Diagnostic rendering.
//!
//! Two render styles:
//! - `Plain` — the process-boundary contract: one `"{path}: {message}"`
//!   line per diagnostic, nothing else. This is what the CLI emits.
//! - `Annotated` — severity, code and span for logs and tooling.

use std::io::{self, Write};

use crate::Diagnostic;

/// How a diagnostic is rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Plain,
    Annotated,
}

/// Writes diagnostics to an output sink, one line each.
pub struct Emitter<W: Write> {
    writer: W,
    style: RenderStyle,
}

impl<W: Write> Emitter<W> {
    /// Create an emitter with the given style.
    pub fn new(writer: W, style: RenderStyle) -> Self {
        Emitter { writer, style }
    }

    /// Render one diagnostic for `path`.
    pub fn emit(&mut self, path: &str, diagnostic: &Diagnostic) -> io::Result<()> {
        match self.style {
            RenderStyle::Plain => {
                writeln!(self.writer, "{path}: {}", diagnostic.message)
            }
            RenderStyle::Annotated => match diagnostic.span {
                Some(span) => writeln!(self.writer, "{path}:{span}: {diagnostic}"),
                None => writeln!(self.writer, "{path}: {diagnostic}"),
            },
        }
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a diagnostic in the plain CLI-contract form.
pub fn render_plain(path: &str, diagnostic: &Diagnostic) -> String {
    format!("{path}: {}", diagnostic.message)
}

//! The `run` command: load and interpret one exml script.
//!
//! Exit-status mapping (the process-boundary contract):
//! - `0` — the script ran to completion, no message;
//! - `1` — the input is not well-formed XML, or a syntax/runtime failure
//!   aborted the run; message is `"{path}: {failure text}"`;
//! - `2` — the script file is missing or unreadable.

use std::fs;
use std::path::Path;

use exml_diagnostic::emitter::render_plain;
use exml_eval::Interpreter;
use exml_parse::load_document;
use tracing::debug;

/// Outcome of one CLI command: process exit status plus an optional
/// message for stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliExit {
    pub status: i32,
    pub message: Option<String>,
}

impl CliExit {
    /// Successful run, nothing to report.
    pub fn success() -> Self {
        CliExit {
            status: 0,
            message: None,
        }
    }

    /// Failed run with a message.
    pub fn failure(status: i32, message: impl Into<String>) -> Self {
        CliExit {
            status,
            message: Some(message.into()),
        }
    }
}

/// Load `path`, interpret it, and map the outcome onto a [`CliExit`].
///
/// The file handle is scoped to the read; interpretation runs against an
/// owned tree with the file already closed.
pub fn run_script(path: &Path) -> CliExit {
    let shown = path.display().to_string();
    if !path.exists() {
        return CliExit::failure(2, format!("{shown}: no such file or directory"));
    }
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return CliExit::failure(2, format!("{shown}: {err}")),
    };
    debug!(path = shown.as_str(), bytes = source.len(), "loaded script");

    let doc = match load_document(&source) {
        Ok(doc) => doc,
        Err(err) => return CliExit::failure(1, render_plain(&shown, &err.to_diagnostic())),
    };
    match Interpreter::new().run(&doc) {
        Ok(()) => CliExit::success(),
        Err(err) => CliExit::failure(1, render_plain(&shown, &err.to_diagnostic())),
    }
}

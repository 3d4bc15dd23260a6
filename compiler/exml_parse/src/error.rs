//! Loader error type.

use exml_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// The input is not a well-formed XML document.
///
/// This is the one failure the loader can produce. It is distinct from the
/// interpreter's syntax/runtime failures: those describe a malformed or
/// unevaluable *program*, this describes input that never became a document
/// at all. The message text is the process-boundary contract; the underlying
/// parser error is kept as the source for logs.
#[derive(Debug, Error)]
#[error("not in valid XML format")]
pub struct DocumentError {
    #[source]
    source: roxmltree::Error,
}

impl DocumentError {
    /// The parser's own description of what went wrong.
    pub fn detail(&self) -> String {
        self.source.to_string()
    }

    /// Convert to a reportable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001).with_message(self.to_string())
    }
}

impl From<roxmltree::Error> for DocumentError {
    fn from(source: roxmltree::Error) -> Self {
        DocumentError { source }
    }
}

//! Diagnostic system for error reporting.
//!
//! Every failure surfaced to a user flows through a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability (`E0xxx` structural, `E1xxx` syntax,
//!   `E2xxx` runtime),
//! - a [`Severity`],
//! - the message text,
//! - an optional source [`Span`](exml_ir::Span).
//!
//! The [`emitter`] module renders diagnostics. The CLI contract is plain
//! `"{path}: {message}"` lines; the annotated form (code + span) exists for
//! logs and tests.

mod diagnostic;
mod error_code;
pub mod emitter;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;

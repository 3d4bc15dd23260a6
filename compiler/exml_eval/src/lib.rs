//! exml Eval - tree-walking interpreter for exml documents.
//!
//! # Architecture
//!
//! - [`Environment`]: the run's variable-binding table
//! - [`cast`]: declared-type casting for `decl` text
//! - [`exprs`]: `var`/`num`/`add` evaluation with numeric promotion
//! - [`expand`]: `{name}` placeholder expansion for `print`
//! - [`Interpreter`]: the statement walker driving all of the above
//! - [`SharedPrintHandler`]: the swappable output sink
//!
//! Everything is per-run state; there is no process-wide mutable state, so
//! independent runs can proceed concurrently in one process.

mod cast;
mod environment;
pub mod error;
pub mod exprs;
mod interpolate;
mod interpreter;
mod print_handler;

pub use cast::cast;
pub use environment::Environment;
pub use error::{ErrorClass, EvalError, EvalErrorKind, EvalResult};
pub use interpolate::expand;
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};

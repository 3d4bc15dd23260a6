//! exml CLI library.
//!
//! The binary (`exml`) is a thin shell over [`commands::run_script`], which
//! owns the process-boundary contract: load a script file, interpret it, and
//! map the outcome to an exit status and an optional stderr message.

pub mod commands;

pub use commands::{run_script, CliExit};

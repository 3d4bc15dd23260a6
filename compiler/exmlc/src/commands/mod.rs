//! CLI commands.

mod run;

pub use run::{run_script, CliExit};

//! exml interpreter CLI.

use std::path::Path;

use exmlc::{run_script, CliExit};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "-v" | "--version" => {
            println!("exml {}", env!("CARGO_PKG_VERSION"));
        }
        "-h" | "--help" => {
            print_usage();
        }
        path => {
            let CliExit { status, message } = run_script(Path::new(path));
            if let Some(message) = message {
                eprintln!("{message}");
            }
            std::process::exit(status);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: exml <script.xml>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --version    Print version");
    eprintln!("  -h, --help       Show this help");
}

/// Log filtering comes from `EXML_LOG` (e.g. `EXML_LOG=exml_eval=trace`);
/// silent by default.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("EXML_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! CLI entry point for the parser.

use tracing_subscriber::EnvFilter;
use ustawa_parser::cli;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        if e.is_not_found() {
            eprintln!("No such fragment. {e}");
            std::process::exit(2);
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

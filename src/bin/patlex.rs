//! Patlex CLI binary.

use std::process;

use clap::Parser;
use patlex::cli::{args::PatlexArgs, commands::execute_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse command line arguments using clap
    let args = PatlexArgs::parse();

    init_logging(args.verbosity());

    // Execute the command
    if let Err(e) = execute_command(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Map CLI verbosity onto a tracing filter; RUST_LOG still wins when set.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

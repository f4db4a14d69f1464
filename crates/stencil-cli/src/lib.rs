pub mod cli;
pub mod commands;

use clap::Parser;
use cli::Stencil;
use commands::handle_command;
use std::process;
use tracing_subscriber::EnvFilter;

/// Run the stencil CLI application
pub fn run_main() {
    let args = Stencil::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = handle_command(args);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

//! Dupesweep - duplicate file finder and remover.
//!
//! Entry point for the dupesweep CLI application.

use clap::Parser;
use dupesweep::{cli::Cli, error::ExitCode};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the application logic
    match dupesweep::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(ExitCode::InvalidInput.as_i32());
        }
    }
}

//! mutdiff: triage tooling for mutation analysis experiments.
//!
//! This is the main entry point for the `mutdiff` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod experiment;
mod logging;
pub mod report;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.global.verbose, cli.global.quiet);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

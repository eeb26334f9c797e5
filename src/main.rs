//! Broom: configurable retention sweeper for directory trees.
//!
//! This is the main entry point for the `broom` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod age;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod pattern;
pub mod policy;
pub mod report;
pub mod sink;
pub mod walker;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

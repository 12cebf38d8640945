//! Stackgen: build-time generator for the extension's tech-stack data file.
//!
//! This is the main entry point for the `stackgen` CLI. It parses arguments,
//! runs the one conversion the tool exists for, and handles errors with
//! proper exit codes.

mod cli;
pub mod context;
pub mod convert;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod render;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // No operational arguments; parsing still services --help/--version
    // and rejects anything else.
    Cli::parse_args();

    match convert::convert() {
        Ok(output_path) => {
            // One confirmation line for build-log traceability
            println!("Wrote: {}", output_path.display());
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

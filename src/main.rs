//! Senv: native config-client for spring-cloud-config-server.
//!
//! This is the main entry point for the `senv` CLI. It parses arguments,
//! dispatches to the command handler, and exits with the child's exit code
//! or the error's fixed code.

mod cli;
mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod exit_codes;
pub mod fetch;
pub mod logging;
pub mod process;
pub mod properties;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose());

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(exit_codes::to_process_code(code)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(exit_codes::to_process_code(err.exit_code()))
        }
    }
}

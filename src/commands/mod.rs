//! Command implementations for senv.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every handler returns the exit code senv should finish
//! with; for `env` that is the child's own exit code.

mod env;

use crate::cli::{Cli, Command};
use crate::error::{Result, SenvError};
use crate::exit_codes;
use clap::CommandFactory;

use env::cmd_env;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Command::Env(args)) => cmd_env(&cli.server, args),
        None => cmd_help(),
    }
}

/// Bare `senv` prints usage and succeeds.
fn cmd_help() -> Result<i32> {
    Cli::command()
        .print_help()
        .map_err(|e| SenvError::UserError(format!("failed to print help: {}", e)))?;
    Ok(exit_codes::SUCCESS)
}

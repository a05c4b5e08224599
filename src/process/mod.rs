//! Child process execution.
//!
//! Launches the target command with a composed environment, tees its output
//! to the parent streams and to capture buffers, and derives the exit code.

mod exit_status;
mod fanout;
mod report;
mod runner;


pub use runner::{ExecutionResult, ProcessRunner};

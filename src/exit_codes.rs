//! Exit code constants for the senv CLI.
//!
//! When a child process ran, senv exits with the child's own code. The
//! constants below only apply when no child could be run:
//! - 0: Success (no command dispatched, e.g. bare `senv`)
//! - 1: User error (bad arguments, missing target command)
//! - 3: Config fetch failure (network, HTTP status, response parsing)
//! - 127: Launch failure (target executable missing or not runnable)
//!
//! Code 2 is left to clap, which uses it for usage errors.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid client configuration, or no target command.
pub const USER_ERROR: i32 = 1;

/// Config fetch failure: the config server could not be reached or its response was unusable.
pub const FETCH_FAILURE: i32 = 3;

/// Launch failure: the target command could not be started.
pub const LAUNCH_FAILURE: i32 = 127;

/// Substituted when the platform reports no exit status for a terminated child.
pub const EXIT_STATUS_UNAVAILABLE: i32 = 1;

/// Narrow an exit code to the byte a process can portably exit with.
///
/// Codes outside `0..=255` (possible on Windows) become 1 rather than being
/// truncated, so a failure can never wrap around to success.
pub fn to_process_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

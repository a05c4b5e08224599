//! Platform-specific exit status extraction.

use crate::exit_codes::EXIT_STATUS_UNAVAILABLE;
use std::process::ExitStatus;

/// Exit code for a terminated child, given its status information.
///
/// - Normal termination yields the child's own exit code.
/// - On unix, termination by a signal yields `128 + signal`, matching shells.
/// - Anything else, including a missing status, yields [`EXIT_STATUS_UNAVAILABLE`].
pub fn exit_code_for(status: Option<ExitStatus>) -> i32 {
    let Some(status) = status else {
        return EXIT_STATUS_UNAVAILABLE;
    };
    if let Some(code) = status.code() {
        return code;
    }
    signal_exit_code(status).unwrap_or(EXIT_STATUS_UNAVAILABLE)
}

#[cfg(unix)]
fn signal_exit_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(|signal| 128 + signal)
}

#[cfg(not(unix))]
fn signal_exit_code(_status: ExitStatus) -> Option<i32> {
    None
}

//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout carries the child's output and the run report.
//! The default level is `warn`, `--verbose` raises senv's own events to
//! `debug`, and `SENV_LOG` (EnvFilter syntax) overrides both.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter.
pub const LOG_ENV: &str = "SENV_LOG";

/// Filter directive used when `SENV_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,senv=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

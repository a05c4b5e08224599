//! Client configuration for senv.
//!
//! Options are layered: command-line flag, then `SENV_*` environment variable,
//! then the built-in default. The CLI layer resolves the layers; this module
//! validates the result and derives the config server URL from it.

mod defaults;
mod model;


// Re-export public API
pub use defaults::{DEFAULT_HOST, DEFAULT_NAME, DEFAULT_PORT, DEFAULT_PROFILE};
pub use model::ClientConfig;

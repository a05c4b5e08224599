//! Built-in defaults for client options.

/// Config server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Config server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Application name; a warning is printed when it is left unchanged.
pub const DEFAULT_NAME: &str = "application";

/// Profile used when none is given.
pub const DEFAULT_PROFILE: &str = "default";

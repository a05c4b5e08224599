//! Implementation of the `senv env` command.
//!
//! Fetches properties, composes the child environment and runs the command:
//!
//! 1. Reject an empty command before touching the network
//! 2. `fetch` then `process` the configuration
//! 3. Compose the environment (inherited variables first, properties last)
//! 4. Run the child, relaying and capturing its output

use crate::cli::{EnvArgs, ServerArgs};
use crate::config::{ClientConfig, DEFAULT_NAME};
use crate::environment::compose_environment;
use crate::error::{Result, SenvError};
use crate::fetch::{ConfigClient, PropertySource};
use crate::process::{ExecutionResult, ProcessRunner};

#[cfg(test)]
mod tests;

/// Behaviour switches of a single `env` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvOptions {
    /// Seed the child environment with this process's environment.
    pub include_system: bool,
    /// Convert property keys to environment variable style.
    pub sanitize: bool,
    /// Print the config server response.
    pub json: bool,
    /// Log fetched properties.
    pub verbose: bool,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self {
            include_system: true,
            sanitize: true,
            json: false,
            verbose: false,
        }
    }
}

impl From<&EnvArgs> for EnvOptions {
    fn from(args: &EnvArgs) -> Self {
        Self {
            include_system: !args.nosysenv,
            sanitize: args.sanitize,
            json: args.json,
            verbose: args.verbose,
        }
    }
}

/// Entry point for `senv env`. Returns the child's exit code.
pub fn cmd_env(server: &ServerArgs, args: EnvArgs) -> Result<i32> {
    let config = server.to_config()?;
    // Printed directly so log filtering never hides it.
    if let Some(warning) = default_name_warning(&config) {
        eprintln!("{}", warning);
    }

    let options = EnvOptions::from(&args);
    let mut client = ConfigClient::new(config);
    let mut runner = ProcessRunner::default();

    let result = run_env(&mut client, &mut runner, options, &args.command)?;
    Ok(result.exit_code)
}

/// Warning shown when the application name was left at its default.
fn default_name_warning(config: &ClientConfig) -> Option<String> {
    config.is_default_name().then(|| {
        format!(
            "warning: no application name given, using default '{}'",
            DEFAULT_NAME
        )
    })
}

/// Fetch properties from `source` and run `command` with them.
///
/// # Errors
///
/// - [`SenvError::InvalidInvocation`] if `command` is empty; nothing is fetched.
/// - Any error from the property source; nothing is launched.
/// - [`SenvError::LaunchFailure`] if the command cannot be started.
pub fn run_env(
    source: &mut dyn PropertySource,
    runner: &mut ProcessRunner,
    options: EnvOptions,
    command: &[String],
) -> Result<ExecutionResult> {
    if command.is_empty() {
        return Err(SenvError::InvalidInvocation(
            "expected a command after `env`, e.g. `senv env printenv`".to_string(),
        ));
    }

    source.fetch(options.json, options.verbose)?;
    let props = source.process()?;

    let env = compose_environment(&props, options.include_system, options.sanitize);
    tracing::debug!(
        properties = props.len(),
        entries = env.len(),
        include_system = options.include_system,
        sanitize = options.sanitize,
        "composed child environment"
    );
    tracing::trace!(entries = ?env.to_entries(), "child environment");

    let result = runner.run(command, &env)?;
    if !result.is_success() {
        tracing::debug!(exit_code = result.exit_code, "command exited unsuccessfully");
    }
    Ok(result)
}

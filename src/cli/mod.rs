//! CLI argument parsing for senv.
//!
//! Uses clap derive macros for declarative argument definitions. Every
//! server option can also come from a `SENV_*` environment variable; an
//! explicit flag wins over the variable, which wins over the default.
//! Actual implementations are in the `commands` module.

use crate::config::{ClientConfig, DEFAULT_HOST, DEFAULT_NAME, DEFAULT_PORT, DEFAULT_PROFILE};
use crate::error::Result;
use clap::{ArgAction, Args, Parser, Subcommand};


/// Senv is a fast native config-client for a spring-cloud-config-server.
///
/// It fetches the properties of an application and runs a command with them
/// exported as environment variables.
#[derive(Parser, Debug)]
#[command(name = "senv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for senv.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch properties and run a command with them as environment variables.
    ///
    /// Example: with `spring.application.name=Senv` on the config server,
    /// `senv env printenv SPRING_APPLICATION_NAME` prints `Senv`.
    Env(EnvArgs),
}

/// Config server options, accepted before or after the subcommand.
#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Config server host.
    #[arg(long, global = true, env = "SENV_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Config server port.
    #[arg(long, global = true, env = "SENV_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Application name (spring.application.name).
    #[arg(short, long, global = true, env = "SENV_NAME", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Access token sent as X-Config-Token.
    #[arg(short, long, global = true, env = "SENV_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Active profiles (spring.profiles.active), comma separated.
    #[arg(
        short,
        long,
        global = true,
        env = "SENV_PROFILES",
        value_delimiter = ',',
        default_value = DEFAULT_PROFILE
    )]
    pub profiles: Vec<String>,

    /// Config repository label (branch, tag or commit).
    #[arg(short, long, global = true, env = "SENV_LABEL")]
    pub label: Option<String>,
}

impl ServerArgs {
    /// Validate the options into a [`ClientConfig`].
    pub fn to_config(&self) -> Result<ClientConfig> {
        ClientConfig::new(
            &self.host,
            self.port,
            &self.name,
            &self.profiles,
            self.label.as_deref(),
            self.token.as_deref(),
        )
    }
}

/// Arguments for the `env` command.
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Start the command without the system environment variables.
    #[arg(short = 's', long)]
    pub nosysenv: bool,

    /// Print the config server JSON response to stdout.
    #[arg(short, long)]
    pub json: bool,

    /// Log the fetched properties.
    #[arg(short, long)]
    pub verbose: bool,

    /// Convert keys to environment variable style (`a.b-c` becomes `A_B_C`).
    ///
    /// On by default; disable with `--sanitize=false`.
    #[arg(
        short = 'x',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub sanitize: bool,

    /// Command to run, followed by its arguments.
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether verbose logging was requested.
    pub fn verbose(&self) -> bool {
        matches!(&self.command, Some(Command::Env(args)) if args.verbose)
    }
}

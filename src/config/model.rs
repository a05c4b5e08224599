//! ClientConfig definition and validation.

use super::defaults::{DEFAULT_HOST, DEFAULT_NAME, DEFAULT_PORT, DEFAULT_PROFILE};
use crate::error::{Result, SenvError};

/// Where and what to fetch from the config server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    name: String,
    profiles: Vec<String>,
    label: Option<String>,
    token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            name: DEFAULT_NAME.to_string(),
            profiles: vec![DEFAULT_PROFILE.to_string()],
            label: None,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Build a validated configuration.
    ///
    /// Blank profile entries are dropped and an empty profile list falls back
    /// to `default`. An empty label or token counts as unset.
    ///
    /// # Errors
    ///
    /// Returns [`SenvError::UserError`] if the host or application name is blank.
    pub fn new(
        host: &str,
        port: u16,
        name: &str,
        profiles: &[String],
        label: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(SenvError::UserError(
                "config server host must not be empty (--host / SENV_HOST)".to_string(),
            ));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(SenvError::UserError(
                "application name must not be empty (--name / SENV_NAME)".to_string(),
            ));
        }

        let mut profiles: Vec<String> = profiles
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if profiles.is_empty() {
            profiles.push(DEFAULT_PROFILE.to_string());
        }

        Ok(Self {
            host: host.to_string(),
            port,
            name: name.to_string(),
            profiles,
            label: non_empty(label),
            token: non_empty(token),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether the application name was left at its default.
    pub fn is_default_name(&self) -> bool {
        self.name == DEFAULT_NAME
    }

    /// URL of the `Environment` document: `http://host:port/name/profiles[/label]`.
    ///
    /// Profiles are comma-joined. A `/` inside the label is sent as `(_)`,
    /// which is how the config server expects branch names like `release/1.0`.
    pub fn url(&self) -> String {
        let mut url = format!(
            "http://{}:{}/{}/{}",
            self.host,
            self.port,
            self.name,
            self.profiles.join(",")
        );
        if let Some(label) = &self.label {
            url.push('/');
            url.push_str(&label.replace('/', "(_)"));
        }
        url
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

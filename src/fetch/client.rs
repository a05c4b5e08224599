//! Blocking HTTP client for the config server.

use super::PropertySource;
use super::placeholder::resolve_placeholders;
use super::response::ConfigResponse;
use crate::config::ClientConfig;
use crate::error::{Result, SenvError};
use crate::properties::PropertySet;
use std::io::{self, Write};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the config server access token.
const TOKEN_HEADER: &str = "X-Config-Token";

/// Fetches one application's configuration from a spring-cloud-config-server.
pub struct ConfigClient {
    config: ClientConfig,
    agent: ureq::Agent,
    response: Option<ConfigResponse>,
    /// Receives the response document in JSON mode.
    out: Box<dyn Write + Send>,
}

impl ConfigClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build();
        Self {
            config,
            agent,
            response: None,
            out: Box::new(io::stdout()),
        }
    }

    /// Print the JSON-mode document to `out` instead of stdout.
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    fn request_document(&self, url: &str) -> Result<serde_json::Value> {
        let mut request = self.agent.get(url).set("Accept", "application/json");
        if let Some(token) = self.config.token() {
            request = request.set(TOKEN_HEADER, token);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(code, response) => SenvError::ConfigFetch(format!(
                "config server at {} returned HTTP {} {}",
                url,
                code,
                response.status_text()
            )),
            ureq::Error::Transport(transport) => SenvError::ConfigFetch(format!(
                "cannot reach config server at {}: {}",
                url, transport
            )),
        })?;

        response.into_json().map_err(|e| {
            SenvError::ConfigFetch(format!("invalid JSON response from {}: {}", url, e))
        })
    }
}

impl PropertySource for ConfigClient {
    fn fetch(&mut self, json: bool, verbose: bool) -> Result<()> {
        let url = self.config.url();
        tracing::debug!(
            url = %url,
            host = self.config.host(),
            port = self.config.port(),
            name = self.config.name(),
            profiles = ?self.config.profiles(),
            label = self.config.label().unwrap_or("-"),
            "fetching configuration"
        );

        let document = self.request_document(&url)?;

        if json {
            let pretty = serde_json::to_string_pretty(&document).map_err(|e| {
                SenvError::ConfigFetch(format!("failed to render response: {}", e))
            })?;
            writeln!(self.out, "{}", pretty)
                .and_then(|()| self.out.flush())
                .map_err(|e| SenvError::ConfigFetch(format!("failed to print response: {}", e)))?;
        }

        let response: ConfigResponse = serde_json::from_value(document).map_err(|e| {
            SenvError::ConfigFetch(format!("unexpected response shape from {}: {}", url, e))
        })?;

        if verbose {
            for source in &response.property_sources {
                tracing::info!(source = %source.name, properties = source.source.len(), "property source");
                for (key, value) in &source.source {
                    tracing::info!("  {} = {}", key, value);
                }
            }
        }
        tracing::debug!(
            name = %response.name,
            profiles = ?response.profiles,
            label = response.label.as_deref().unwrap_or("-"),
            state = response.state.as_deref().unwrap_or("-"),
            sources = response.property_sources.len(),
            version = response.version.as_deref().unwrap_or("-"),
            "configuration fetched"
        );

        self.response = Some(response);
        Ok(())
    }

    fn process(&mut self) -> Result<PropertySet> {
        let response = self.response.as_ref().ok_or_else(|| {
            SenvError::ConfigFetch("no configuration fetched yet".to_string())
        })?;
        Ok(resolve_placeholders(&response.flatten()))
    }
}

//! Config server client.
//!
//! Fetches the `Environment` document of a spring-cloud-config-server,
//! flattens its property sources by precedence and resolves `${key:default}`
//! placeholders between properties.
//!
//! The client is consumed through [`PropertySource`]: `fetch` first, then
//! `process`. Either step failing aborts the run before any child is launched.

mod client;
mod placeholder;
mod response;


pub use client::ConfigClient;
pub use response::ConfigResponse;

use crate::error::Result;
use crate::properties::PropertySet;

/// Source of the properties exported to the child process.
pub trait PropertySource {
    /// Retrieve the raw configuration.
    ///
    /// With `json` set the received document is printed to stdout. With
    /// `verbose` set every received property is logged.
    fn fetch(&mut self, json: bool, verbose: bool) -> Result<()>;

    /// Turn the fetched configuration into the final property set.
    fn process(&mut self) -> Result<PropertySet>;
}

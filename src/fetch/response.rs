//! Wire model of the config server `Environment` document.

use crate::properties::PropertySet;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response of `GET /{application}/{profiles}[/{label}]`.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profiles: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Property sources, highest precedence first.
    #[serde(default)]
    pub property_sources: Vec<PropertySourceDocument>,
}

/// One named source of properties, usually a file in the config repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySourceDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source: Map<String, Value>,
}

impl ConfigResponse {
    /// Merge all property sources into one set.
    ///
    /// A key takes its value from the first source that defines it. Keys keep
    /// the order in which they first appear across sources.
    pub fn flatten(&self) -> PropertySet {
        let mut props = PropertySet::new();
        for document in &self.property_sources {
            for (key, value) in &document.source {
                if !props.contains_key(key) {
                    props.insert(key.clone(), value_to_string(value));
                }
            }
        }
        props
    }
}

/// Render a JSON property value as the string exported to the environment.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

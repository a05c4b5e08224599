//! Merging inherited variables and properties into one ordered environment.

use super::sanitize::sanitize_key;
use crate::properties::PropertySet;
use std::ffi::{OsStr, OsString};

/// Ordered list of `KEY=VALUE` entries for a child process.
///
/// Duplicate names are kept. Whoever applies the environment processes the
/// entries in order, so the last entry for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedEnvironment {
    entries: Vec<(OsString, OsString)>,
}

impl ComposedEnvironment {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Render entries as `KEY=VALUE` strings. Non-UTF-8 data is replaced lossily.
    pub fn to_entries(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect()
    }

    fn push(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.entries.push((key.into(), value.into()));
    }
}

/// Compose the child environment, reading the inherited environment of this process.
pub fn compose_environment(
    props: &PropertySet,
    include_system: bool,
    sanitize: bool,
) -> ComposedEnvironment {
    compose_environment_from(std::env::vars_os(), props, include_system, sanitize)
}

/// Compose the child environment from an explicit inherited snapshot.
///
/// Inherited entries come first (only when `include_system` is set), followed
/// by one entry per property in property order. Property entries always come
/// after inherited ones so they override system values of the same name.
pub fn compose_environment_from<I>(
    inherited: I,
    props: &PropertySet,
    include_system: bool,
    sanitize: bool,
) -> ComposedEnvironment
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env = ComposedEnvironment::default();

    if include_system {
        for (key, value) in inherited {
            env.push(key, value);
        }
    }

    for (key, value) in props.iter() {
        let name = sanitize_key(key, sanitize);
        tracing::trace!(property = key, variable = %name, "mapping property");
        env.push(name.into_owned(), value);
    }

    env
}

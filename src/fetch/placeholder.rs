//! `${key}` / `${key:default}` placeholder resolution between properties.

use crate::properties::PropertySet;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").expect("Invalid placeholder regex")
});

/// Resolve placeholders in every value of `props` against `props` itself.
///
/// `${key}` is replaced by the (recursively resolved) value of `key`;
/// `${key:default}` falls back to `default` when `key` is absent. Placeholders
/// that cannot be resolved, or that refer back to a key still being resolved,
/// are left verbatim. Each key is resolved at most once.
pub fn resolve_placeholders(props: &PropertySet) -> PropertySet {
    let mut resolver = Resolver {
        props,
        resolved: HashMap::new(),
        in_progress: HashSet::new(),
    };
    props
        .iter()
        .map(|(key, value)| {
            let resolved = resolver
                .resolve_key(key)
                .unwrap_or_else(|| value.to_string());
            (key, resolved)
        })
        .collect()
}

struct Resolver<'a> {
    props: &'a PropertySet,
    /// Final values of keys already resolved.
    resolved: HashMap<&'a str, String>,
    /// Keys whose resolution is on the current path; revisiting one is a cycle.
    in_progress: HashSet<&'a str>,
}

impl<'a> Resolver<'a> {
    /// Resolved value of `key`, or `None` if the key is absent or mid-resolution.
    fn resolve_key(&mut self, key: &str) -> Option<String> {
        if let Some(done) = self.resolved.get(key) {
            return Some(done.clone());
        }
        let props: &'a PropertySet = self.props;
        let (key, raw) = props.iter().find(|(k, _)| *k == key)?;
        if !self.in_progress.insert(key) {
            return None;
        }
        let value = self.resolve_text(raw);
        self.in_progress.remove(key);
        self.resolved.insert(key, value.clone());
        Some(value)
    }

    fn resolve_text(&mut self, text: &str) -> String {
        PLACEHOLDER_REGEX
            .replace_all(text, |caps: &Captures<'_>| {
                let name = caps[1].trim();
                if self.in_progress.contains(name) {
                    tracing::warn!(placeholder = name, "cyclic placeholder, leaving unresolved");
                    return caps[0].to_string();
                }
                match (self.resolve_key(name), caps.get(2)) {
                    (Some(found), _) => found,
                    (None, Some(default)) => default.as_str().to_string(),
                    (None, None) => {
                        tracing::warn!(placeholder = name, "unresolved placeholder");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

//! Ordered property set handed from the fetch client to the environment composer.

/// Ordered mapping of configuration keys to resolved string values.
///
/// Iteration follows insertion order. Keys are unique: inserting an existing
/// key replaces its value in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: Vec<(String, String)>,
}

impl PropertySet {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a property value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

//! Ordered substitution map for template rendering.
//!
//! The map fixes its iteration order at construction: substitution
//! processing follows the order pairs were inserted (document order for
//! config files, flag order for `--set` pairs). Overriding an existing
//! key replaces its value in place; new keys append at the end.

use crate::error::{Result, StencilError};
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use std::fmt;

/// An ordered mapping from placeholder key to replacement value.
///
/// Immutable for the duration of a rendering pass; built up front from
/// the config file's `data` mapping and any `--set` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionMap {
    entries: Vec<(String, String)>,
}

impl SubstitutionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of pairs in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a pair.
    ///
    /// An existing key keeps its position in the map and receives the new
    /// value; a new key appends at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Parse a `KEY=VALUE` assignment from a `--set` flag.
///
/// Only the first `=` splits, so the value may itself contain `=`.
/// A missing `=` or an empty key is a user error.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        StencilError::UserError(format!("invalid --set pair '{}': expected KEY=VALUE", raw))
    })?;

    if key.is_empty() {
        return Err(StencilError::UserError(format!(
            "invalid --set pair '{}': key must not be empty",
            raw
        )));
    }

    Ok((key.to_string(), value.to_string()))
}

impl<'de> Deserialize<'de> for SubstitutionMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SubstitutionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of string keys to string values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Entries arrive in document order; keep it.
                let mut map = SubstitutionMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

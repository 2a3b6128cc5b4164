//! Canonical lookup tables for temperatures and durations

use indexmap::IndexMap;
use serde::Deserialize;

/// A canonical key → numeric value table.
///
/// Iteration order is insertion (definition) order. The matcher scans keys
/// in this order and takes the first hit, so order is part of the table's
/// meaning, not an implementation detail.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LookupTable(IndexMap<String, f64>);

impl LookupTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key; an existing key keeps its position but takes the new value
    pub fn insert<S: Into<String>>(&mut self, key: S, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Exact (case-sensitive) lookup
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Exact lookup returning the stored key alongside the value
    pub fn get_key_value(&self, key: &str) -> Option<(&str, f64)> {
        self.0.get_key_value(key).map(|(k, v)| (k.as_str(), *v))
    }

    /// Keys in definition order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        LookupTable(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The two static lookup tables a run computes against.
///
/// Supplied by the surrounding configuration and passed into the engine
/// explicitly, so tests can inject their own tables.
#[derive(Debug, Clone, Deserialize)]
pub struct Lookups {
    /// Canonical temperature key → degrees C
    pub temperature: LookupTable,
    /// Canonical duration key → minutes
    pub duration: LookupTable,
}

impl Lookups {
    /// Built-in tables used when no override file is supplied
    pub fn builtin() -> Self {
        Self {
            temperature: [
                ("oven low", 140.0),
                ("oven moderate", 180.0),
                ("oven hot", 220.0),
                ("grill", 250.0),
                ("simmer", 95.0),
                ("boil", 100.0),
            ]
            .into_iter()
            .collect(),
            duration: [
                ("quick", 10.0),
                ("short", 20.0),
                ("standard", 35.0),
                ("long", 60.0),
                ("slow", 240.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

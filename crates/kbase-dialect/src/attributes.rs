//! Persisted key/value settings of one connection profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute key of the strict `NUMBER(38)` interpretation flag.
pub const STRICT_BIG_NUMBER_INTERPRETATION: &str = "STRICT_NUMBER_38_INTERPRETATION";

/// Mutable attribute bag scoped to one connection profile.
///
/// The configuration layer writes it; the type mapper only reads it. Callers
/// serialize writes themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionAttributes {
    values: BTreeMap<String, String>,
}

impl ConnectionAttributes {
    /// Creates an empty attribute bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value stored under `key`, or `default` when unset.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Returns true if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `NUMBER(38)` columns are read as big numbers.
    ///
    /// Stored as `"Y"`/`"N"`; unset reads as `"N"`.
    #[must_use]
    pub fn strict_big_number_interpretation(&self) -> bool {
        self.get_or(STRICT_BIG_NUMBER_INTERPRETATION, "N")
            .eq_ignore_ascii_case("Y")
    }

    /// Sets the strict `NUMBER(38)` interpretation flag.
    pub fn set_strict_big_number_interpretation(&mut self, strict: bool) {
        self.set(
            STRICT_BIG_NUMBER_INTERPRETATION,
            if strict { "Y" } else { "N" },
        );
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

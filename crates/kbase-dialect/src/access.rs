//! Connection access modes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a connection profile reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Direct connection through the native `jdbc:kbase` driver.
    #[default]
    Native,
    /// Connection looked up by name from a directory service. Has no URL form.
    Jndi,
}

impl AccessType {
    /// Access modes supported by the Kbase dialect, default first.
    pub const SUPPORTED: &'static [Self] = &[Self::Native, Self::Jndi];

    /// Returns the lowercase name used in profiles and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Jndi => "jndi",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Connection profiles.
//!
//! A profile is the configuration a caller keeps per Kbase connection: access
//! mode, address, attributes and whether the native client libraries were
//! loaded. Profiles are stored as JSON:
//!
//! ```json
//! {
//!   "access": "native",
//!   "host": "db.internal",
//!   "port": "4567",
//!   "database": "BDMS",
//!   "attributes": { "STRICT_NUMBER_38_INTERPRETATION": "Y" },
//!   "native_driver_available": true
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::AccessType;
use crate::attributes::ConnectionAttributes;
use crate::dialect::KbaseDialect;
use crate::error::Result;

/// Stored settings of one Kbase connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionProfile {
    /// Access mode.
    pub access: AccessType,
    /// Host name; empty means `localhost`.
    pub host: String,
    /// Port literal; empty or `-1` means the default port.
    pub port: String,
    /// Database name; empty means `BDMS`.
    pub database: String,
    /// Persisted attributes.
    pub attributes: ConnectionAttributes,
    /// Whether the native client libraries are loaded.
    pub native_driver_available: bool,
}

impl ConnectionProfile {
    /// Parses a profile from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DialectError::Profile`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a profile from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DialectError::Io`] if the file cannot be read and
    /// [`crate::DialectError::Profile`] if its content is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading connection profile");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Builds the dialect bound to this profile.
    #[must_use]
    pub fn dialect(&self) -> KbaseDialect {
        KbaseDialect::from_profile(self)
    }

    /// Builds the connection URL of this profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DialectError::UnsupportedAccessMode`] for non-native
    /// profiles.
    pub fn url(&self) -> Result<String> {
        self.dialect().url(&self.host, &self.port, &self.database)
    }
}

//! Connection URL synthesis.
//!
//! Native connections use `jdbc:kbase://<host>:<port>`. The database name is
//! normalized to a `/`-prefixed path but the driver selects the database on
//! its own, so the path is not part of the URL.

use std::fmt;

use tracing::debug;

use crate::access::AccessType;
use crate::capability::Capabilities;
use crate::error::{DialectError, Result};

/// Scheme prefix of native connection URLs.
pub const URL_PREFIX: &str = "jdbc:kbase://";

/// Host used when the profile leaves it empty.
pub const DEFAULT_HOST: &str = "localhost";

/// Database used when the profile leaves it empty.
pub const DEFAULT_DATABASE: &str = "BDMS";

/// Port literal meaning "use the default port".
const UNSET_PORT: &str = "-1";

/// Host, port and database of a native connection after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    /// Host name, never empty.
    pub host: String,
    /// Port, never empty.
    pub port: String,
    /// Database path, always starting with `/`.
    pub database: String,
}

impl ConnectionUrl {
    /// Applies the defaulting rules to raw profile values.
    ///
    /// Each rule applies on its own: an empty host becomes `localhost`, an
    /// empty or `-1` port becomes `default_port`, an empty database becomes
    /// `BDMS`, and the database gets a leading `/`.
    #[must_use]
    pub fn resolve(host: &str, port: &str, database: &str, default_port: u16) -> Self {
        let host = if host.is_empty() { DEFAULT_HOST } else { host };
        let port = if port.is_empty() || port == UNSET_PORT {
            default_port.to_string()
        } else {
            port.to_string()
        };
        let database = if database.is_empty() {
            DEFAULT_DATABASE
        } else {
            database
        };
        let database = if database.starts_with('/') {
            database.to_string()
        } else {
            format!("/{database}")
        };

        Self {
            host: host.to_string(),
            port,
            database,
        }
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URL_PREFIX}{}:{}", self.host, self.port)
    }
}

/// Builds the connection URL for a profile against the stock Kbase
/// capability table.
///
/// # Errors
///
/// Returns [`DialectError::UnsupportedAccessMode`] unless `access` is
/// [`AccessType::Native`].
pub fn build_url(access: AccessType, host: &str, port: &str, database: &str) -> Result<String> {
    build_url_with(&Capabilities::kbase(), access, host, port, database)
}

/// Builds the connection URL, taking the default port from `capabilities`.
///
/// # Errors
///
/// Returns [`DialectError::UnsupportedAccessMode`] if `capabilities` has no
/// default port for `access`.
pub fn build_url_with(
    capabilities: &Capabilities,
    access: AccessType,
    host: &str,
    port: &str,
    database: &str,
) -> Result<String> {
    let default_port = capabilities
        .default_port_for(access)
        .ok_or(DialectError::UnsupportedAccessMode { access })?;
    let resolved = ConnectionUrl::resolve(host, port, database, default_port);
    let url = resolved.to_string();
    debug!(url = %url, database = %resolved.database, "Built connection URL");
    Ok(url)
}

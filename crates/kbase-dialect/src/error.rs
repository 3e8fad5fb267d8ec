//! Error types for the dialect engine.

use crate::access::AccessType;

/// Boxed cause carried by [`DialectError::Lookup`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while translating for the Kbase dialect.
///
/// Type mapping and statement synthesis are total and never produce these;
/// only URL building, index coverage checks and profile loading do.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// A URL was requested for an access mode the `jdbc:kbase` scheme
    /// has no form for.
    #[error("Unsupported database access mode [{access}]")]
    UnsupportedAccessMode {
        /// The access mode the connection is configured with.
        access: AccessType,
    },

    /// Consuming the index probe feed failed.
    #[error("Unable to determine if indexes exist on table [{table}]")]
    Lookup {
        /// Schema-qualified table being checked.
        table: String,
        /// The data source failure.
        #[source]
        source: BoxError,
    },

    /// A connection profile could not be parsed.
    #[error("Invalid connection profile: {0}")]
    Profile(#[from] serde_json::Error),

    /// IO error (reading a connection profile).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_unsupported_access_message() {
        let err = DialectError::UnsupportedAccessMode {
            access: AccessType::Jndi,
        };
        assert_eq!(err.to_string(), "Unsupported database access mode [jndi]");
    }

    #[test]
    fn test_lookup_keeps_source() {
        let err = DialectError::Lookup {
            table: "etl.orders".to_string(),
            source: "connection reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to determine if indexes exist on table [etl.orders]"
        );
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("connection reset"));
    }
}

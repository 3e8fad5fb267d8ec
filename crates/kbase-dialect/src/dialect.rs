//! The Kbase dialect bound to one connection profile.

use crate::access::AccessType;
use crate::attributes::ConnectionAttributes;
use crate::capability::Capabilities;
use crate::error::Result;
use crate::profile::ConnectionProfile;
use crate::statement::StatementBuilder;
use crate::type_mapper::TypeMapper;
use crate::url::build_url_with;

/// Capabilities, access mode and attributes of one connection profile.
///
/// Hands out a [`TypeMapper`] and a [`StatementBuilder`] configured from the
/// profile's attributes. Both are plain values; changing the attributes later
/// does not affect mappers already handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KbaseDialect {
    capabilities: Capabilities,
    access: AccessType,
    attributes: ConnectionAttributes,
}

impl KbaseDialect {
    /// Creates a native-access dialect with empty attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the dialect described by `profile`.
    #[must_use]
    pub fn from_profile(profile: &ConnectionProfile) -> Self {
        Self {
            capabilities: Capabilities::kbase()
                .with_native_driver(profile.native_driver_available),
            access: profile.access,
            attributes: profile.attributes.clone(),
        }
    }

    /// Replaces the capability table.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the access mode.
    #[must_use]
    pub fn with_access(mut self, access: AccessType) -> Self {
        self.access = access;
        self
    }

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        "kbase"
    }

    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[must_use]
    pub const fn access(&self) -> AccessType {
        self.access
    }

    #[must_use]
    pub const fn attributes(&self) -> &ConnectionAttributes {
        &self.attributes
    }

    /// Mutable access for the configuration layer.
    pub fn attributes_mut(&mut self) -> &mut ConnectionAttributes {
        &mut self.attributes
    }

    /// See [`ConnectionAttributes::strict_big_number_interpretation`].
    #[must_use]
    pub fn strict_big_number_interpretation(&self) -> bool {
        self.attributes.strict_big_number_interpretation()
    }

    /// See [`ConnectionAttributes::set_strict_big_number_interpretation`].
    pub fn set_strict_big_number_interpretation(&mut self, strict: bool) {
        self.attributes.set_strict_big_number_interpretation(strict);
    }

    /// Default port for this profile's access mode.
    #[must_use]
    pub const fn default_port(&self) -> Option<u16> {
        self.capabilities.default_port_for(self.access)
    }

    /// Driver class for this profile's access mode.
    #[must_use]
    pub const fn driver_class(&self) -> Option<&'static str> {
        self.capabilities.driver_class(self.access)
    }

    /// Returns a type mapper reading the current attributes.
    #[must_use]
    pub fn type_mapper(&self) -> TypeMapper {
        TypeMapper::new(self.capabilities)
            .strict_big_number_interpretation(self.strict_big_number_interpretation())
    }

    /// Returns a statement builder around [`Self::type_mapper`].
    #[must_use]
    pub fn statements(&self) -> StatementBuilder {
        StatementBuilder::new(self.type_mapper())
    }

    /// Builds the connection URL, defaulting the port from the capability table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DialectError::UnsupportedAccessMode`] unless the
    /// profile uses native access.
    pub fn url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        build_url_with(&self.capabilities, self.access, host, port, database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::LogicalType;
    use crate::DialectError;

    #[test]
    fn test_native_defaults() {
        let dialect = KbaseDialect::new();
        assert_eq!(dialect.name(), "kbase");
        assert_eq!(dialect.access(), AccessType::Native);
        assert_eq!(dialect.default_port(), Some(4567));
        assert_eq!(dialect.driver_class(), Some("com.kbase.jdbc.Driver"));
        assert!(!dialect.strict_big_number_interpretation());
    }

    #[test]
    fn test_jndi_profile() {
        let dialect = KbaseDialect::new().with_access(AccessType::Jndi);
        assert_eq!(dialect.default_port(), None);
        assert_eq!(dialect.driver_class(), None);
        assert!(matches!(
            dialect.url("h", "1", "d"),
            Err(DialectError::UnsupportedAccessMode { .. })
        ));
    }

    #[test]
    fn test_strict_flag_reaches_mapper() {
        let mut dialect = KbaseDialect::new();
        assert_eq!(dialect.type_mapper().classify_numeric(38, 0), LogicalType::Integer);

        dialect.set_strict_big_number_interpretation(true);
        assert!(dialect.strict_big_number_interpretation());
        assert_eq!(
            dialect.type_mapper().classify_numeric(38, 0),
            LogicalType::BigNumber
        );
        assert_eq!(
            dialect.statements().mapper().classify_numeric(38, 0),
            LogicalType::BigNumber
        );
    }

    #[test]
    fn test_custom_capabilities() {
        let dialect =
            KbaseDialect::new().with_capabilities(Capabilities::kbase().with_timestamp_type(false));
        assert!(!dialect.type_mapper().capabilities().supports_timestamp_type());
        let col = crate::column::ColumnDescriptor::new("ts", LogicalType::Timestamp);
        assert_eq!(dialect.type_mapper().map_type(&col, None, None), "DATE");
    }

    #[test]
    fn test_url_uses_capability_port() {
        let dialect =
            KbaseDialect::new().with_capabilities(Capabilities::kbase().with_default_port(6000));
        assert_eq!(dialect.default_port(), Some(6000));
        assert_eq!(
            dialect.url("db.internal", "-1", "sales").unwrap(),
            "jdbc:kbase://db.internal:6000"
        );
        assert_eq!(
            KbaseDialect::new().url("db.internal", "", "").unwrap(),
            "jdbc:kbase://db.internal:4567"
        );
    }
}

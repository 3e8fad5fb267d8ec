//! Static facts about the Kbase dialect.
//!
//! Downstream tooling queries these to decide how to build SQL: whether to
//! issue lock statements, whether sequences are usable, which words need
//! quoting. A [`Capabilities`] value is built once per connection profile and
//! only read afterwards.

use serde::Serialize;

use crate::access::AccessType;

/// Default TCP port of a Kbase server.
pub const DEFAULT_PORT: u16 = 4567;

/// JDBC driver class used for native connections.
pub const DRIVER_CLASS: &str = "com.kbase.jdbc.Driver";

/// Where the extra connection options are documented.
pub const EXTRA_OPTIONS_HELP_URL: &str = "http://www.shentongdata.com/?bid=3&eid=249";

/// Words Kbase reserves in SQL text.
pub const RESERVED_WORDS: &[&str] = &[
    "ALIASNAME",
    "ADD",
    "ALL",
    "ALERT",
    "AND",
    "ASC",
    "AS",
    "AT",
    "AUTO",
    "AVG",
    "BY",
    "CREATE",
    "CREATEVIEW",
    "DATABASE",
    "DATE",
    "DEC",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISPLAYNAME",
    "DISTINCT",
    "DROP",
    "DUPDB",
    "FACTOR",
    "FROM",
    "GROUP",
    "INDEX",
    "INSERT",
    "INTO",
    "IS",
    "LIKE",
    "LOWER",
    "LTRIM",
    "MAINDB",
    "MANUAL",
    "MAX",
    "MIN",
    "NOT",
    "NULL",
    "ON",
    "OR",
    "ORDER",
    "PACK",
    "PATH",
    "REFCOL",
    "RELEVANT",
    "REPLACE",
    "RTRIM",
    "SELECT",
    "SET",
    "SUBSTR",
    "SUM",
    "TABLE",
    "TRIM",
    "UPDATE",
    "UPPER",
    "USING",
    "VALUES",
    "VARSELECT",
    "VIEW",
    "WHERE",
    "WITH",
    "XLS",
];

/// Driver libraries a deployment has to ship, in load order.
pub const REQUIRED_LIBRARIES: &[&str] = &["oscarJDBC.jar", "oscarJDBC14.jar", "oscarJDBC16.jar"];

/// Capability table of the Kbase dialect.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    default_port: u16,
    max_columns_per_index: u32,
    max_varchar_length: u32,
    reserved_words: &'static [&'static str],
    required_libraries: &'static [&'static str],
    supports_timestamp_type: bool,
    supports_sequences: bool,
    supports_synonyms: bool,
    supports_auto_increment: bool,
    uses_schema_for_table_list: bool,
    needs_lock_all_tables: bool,
    supports_prepared_metadata_retrieval: bool,
    supports_error_handling_on_batch_updates: bool,
    releases_savepoints: bool,
    supports_options_in_url: bool,
    requires_create_table_primary_key_append: bool,
    supports_repository: bool,
    native_driver_available: bool,
}

impl Capabilities {
    /// Returns the capability table of a Kbase server.
    #[must_use]
    pub const fn kbase() -> Self {
        Self {
            default_port: DEFAULT_PORT,
            max_columns_per_index: 32,
            max_varchar_length: 2000,
            reserved_words: RESERVED_WORDS,
            required_libraries: REQUIRED_LIBRARIES,
            supports_timestamp_type: true,
            supports_sequences: true,
            supports_synonyms: true,
            supports_auto_increment: true,
            uses_schema_for_table_list: true,
            needs_lock_all_tables: false,
            supports_prepared_metadata_retrieval: false,
            supports_error_handling_on_batch_updates: false,
            releases_savepoints: false,
            supports_options_in_url: false,
            requires_create_table_primary_key_append: true,
            supports_repository: true,
            native_driver_available: false,
        }
    }

    /// Records whether the data-access layer managed to load the native
    /// client libraries.
    #[must_use]
    pub const fn with_native_driver(mut self, available: bool) -> Self {
        self.native_driver_available = available;
        self
    }

    /// Overrides the default port, for servers listening elsewhere.
    #[must_use]
    pub const fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    /// Overrides TIMESTAMP support, for servers that only know DATE.
    #[must_use]
    pub const fn with_timestamp_type(mut self, supported: bool) -> Self {
        self.supports_timestamp_type = supported;
        self
    }

    /// Default port of the server.
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Default port for the given access mode; only native connections have one.
    #[must_use]
    pub const fn default_port_for(&self, access: AccessType) -> Option<u16> {
        match access {
            AccessType::Native => Some(self.default_port),
            AccessType::Jndi => None,
        }
    }

    /// Driver class for the given access mode; only native connections have one.
    #[must_use]
    pub const fn driver_class(&self, access: AccessType) -> Option<&'static str> {
        match access {
            AccessType::Native => Some(DRIVER_CLASS),
            AccessType::Jndi => None,
        }
    }

    /// Access modes a profile may use, default first.
    #[must_use]
    pub const fn access_types(&self) -> &'static [AccessType] {
        AccessType::SUPPORTED
    }

    /// Maximum number of columns in one index.
    #[must_use]
    pub const fn max_columns_per_index(&self) -> u32 {
        self.max_columns_per_index
    }

    /// Longest VARCHAR the server accepts.
    #[must_use]
    pub const fn max_varchar_length(&self) -> u32 {
        self.max_varchar_length
    }

    /// Reserved words, uppercase.
    #[must_use]
    pub const fn reserved_words(&self) -> &'static [&'static str] {
        self.reserved_words
    }

    /// Returns whether `word` is reserved, ignoring case.
    #[must_use]
    pub fn is_reserved_word(&self, word: &str) -> bool {
        self.reserved_words
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(word))
    }

    /// Driver libraries, in load order.
    #[must_use]
    pub const fn required_libraries(&self) -> &'static [&'static str] {
        self.required_libraries
    }

    /// Whether TIMESTAMP is a native column type.
    #[must_use]
    pub const fn supports_timestamp_type(&self) -> bool {
        self.supports_timestamp_type
    }

    /// Whether sequences can be used.
    #[must_use]
    pub const fn supports_sequences(&self) -> bool {
        self.supports_sequences
    }

    #[must_use]
    pub const fn supports_synonyms(&self) -> bool {
        self.supports_synonyms
    }

    /// Whether auto-increment columns exist (as `BIGSERIAL`).
    #[must_use]
    pub const fn supports_auto_increment(&self) -> bool {
        self.supports_auto_increment
    }

    /// Whether the schema name has to be supplied when listing tables.
    #[must_use]
    pub const fn uses_schema_for_table_list(&self) -> bool {
        self.uses_schema_for_table_list
    }

    /// Whether every table of a job has to be locked up front.
    #[must_use]
    pub const fn needs_lock_all_tables(&self) -> bool {
        self.needs_lock_all_tables
    }

    /// Whether result metadata can be read from a prepared, unexecuted SELECT.
    #[must_use]
    pub const fn supports_prepared_metadata_retrieval(&self) -> bool {
        self.supports_prepared_metadata_retrieval
    }

    #[must_use]
    pub const fn supports_error_handling_on_batch_updates(&self) -> bool {
        self.supports_error_handling_on_batch_updates
    }

    /// Whether savepoints may be released explicitly.
    #[must_use]
    pub const fn releases_savepoints(&self) -> bool {
        self.releases_savepoints
    }

    /// Whether connection options may travel in the URL. Kbase wants them
    /// as driver properties instead.
    #[must_use]
    pub const fn supports_options_in_url(&self) -> bool {
        self.supports_options_in_url
    }

    /// Whether CREATE TABLE must spell out the primary key after the columns.
    #[must_use]
    pub const fn requires_create_table_primary_key_append(&self) -> bool {
        self.requires_create_table_primary_key_append
    }

    #[must_use]
    pub const fn supports_repository(&self) -> bool {
        self.supports_repository
    }

    /// Whether the native client libraries were loaded by the data-access layer.
    #[must_use]
    pub const fn native_driver_available(&self) -> bool {
        self.native_driver_available
    }

    /// Documentation link for extra connection options.
    #[must_use]
    pub const fn extra_options_help_url(&self) -> &'static str {
        EXTRA_OPTIONS_HELP_URL
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::kbase()
    }
}

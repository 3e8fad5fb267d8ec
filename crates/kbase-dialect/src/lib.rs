//! # kbase-dialect
//!
//! SQL dialect translation for the Kbase database.
//!
//! The crate turns database-agnostic column descriptions into Kbase SQL text
//! and answers the capability questions data-access tooling asks before
//! building SQL. It only emits text: it never connects, executes or parses.
//!
//! - **Capabilities** - static facts: default port, limits, reserved words,
//!   feature flags
//! - **Type mapper** - logical column type to Kbase type token
//! - **Statements** - `ALTER TABLE`, `DROP TABLE IF EXISTS`, table locks,
//!   zero-row probes
//! - **URL** - `jdbc:kbase://host:port` with defaulting rules
//! - **Quoting** - string literal escaping
//! - **Index coverage** - whether fetched index metadata covers a field set
//!
//! ## Example
//!
//! ```rust
//! use kbase_dialect::prelude::*;
//!
//! let dialect = KbaseDialect::new();
//! let statements = dialect.statements();
//!
//! let keys = KeyFields::none().technical_key("order_tk");
//! let sql = statements.add_column("orders", &string("email", 120), &keys, false);
//! assert_eq!(sql, "ALTER TABLE orders ADD email VARCHAR(120)");
//!
//! let url = dialect.url("db.internal", "", "sales").unwrap();
//! assert_eq!(url, "jdbc:kbase://db.internal:4567");
//!
//! assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
//! ```

pub mod access;
pub mod attributes;
pub mod capability;
pub mod column;
pub mod dialect;
pub mod error;
pub mod index;
pub mod profile;
pub mod quote;
pub mod statement;
pub mod type_mapper;
pub mod url;

pub use error::{DialectError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::access::AccessType;
    pub use crate::attributes::{ConnectionAttributes, STRICT_BIG_NUMBER_INTERPRETATION};
    pub use crate::capability::Capabilities;
    pub use crate::column::{integer, number, string, ColumnDescriptor, LogicalType};
    pub use crate::dialect::KbaseDialect;
    pub use crate::error::{DialectError, Result};
    pub use crate::index::{all_fields_indexed, IndexProbeRow};
    pub use crate::profile::ConnectionProfile;
    pub use crate::quote::quote_literal;
    pub use crate::statement::{KeyFields, StatementBuilder};
    pub use crate::type_mapper::{TypeMapper, DEFAULT_CLOB_LENGTH, UNKNOWN_TYPE};
    pub use crate::url::{build_url, build_url_with, ConnectionUrl};
}

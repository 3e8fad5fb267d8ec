//! Logical type to Kbase column type mapping.
//!
//! Every descriptor maps to some token, degenerate sizes included, so that
//! one odd column never blocks DDL generation for a whole table. Types the
//! mapper cannot place come out as [`UNKNOWN_TYPE`] for the caller to detect.

use tracing::warn;

use crate::capability::Capabilities;
use crate::column::{ColumnDescriptor, LogicalType};

/// String length from which a column is stored as a large object (`TEXT`).
pub const DEFAULT_CLOB_LENGTH: i32 = 9_999_999;

/// Token emitted for columns without a Kbase type.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Maps column descriptors to Kbase type tokens.
///
/// The output depends only on the descriptor, the key names, the
/// capabilities and the strict big number flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapper {
    capabilities: Capabilities,
    strict_big_number: bool,
    clob_length: i32,
}

impl TypeMapper {
    /// Creates a mapper with the default large-object threshold.
    #[must_use]
    pub const fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            strict_big_number: false,
            clob_length: DEFAULT_CLOB_LENGTH,
        }
    }

    /// Sets the strict `NUMBER(38)` interpretation flag.
    #[must_use]
    pub const fn strict_big_number_interpretation(mut self, strict: bool) -> Self {
        self.strict_big_number = strict;
        self
    }

    /// Sets the string length from which columns become `TEXT`.
    #[must_use]
    pub const fn clob_length(mut self, clob_length: i32) -> Self {
        self.clob_length = clob_length;
        self
    }

    /// Returns the capabilities this mapper consults.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the Kbase type token for `column`.
    ///
    /// Numeric columns named like the technical or primary key (ignoring
    /// case) become `BIGSERIAL`.
    #[must_use]
    pub fn map_type(
        &self,
        column: &ColumnDescriptor,
        technical_key: Option<&str>,
        primary_key: Option<&str>,
    ) -> String {
        match column.logical_type {
            // DATE stays DATE; it does not pick up the TIMESTAMP token.
            LogicalType::Date => "DATE".to_string(),
            LogicalType::Timestamp => {
                if self.capabilities.supports_timestamp_type() {
                    "TIMESTAMP".to_string()
                } else {
                    "DATE".to_string()
                }
            }
            LogicalType::Boolean => "CHAR(1)".to_string(),
            LogicalType::Number | LogicalType::Integer | LogicalType::BigNumber => {
                if is_key(&column.name, technical_key) || is_key(&column.name, primary_key) {
                    "BIGSERIAL".to_string()
                } else {
                    numeric_type(column.length, column.precision)
                }
            }
            LogicalType::String => {
                if column.length < 1 || column.length >= self.clob_length {
                    "TEXT".to_string()
                } else {
                    format!("VARCHAR({})", column.length)
                }
            }
            LogicalType::Binary => "BLOB".to_string(),
            LogicalType::Unknown => {
                warn!(column = %column.name, "No Kbase type for column");
                UNKNOWN_TYPE.to_string()
            }
        }
    }

    /// Classifies native `NUMERIC(length, precision)` metadata as a logical type.
    ///
    /// `NUMBER(38, 0)` is the default for undeclared integer columns, so it
    /// reads as INTEGER unless strict big number interpretation is on.
    #[must_use]
    pub const fn classify_numeric(&self, length: i32, precision: i32) -> LogicalType {
        if length <= 0 && precision <= 0 {
            LogicalType::BigNumber
        } else if precision == 0 && length == 38 {
            if self.strict_big_number {
                LogicalType::BigNumber
            } else {
                LogicalType::Integer
            }
        } else if precision == 0 && length < 18 {
            LogicalType::Integer
        } else if length > 15 || precision > 15 {
            LogicalType::BigNumber
        } else {
            LogicalType::Number
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new(Capabilities::kbase())
    }
}

fn is_key(name: &str, key: Option<&str>) -> bool {
    key.is_some_and(|key| name.eq_ignore_ascii_case(key))
}

fn numeric_type(length: i32, precision: i32) -> String {
    if length <= 0 {
        return "DOUBLE PRECISION".to_string();
    }
    if precision > 0 || length > 18 {
        // NUMERIC(total digits, decimal places)
        let total = i64::from(length) + i64::from(precision);
        format!("NUMERIC({total}, {precision})")
    } else if precision == 0 {
        if length > 9 {
            "BIGINT".to_string()
        } else if length < 5 {
            "SMALLINT".to_string()
        } else {
            "INT".to_string()
        }
    } else {
        "FLOAT(53)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{integer, number, string};

    fn mapper() -> TypeMapper {
        TypeMapper::default()
    }

    fn plain(column: &ColumnDescriptor) -> String {
        mapper().map_type(column, None, None)
    }

    #[test]
    fn test_temporal_types() {
        let date = ColumnDescriptor::new("born", LogicalType::Date);
        let ts = ColumnDescriptor::new("seen_at", LogicalType::Timestamp);
        assert_eq!(plain(&date), "DATE");
        assert_eq!(plain(&ts), "TIMESTAMP");

        let legacy = TypeMapper::new(Capabilities::kbase().with_timestamp_type(false));
        assert_eq!(legacy.map_type(&ts, None, None), "DATE");
        assert_eq!(legacy.map_type(&date, None, None), "DATE");
    }

    #[test]
    fn test_boolean_and_binary() {
        assert_eq!(
            plain(&ColumnDescriptor::new("active", LogicalType::Boolean)),
            "CHAR(1)"
        );
        assert_eq!(
            plain(&ColumnDescriptor::new("photo", LogicalType::Binary).length(100)),
            "BLOB"
        );
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(plain(&integer("a", 1)), "SMALLINT");
        assert_eq!(plain(&integer("a", 4)), "SMALLINT");
        assert_eq!(plain(&integer("a", 5)), "INT");
        assert_eq!(plain(&integer("a", 9)), "INT");
        assert_eq!(plain(&integer("a", 10)), "BIGINT");
        assert_eq!(plain(&integer("a", 18)), "BIGINT");
    }

    #[test]
    fn test_numeric_with_precision_or_long() {
        assert_eq!(plain(&number("price", 10, 2)), "NUMERIC(12, 2)");
        assert_eq!(plain(&number("huge", 19, 0)), "NUMERIC(19, 0)");
        assert_eq!(
            plain(&ColumnDescriptor::new("n", LogicalType::BigNumber).length(38)),
            "NUMERIC(38, 0)"
        );
    }

    #[test]
    fn test_numeric_degenerate_sizes() {
        assert_eq!(plain(&number("ratio", 0, 0)), "DOUBLE PRECISION");
        assert_eq!(plain(&number("ratio", -1, 3)), "DOUBLE PRECISION");
        assert_eq!(plain(&number("ratio", 8, -1)), "FLOAT(53)");
        assert_eq!(
            plain(&number("ratio", i32::MAX, i32::MAX)),
            format!("NUMERIC({}, {})", i64::from(i32::MAX) * 2, i32::MAX)
        );
    }

    #[test]
    fn test_key_columns_become_bigserial() {
        let m = mapper();
        let id = number("ID", 9, 0);
        assert_eq!(m.map_type(&id, Some("id"), None), "BIGSERIAL");
        assert_eq!(m.map_type(&id, None, Some("Id")), "BIGSERIAL");
        assert_eq!(m.map_type(&number("id", 10, 4), Some("id"), None), "BIGSERIAL");
        assert_eq!(m.map_type(&id, Some("other"), Some("keys")), "INT");
    }

    #[test]
    fn test_key_names_ignored_for_non_numeric() {
        let m = mapper();
        assert_eq!(m.map_type(&string("id", 20), Some("id"), Some("id")), "VARCHAR(20)");
    }

    #[test]
    fn test_string_lengths() {
        assert_eq!(plain(&string("s", 0)), "TEXT");
        assert_eq!(plain(&string("s", -5)), "TEXT");
        assert_eq!(plain(&string("s", 1)), "VARCHAR(1)");
        assert_eq!(plain(&string("s", DEFAULT_CLOB_LENGTH - 1)), "VARCHAR(9999998)");
        assert_eq!(plain(&string("s", DEFAULT_CLOB_LENGTH)), "TEXT");

        let small = mapper().clob_length(4000);
        assert_eq!(small.map_type(&string("s", 3999), None, None), "VARCHAR(3999)");
        assert_eq!(small.map_type(&string("s", 4000), None, None), "TEXT");
    }

    #[test]
    fn test_unknown_is_a_token() {
        assert_eq!(
            plain(&ColumnDescriptor::new("blob", LogicalType::Unknown)),
            UNKNOWN_TYPE
        );
    }

    #[test]
    fn test_classify_numeric() {
        let m = mapper();
        assert_eq!(m.classify_numeric(0, 0), LogicalType::BigNumber);
        assert_eq!(m.classify_numeric(-1, -1), LogicalType::BigNumber);
        assert_eq!(m.classify_numeric(38, 0), LogicalType::Integer);
        assert_eq!(m.classify_numeric(9, 0), LogicalType::Integer);
        assert_eq!(m.classify_numeric(20, 0), LogicalType::BigNumber);
        assert_eq!(m.classify_numeric(10, 2), LogicalType::Number);
        assert_eq!(m.classify_numeric(10, 16), LogicalType::BigNumber);
    }

    #[test]
    fn test_classify_numeric_strict() {
        let strict = mapper().strict_big_number_interpretation(true);
        assert_eq!(strict.classify_numeric(38, 0), LogicalType::BigNumber);
        assert_eq!(strict.classify_numeric(9, 0), LogicalType::Integer);
        // strictness never changes DDL tokens
        assert_eq!(strict.map_type(&integer("n", 9), None, None), "INT");
    }
}

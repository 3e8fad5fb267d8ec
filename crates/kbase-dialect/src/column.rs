//! Database-agnostic column descriptions.
//!
//! The calling pipeline describes each column with a [`ColumnDescriptor`];
//! the type mapper turns it into a Kbase type token.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical value type of a column, independent of any database.
///
/// Deserializes through [`LogicalType::from`], so unrecognized names load as
/// [`LogicalType::Unknown`] instead of failing the whole descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum LogicalType {
    /// Calendar date.
    Date,
    /// Date and time.
    Timestamp,
    Boolean,
    /// Floating point number.
    Number,
    Integer,
    /// Arbitrary precision decimal.
    BigNumber,
    String,
    Binary,
    /// A type the pipeline could not classify.
    Unknown,
}

impl LogicalType {
    /// Returns the uppercase name, as used in serialized descriptors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Timestamp => "TIMESTAMP",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::Integer => "INTEGER",
            Self::BigNumber => "BIGNUMBER",
            Self::String => "STRING",
            Self::Binary => "BINARY",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for the three numeric types.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer | Self::BigNumber)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a type name case-insensitively; unrecognized names become
/// [`LogicalType::Unknown`].
impl From<&str> for LogicalType {
    fn from(name: &str) -> Self {
        [
            Self::Date,
            Self::Timestamp,
            Self::Boolean,
            Self::Number,
            Self::Integer,
            Self::BigNumber,
            Self::String,
            Self::Binary,
        ]
        .into_iter()
        .find(|ty| ty.as_str().eq_ignore_ascii_case(name.trim()))
        .unwrap_or(Self::Unknown)
    }
}

impl From<String> for LogicalType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// One column as described by the calling pipeline.
///
/// `length` and `precision` of 0 mean "unspecified". Negative values are
/// tolerated and handled by the mapper's fallback branches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Logical type.
    #[serde(rename = "type")]
    pub logical_type: LogicalType,
    /// Length in characters or digits.
    #[serde(default)]
    pub length: i32,
    /// Digits after the decimal point.
    #[serde(default)]
    pub precision: i32,
}

impl ColumnDescriptor {
    /// Creates a column with unspecified length and precision.
    #[must_use]
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            length: 0,
            precision: 0,
        }
    }

    /// Sets the length.
    #[must_use]
    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Sets the precision.
    #[must_use]
    pub fn precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }
}

/// Creates a STRING column of the given length.
#[must_use]
pub fn string(name: impl Into<String>, length: i32) -> ColumnDescriptor {
    ColumnDescriptor::new(name, LogicalType::String).length(length)
}

/// Creates a NUMBER column of the given length and precision.
#[must_use]
pub fn number(name: impl Into<String>, length: i32, precision: i32) -> ColumnDescriptor {
    ColumnDescriptor::new(name, LogicalType::Number)
        .length(length)
        .precision(precision)
}

/// Creates an INTEGER column of the given length.
#[must_use]
pub fn integer(name: impl Into<String>, length: i32) -> ColumnDescriptor {
    ColumnDescriptor::new(name, LogicalType::Integer).length(length)
}

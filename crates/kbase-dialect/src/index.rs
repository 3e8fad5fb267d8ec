//! Index coverage checks.
//!
//! The data-access layer runs [`StatementBuilder::index_columns_query`] and
//! hands the rows over as a blocking iterator; this module only decides
//! whether the requested fields are all indexed.
//!
//! [`StatementBuilder::index_columns_query`]: crate::statement::StatementBuilder::index_columns_query

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoxError, DialectError, Result};

/// Name of the data dictionary field holding the indexed column.
pub const COLUMN_NAME_FIELD: &str = "COLUMN_NAME";

/// One row of the index metadata query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexProbeRow {
    /// Indexed column.
    pub column_name: String,
}

impl IndexProbeRow {
    /// Creates a row for `column_name`.
    #[must_use]
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
        }
    }

    /// Picks the `COLUMN_NAME` field (matched ignoring case) out of a fetched
    /// row. A row without that field yields an empty column name.
    #[must_use]
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let column_name = fields
            .into_iter()
            .find(|(name, _)| name.as_ref().eq_ignore_ascii_case(COLUMN_NAME_FIELD))
            .map(|(_, value)| value.as_ref().to_string())
            .unwrap_or_default();
        Self { column_name }
    }
}

/// Returns true if every entry of `fields` appears in the index probe feed.
///
/// Column names match exactly. Consumption stops as soon as all fields are
/// covered, so an empty `fields` slice is true without reading any row.
///
/// # Errors
///
/// Returns [`DialectError::Lookup`] annotated with `table` if the feed
/// yields an error.
pub fn all_fields_indexed<S, I, E>(table: &str, fields: &[S], rows: I) -> Result<bool>
where
    S: AsRef<str>,
    I: IntoIterator<Item = std::result::Result<IndexProbeRow, E>>,
    E: Into<BoxError>,
{
    let mut covered = vec![false; fields.len()];
    let mut remaining = fields.len();
    let mut rows = rows.into_iter();

    while remaining > 0 {
        let Some(row) = rows.next() else {
            break;
        };
        let row = row.map_err(|source| DialectError::Lookup {
            table: table.to_string(),
            source: source.into(),
        })?;

        for (field, seen) in fields.iter().zip(covered.iter_mut()) {
            if !*seen && field.as_ref() == row.column_name {
                *seen = true;
                remaining -= 1;
            }
        }
    }

    debug!(
        table = %table,
        fields = fields.len(),
        missing = remaining,
        "Checked index coverage"
    );
    Ok(remaining == 0)
}

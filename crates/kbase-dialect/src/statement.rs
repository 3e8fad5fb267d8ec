//! DDL and probe statement synthesis.
//!
//! All functions here only compose text; nothing is executed. Identifiers are
//! passed through as given, sanitizing them is the schema layer's job.

use tracing::debug;

use crate::column::ColumnDescriptor;
use crate::quote::quote_literal;
use crate::type_mapper::TypeMapper;

/// Line break appended after drop and lock statements.
pub const LINE_BREAK: &str = "\n";

/// Key fields of the table a column belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyFields<'a> {
    /// Name of the technical (surrogate) key field.
    pub technical_key: Option<&'a str>,
    /// Name of the primary key field.
    pub primary_key: Option<&'a str>,
    /// Whether the caller asked for auto increment. Kbase derives
    /// `BIGSERIAL` from the key names alone, so this does not change the
    /// generated type.
    pub use_autoinc: bool,
}

impl<'a> KeyFields<'a> {
    /// No key fields.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            technical_key: None,
            primary_key: None,
            use_autoinc: false,
        }
    }

    /// Sets the technical key field.
    #[must_use]
    pub const fn technical_key(mut self, name: &'a str) -> Self {
        self.technical_key = Some(name);
        self
    }

    /// Sets the primary key field.
    #[must_use]
    pub const fn primary_key(mut self, name: &'a str) -> Self {
        self.primary_key = Some(name);
        self
    }

    /// Sets the auto increment request.
    #[must_use]
    pub const fn use_autoinc(mut self, use_autoinc: bool) -> Self {
        self.use_autoinc = use_autoinc;
        self
    }
}

/// Composes Kbase statements, using a [`TypeMapper`] for column types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementBuilder {
    mapper: TypeMapper,
}

impl StatementBuilder {
    /// Creates a builder around `mapper`.
    #[must_use]
    pub const fn new(mapper: TypeMapper) -> Self {
        Self { mapper }
    }

    /// Returns the type mapper.
    #[must_use]
    pub const fn mapper(&self) -> &TypeMapper {
        &self.mapper
    }

    /// Generates a field definition: optional `"<name> "`, the type token and
    /// an optional line break.
    #[must_use]
    pub fn field_definition(
        &self,
        column: &ColumnDescriptor,
        keys: &KeyFields<'_>,
        add_field_name: bool,
        add_line_break: bool,
    ) -> String {
        let mut sql = String::with_capacity(128);
        if add_field_name {
            sql.push_str(&column.name);
            sql.push(' ');
        }
        sql.push_str(
            &self
                .mapper
                .map_type(column, keys.technical_key, keys.primary_key),
        );
        if add_line_break {
            sql.push_str(LINE_BREAK);
        }
        sql
    }

    /// Generates SQL for adding `column` to `table`.
    #[must_use]
    pub fn add_column(
        &self,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields<'_>,
        semicolon: bool,
    ) -> String {
        let mut sql = format!(
            "ALTER TABLE {table} ADD {}",
            self.field_definition(column, keys, true, false)
        );
        if semicolon {
            sql.push(';');
        }
        debug!(sql = %sql, "Generated ADD COLUMN");
        sql
    }

    /// Generates SQL for changing the type of `column` in `table`.
    ///
    /// Kbase tooling expects `ALTER TABLE<table>ALTER<definition>` with no
    /// separating spaces; the text is kept byte for byte.
    #[must_use]
    pub fn modify_column(
        &self,
        table: &str,
        column: &ColumnDescriptor,
        keys: &KeyFields<'_>,
        semicolon: bool,
    ) -> String {
        let mut sql = format!(
            "ALTER TABLE{table}ALTER{}",
            self.field_definition(column, keys, true, false)
        );
        if semicolon {
            sql.push(';');
        }
        debug!(sql = %sql, "Generated ALTER COLUMN");
        sql
    }

    /// Generates SQL for dropping `column` from `table`, ending in a line break.
    #[must_use]
    pub fn drop_column(&self, table: &str, column: &ColumnDescriptor) -> String {
        let sql = format!("ALTER TABLE {table} DROP COLUMN {}{LINE_BREAK}", column.name);
        debug!(sql = %sql, "Generated DROP COLUMN");
        sql
    }

    /// Generates `DROP TABLE IF EXISTS`.
    #[must_use]
    pub fn drop_table_if_exists(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {table}")
    }

    /// Generates one exclusive lock statement per table, in input order.
    ///
    /// An empty slice yields an empty string.
    #[must_use]
    pub fn lock_tables<S: AsRef<str>>(&self, tables: &[S]) -> String {
        let mut sql = String::with_capacity(128);
        for table in tables {
            sql.push_str("LOCK TABLE ");
            sql.push_str(table.as_ref());
            sql.push_str(" IN EXCLUSIVE MODE;");
            sql.push_str(LINE_BREAK);
        }
        if !sql.is_empty() {
            debug!(sql = %sql, count = tables.len(), "Generated table locks");
        }
        sql
    }

    /// Always `None`: committing the transaction releases Kbase table locks,
    /// so there is no unlock statement to run.
    #[must_use]
    pub fn unlock_tables<S: AsRef<str>>(&self, _tables: &[S]) -> Option<String> {
        None
    }

    /// Zero-row query returning the column structure of `table`.
    #[must_use]
    pub fn select_all_for_structure_probe(&self, table: &str) -> String {
        format!("SELECT * FROM {table} WHERE 1=0")
    }

    /// Query that fails unless `table` exists.
    #[must_use]
    pub fn table_exists(&self, table: &str) -> String {
        self.select_all_for_structure_probe(table)
    }

    /// Zero-row query that fails unless `column` exists in `table`.
    #[must_use]
    pub fn select_column_for_existence_probe(&self, column: &str, table: &str) -> String {
        format!("SELECT {column} FROM {table} WHERE 1=0")
    }

    /// Query that fails unless `column` exists in `table`.
    #[must_use]
    pub fn column_exists(&self, column: &str, table: &str) -> String {
        self.select_column_for_existence_probe(column, table)
    }

    /// Clause appended to a SELECT to cap the number of rows.
    #[must_use]
    pub fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {rows}")
    }

    /// Query listing the sequences visible to the session.
    #[must_use]
    pub fn list_sequences(&self) -> &'static str {
        "SELECT SEQUENCE_NAME FROM all_sequences"
    }

    /// Data dictionary query whose rows feed the index coverage check.
    #[must_use]
    pub fn index_columns_query(&self, table: &str) -> String {
        format!(
            "SELECT * FROM USER_IND_COLUMNS WHERE TABLE_NAME = {}",
            quote_literal(table)
        )
    }

    /// Joins schema and table as `schema.table`, or just `table` without a schema.
    #[must_use]
    pub fn schema_table_combination(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(schema) if !schema.is_empty() => format!("{schema}.{table}"),
            _ => table.to_string(),
        }
    }
}

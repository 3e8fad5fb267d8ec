#![allow(dead_code)]

use std::convert::Infallible;

use kbase_dialect::prelude::*;

pub fn dialect() -> KbaseDialect {
    KbaseDialect::new()
}

pub fn map(column: &ColumnDescriptor) -> String {
    dialect().type_mapper().map_type(column, None, None)
}

pub fn map_keyed(column: &ColumnDescriptor, tk: &str, pk: &str) -> String {
    dialect().type_mapper().map_type(column, Some(tk), Some(pk))
}

/// Index probe feed that never fails.
pub fn probe_rows(columns: &[&str]) -> Vec<std::result::Result<IndexProbeRow, Infallible>> {
    columns.iter().map(|c| Ok(IndexProbeRow::new(*c))).collect()
}

pub const ALL_TYPES: &[LogicalType] = &[
    LogicalType::Date,
    LogicalType::Timestamp,
    LogicalType::Boolean,
    LogicalType::Number,
    LogicalType::Integer,
    LogicalType::BigNumber,
    LogicalType::String,
    LogicalType::Binary,
    LogicalType::Unknown,
];

mod common;

use common::dialect;
use kbase_dialect::prelude::*;

#[test]
fn test_lock_tables_in_order() {
    let sql = dialect().statements().lock_tables(&["t1", "t2"]);
    let segments: Vec<&str> = sql.lines().collect();
    assert_eq!(
        segments,
        vec![
            "LOCK TABLE t1 IN EXCLUSIVE MODE;",
            "LOCK TABLE t2 IN EXCLUSIVE MODE;"
        ]
    );
    assert_eq!(sql.matches("IN EXCLUSIVE MODE;").count(), 2);
}

#[test]
fn test_lock_nothing() {
    let tables: Vec<String> = Vec::new();
    assert_eq!(dialect().statements().lock_tables(&tables), "");
    assert!(dialect().statements().unlock_tables(&tables).is_none());
}

#[test]
fn test_lock_only_when_needed() {
    let d = dialect();
    // Kbase never requires locking every table up front
    assert!(!d.capabilities().needs_lock_all_tables());
}

#[test]
fn test_table_migration_script() {
    let statements = dialect().statements();
    let keys = KeyFields::none()
        .technical_key("customer_tk")
        .primary_key("customer_id")
        .use_autoinc(true);

    let script = [
        statements.add_column("customers", &integer("customer_tk", 9), &keys, true),
        statements.add_column(
            "customers",
            &ColumnDescriptor::new("created", LogicalType::Timestamp),
            &keys,
            true,
        ),
        statements.add_column(
            "customers",
            &ColumnDescriptor::new("vip", LogicalType::Boolean),
            &keys,
            true,
        ),
        statements.modify_column("customers", &string("name", 80), &keys, false),
        statements.drop_column("customers", &string("fax", 20)),
        statements.drop_table_if_exists("customers_old"),
    ];

    assert_eq!(
        script,
        [
            "ALTER TABLE customers ADD customer_tk BIGSERIAL;",
            "ALTER TABLE customers ADD created TIMESTAMP;",
            "ALTER TABLE customers ADD vip CHAR(1);",
            "ALTER TABLEcustomersALTERname VARCHAR(80)",
            "ALTER TABLE customers DROP COLUMN fax\n",
            "DROP TABLE IF EXISTS customers_old",
        ]
    );
}

#[test]
fn test_probe_queries_return_no_rows() {
    let statements = dialect().statements();
    let limit = statements.limit_clause(10);
    let probe = statements.select_all_for_structure_probe("etl.orders");
    assert!(probe.ends_with("WHERE 1=0"));
    assert_eq!(format!("{probe}{limit}"), "SELECT * FROM etl.orders WHERE 1=0 LIMIT 10");
}

#[test]
fn test_index_query_quotes_table_name() {
    assert_eq!(
        dialect().statements().index_columns_query("O'NEIL"),
        "SELECT * FROM USER_IND_COLUMNS WHERE TABLE_NAME = 'O''NEIL'"
    );
}

mod support;
use support::*;

use quarry_core::stmt::Value;
use quarry_schema_loader::{vendor::Ingres, ColumnDescriptor, ConstraintDescriptor, SchemaLoader};

use pretty_assertions::assert_eq;

#[tokio::test]
async fn reads_columns_from_iicolumns() {
    init_logging();

    let catalog = FakeCatalog::new().respond(
        "FROM iicolumns",
        vec![
            row([
                s("dba       "),
                s("orders    "),
                s("id  "),
                s("N"),
                s("INTEGER"),
                Value::Null,
                Value::I32(8),
                Value::I32(0),
            ]),
            row([
                s("dba"),
                s("orders"),
                s("total"),
                s("Y"),
                s("DECIMAL"),
                s("0"),
                s("10"),
                s("2"),
            ]),
            row([
                s("dba"),
                s("orders"),
                s("placed"),
                s("Y"),
                s("date"),
                Value::Null,
                Value::I32(12),
                Value::Null,
            ]),
        ],
    );

    let columns = Ingres.read_columns(&catalog, "shop").await.unwrap();

    assert_eq!(
        columns[0],
        ColumnDescriptor {
            schema: "dba".to_string(),
            table: "orders".to_string(),
            column: "id".to_string(),
            nullable: false,
            declared_type: "INTEGER".to_string(),
            default_value: None,
            length: Some(8),
            scale: Some(0),
            full_type: "INTEGER(8)".to_string(),
        }
    );

    assert!(columns[1].nullable);
    assert_eq!(columns[1].default_value.as_deref(), Some("0"));
    assert_eq!(columns[1].full_type, "DECIMAL(10, 2)");
    assert_eq!(columns[2].full_type, "date");

    let queries = catalog.queries.lock().unwrap();
    assert!(queries[0].contains("t.table_owner <> '$ingres'"));
    assert!(queries[0].contains("ORDER BY c.column_sequence"));
}

#[tokio::test]
async fn reads_primary_and_foreign_keys() {
    let catalog = FakeCatalog::new().respond(
        "FROM iikeys",
        vec![
            row([
                s("PRIMARY"),
                s("dba"),
                s("orders"),
                s("id"),
                Value::Null,
                Value::Null,
                Value::Null,
            ]),
            row([
                s("fk_orders_customer      "),
                s("dba"),
                s("orders"),
                s("customer_id"),
                s("dba   "),
                s("customers   "),
                s("id   "),
            ]),
        ],
    );

    let constraints = Ingres.read_constraints(&catalog, "shop").await.unwrap();

    assert!(constraints[0].is_primary_key());
    assert!(!constraints[0].is_foreign_key());
    assert_eq!(constraints[0].to_string(), "orders PK");

    assert_eq!(
        constraints[1],
        ConstraintDescriptor {
            constraint_name: "fk_orders_customer".to_string(),
            schema: "dba".to_string(),
            table: "orders".to_string(),
            column: "customer_id".to_string(),
            referenced_schema: Some("dba".to_string()),
            referenced_table: Some("customers".to_string()),
            referenced_column: Some("id".to_string()),
        }
    );
    assert_eq!(constraints[1].to_string(), "fk_orders_customer");
}

#[tokio::test]
async fn malformed_row_is_an_error() {
    let catalog = FakeCatalog::new().respond("FROM iicolumns", vec![row([s("dba"), s("orders")])]);

    let err = Ingres.read_columns(&catalog, "shop").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "catalog row has 2 columns; column 4 requested"
    );
}

use sqlforge::prelude::*;

fn invoices() -> TableSchema {
    TableSchema::builder("invoices")
        .column(Column::typed::<i64>("id").primary_key().autoincrement())
        .column(
            Column::typed::<String>("number")
                .unique()
                .collation(Collation::NoCase),
        )
        .column(Column::typed::<i64>("customer_id"))
        .column(Column::typed::<i64>("region_id"))
        .column(Column::typed::<Option<String>>("memo"))
        .foreign_key(
            ForeignKey::new(["customer_id", "region_id"])
                .references("customers", ["id", "region_id"])
                .on_delete(ReferentialAction::Cascade)
                .on_update(ReferentialAction::Restrict),
        )
        .build()
        .unwrap()
}

#[test]
fn test_create_table_line_order() {
    let sql = create_table(&invoices(), &CreateTableOptions::new()).unwrap();
    let lines: Vec<&str> = sql.lines().collect();

    assert_eq!(lines[0], "CREATE TABLE `invoices` (");
    assert_eq!(lines[1], "\t`id` INTEGER PRIMARY KEY AUTOINCREMENT,");
    assert_eq!(lines[2], "\t`number` TEXT UNIQUE COLLATE NOCASE NOT NULL,");
    assert_eq!(lines[3], "\t`customer_id` INTEGER NOT NULL,");
    assert_eq!(lines[4], "\t`region_id` INTEGER NOT NULL,");
    assert_eq!(lines[5], "\t`memo` TEXT,");
    assert_eq!(
        lines[6],
        "\tFOREIGN KEY(`customer_id`, `region_id`) REFERENCES `customers`(`id`, `region_id`) ON UPDATE RESTRICT ON DELETE CASCADE"
    );
    assert_eq!(lines[7], ");");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_composite_key_is_table_level() {
    let schema = TableSchema::builder("tags")
        .column(Column::typed::<i64>("post_id"))
        .column(Column::typed::<String>("tag"))
        .primary_key(["post_id", "tag"])
        .without_rowid()
        .build()
        .unwrap();

    let sql = create_table(&schema, &CreateTableOptions::new().strict()).unwrap();
    assert!(!sql.contains(" PRIMARY KEY,"));
    assert!(sql.contains("\tPRIMARY KEY(`post_id`, `tag`)\n"));
    assert!(sql.ends_with(") WITHOUT ROWID STRICT;"));
}

#[test]
fn test_unsupported_type_produces_no_sql() {
    let schema = TableSchema::builder("metrics")
        .column(Column::typed::<f32>("ratio"))
        .build()
        .unwrap();

    let err = create_table(&schema, &CreateTableOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type `f32` for ratio");
}

#[test]
fn test_drop_table_is_unconditional() {
    assert_eq!(drop_table(&invoices()), "DROP TABLE IF EXISTS `invoices`;");
}

#[test]
fn test_entity_schema_drives_ddl() {
    struct Invoice;

    impl Entity for Invoice {
        fn table_schema() -> TableSchema {
            invoices()
        }
    }

    let sql = create_table(schema_of::<Invoice>(), &CreateTableOptions::new()).unwrap();
    assert!(sql.starts_with("CREATE TABLE `invoices`"));
}

#[test]
fn test_builder_errors_convert() {
    fn build() -> sqlforge::Result<TableSchema> {
        Ok(TableSchema::builder("t")
            .column(Column::typed::<i64>("a"))
            .unique("uq", ["b"])
            .build()?)
    }

    assert!(matches!(
        build(),
        Err(SqlForgeError::Schema(SchemaError::UnknownColumn { .. }))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_schema_json_roundtrip_compiles_identically() {
    let schema = invoices();
    let json = serde_json::to_string(&schema).unwrap();
    let parsed: TableSchema = serde_json::from_str(&json).unwrap();

    let options = CreateTableOptions::new();
    assert_eq!(
        create_table(&parsed, &options).unwrap(),
        create_table(&schema, &options).unwrap()
    );
}

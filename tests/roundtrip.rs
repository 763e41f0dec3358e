#![cfg(feature = "rusqlite")]

use rusqlite::Connection;
use sqlforge::prelude::*;

fn products() -> TableSchema {
    TableSchema::builder("products")
        .column(Column::typed::<i64>("id").primary_key().autoincrement())
        .column(Column::typed::<String>("name").collation(Collation::NoCase))
        .column(Column::typed::<f64>("price"))
        .column(Column::typed::<bool>("in_stock").default_value(ColumnDefault::boolean(true)))
        .column(Column::typed::<char>("grade"))
        .column(Column::typed::<Option<i32>>("shelf"))
        .build()
        .unwrap()
}

fn seeded() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    let schema = products();
    conn.execute_batch(&create_table(&schema, &CreateTableOptions::new().strict()).unwrap())
        .unwrap();

    let rows: [(&str, f64, bool, char, Option<i32>); 4] = [
        ("apple", 1.25, true, 'A', Some(3)),
        ("Banana", 0.5, true, 'B', None),
        ("cherry", 7.0, false, 'A', Some(1)),
        ("durian", 12.0, true, 'C', None),
    ];
    for (name, price, in_stock, grade, shelf) in rows {
        let mut command = Command::new(&conn);
        let values = [
            command.bind(Value::from(name)),
            command.bind(Value::from(price)),
            command.bind(Value::from(in_stock)),
            command.bind(Value::from(grade)),
            command.bind(Value::from(shelf)),
        ]
        .map(|p| p.to_string())
        .join(", ");
        command
            .execute(&format!(
                "INSERT INTO products (name, price, in_stock, grade, shelf) VALUES ({values})"
            ))
            .unwrap();
    }
    conn
}

#[test]
fn test_generated_ddl_executes() {
    let conn = seeded();
    let count: i64 = conn
        .query_row("SELECT count(*) FROM products", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 4);

    conn.execute_batch(&drop_table(&products())).unwrap();
    conn.execute_batch(&drop_table(&products())).unwrap();
}

#[test]
fn test_bound_predicate_selects_rows() {
    let conn = seeded();
    let mut command = Command::new(&conn);

    let predicate = Predicate::new()
        .group(ClauseGroup::new(Comparison::eq("in_stock", true)).and(Comparison::lt("price", 10.0)))
        .group(Comparison::eq("grade", 'A'))
        .group_logic(Logic::Or);
    let condition = predicate.where_clause(Some(&mut command)).unwrap();

    let records = command
        .query(
            &format!("SELECT * FROM products {condition} ORDER BY id"),
            &products(),
        )
        .unwrap();

    let names: Vec<&Value<'static>> = records.iter().filter_map(|r| r.get("name")).collect();
    assert_eq!(
        names,
        [&Value::from("apple".to_string()), &Value::from("Banana".to_string()), &Value::from("cherry".to_string())]
    );
}

#[test]
fn test_materializer_returns_typed_values() {
    let conn = seeded();
    let mut command = Command::new(&conn);
    let condition = Predicate::from(Comparison::like("name", "banana"))
        .where_clause(Some(&mut command))
        .unwrap();

    let records = command
        .query(&format!("SELECT * FROM products {condition}"), &products())
        .unwrap();
    assert_eq!(records.len(), 1);

    let banana = &records[0];
    assert_eq!(banana.get("id"), Some(&Value::Integer(2)));
    assert_eq!(banana.get("price"), Some(&Value::Real(0.5)));
    assert_eq!(banana.get("in_stock"), Some(&Value::Bool(true)));
    assert_eq!(banana.get("grade"), Some(&Value::Char('B')));
    assert_eq!(banana.get("shelf"), Some(&Value::Null));
}

#[test]
fn test_in_list_and_null_checks() {
    let conn = seeded();
    let command = Command::new(&conn);
    let condition = Predicate::new()
        .group(Comparison::is_in("grade", ['A', 'C']))
        .group(Comparison::is_null("shelf"))
        .to_sql()
        .unwrap();

    let records = command
        .query(&format!("SELECT * FROM products WHERE {condition}"), &products())
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some(&Value::from("durian".to_string())));
}

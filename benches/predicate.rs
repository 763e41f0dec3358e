use criterion::{Criterion, criterion_group, criterion_main};
use sqlforge::prelude::*;
use std::hint::black_box;

fn schema() -> TableSchema {
    TableSchema::builder("orders")
        .column(Column::typed::<i64>("id").primary_key().autoincrement())
        .column(Column::typed::<i64>("customer_id"))
        .column(Column::typed::<String>("status").collation(Collation::NoCase))
        .column(Column::typed::<f64>("total"))
        .column(Column::typed::<Option<String>>("note"))
        .foreign_key(ForeignKey::new(["customer_id"]).references("customers", ["id"]))
        .build()
        .unwrap()
}

fn predicate() -> Predicate<'static> {
    Predicate::new()
        .group(
            ClauseGroup::new(Comparison::eq("status", "open"))
                .or(Comparison::eq("status", "held")),
        )
        .group(Comparison::between("total", 10.0, 500.0))
        .group(Comparison::is_in("customer_id", [1, 2, 3, 5, 8, 13]))
        .group(Comparison::is_not_null("note"))
}

fn compile(c: &mut Criterion) {
    let predicate = predicate();
    let mut group = c.benchmark_group("predicate");

    group.bench_function("inline", |b| {
        b.iter(|| black_box(&predicate).to_sql().unwrap());
    });

    group.bench_function("bound", |b| {
        b.iter(|| {
            let mut params = ParamList::new();
            let sql = black_box(&predicate).compile(Some(&mut params)).unwrap();
            (sql, params)
        });
    });

    group.finish();
}

fn ddl(c: &mut Criterion) {
    let schema = schema();
    let options = CreateTableOptions::new().if_not_exists();

    c.bench_function("create_table", |b| {
        b.iter(|| create_table(black_box(&schema), &options).unwrap());
    });
}

criterion_group!(benches, compile, ddl);
criterion_main!(benches);

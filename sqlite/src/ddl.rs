//! CREATE TABLE / DROP TABLE generation from a [`TableSchema`]

use sqlforge_core::{Result, SqlForgeError, escape_identifier};
use sqlforge_types::sqlite::SQLiteType;
use sqlforge_types::sqlite::ddl::{Column, ColumnDefault, ForeignKey, TableSchema};

/// Options for [`create_table`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateTableOptions {
    pub if_not_exists: bool,
    pub temporary: bool,
    pub strict: bool,
}

impl CreateTableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `CREATE TABLE IF NOT EXISTS`
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// `CREATE TEMP TABLE`
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Append the `STRICT` table option
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

/// Generate the CREATE TABLE statement for `schema`.
///
/// Fails without producing any text if a column or a column default has a
/// type with no storage class, or if `strict` is requested for a table with
/// a NUMERIC column (STRICT tables do not accept that type name).
///
/// ```
/// use sqlforge_sqlite::ddl::{CreateTableOptions, create_table};
/// use sqlforge_types::sqlite::ddl::{Column, TableSchema};
///
/// let users = TableSchema::builder("users")
///     .column(Column::typed::<i64>("id").primary_key().autoincrement())
///     .column(Column::typed::<Option<String>>("email").unique())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     create_table(&users, &CreateTableOptions::new()).unwrap(),
///     "CREATE TABLE `users` (\n\t`id` INTEGER PRIMARY KEY AUTOINCREMENT,\n\t`email` TEXT UNIQUE\n);"
/// );
/// ```
pub fn create_table(schema: &TableSchema, options: &CreateTableOptions) -> Result<String> {
    if options.strict {
        for column in &schema.columns {
            if storage_class(column)? == SQLiteType::Numeric {
                return Err(SqlForgeError::UnsupportedType {
                    column: column.name().to_string(),
                    category: column.category(),
                });
            }
        }
    }

    let mut sql = String::from("CREATE ");
    if options.temporary {
        sql.push_str("TEMP ");
    }
    sql.push_str("TABLE ");
    if options.if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    sql.push_str(&escape_identifier(schema.name()));
    sql.push_str(" (\n");

    let mut lines = Vec::new();
    let single_pk = schema.has_single_primary_key();

    // Column definitions
    for column in &schema.columns {
        let inline_pk = single_pk && column.is_primary_key();
        lines.push(format!("\t{}", column_sql(column, inline_pk)?));
    }

    // Composite primary key
    if !single_pk && !schema.composite_primary_key.is_empty() {
        lines.push(format!(
            "\tPRIMARY KEY({})",
            column_list(&schema.composite_primary_key)
        ));
    }

    // Multi-column unique constraints
    for unique in &schema.unique_constraints {
        lines.push(format!("\tUNIQUE({})", column_list(&unique.columns)));
    }

    // Foreign keys
    for fk in &schema.foreign_keys {
        lines.push(format!("\t{}", foreign_key_sql(fk)));
    }

    sql.push_str(&lines.join(",\n"));
    sql.push_str("\n)");

    // Table options
    if schema.without_rowid {
        sql.push_str(" WITHOUT ROWID");
    }
    if options.strict {
        sql.push_str(" STRICT");
    }

    sql.push(';');
    sqlforge_core::sqlforge_trace_sql!("create_table", &sql, 0);
    Ok(sql)
}

/// `DROP TABLE IF EXISTS <table>;`
pub fn drop_table(schema: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {};", escape_identifier(schema.name()))
}

fn storage_class(column: &Column) -> Result<SQLiteType> {
    column
        .column_type
        .sqlite_type()
        .ok_or_else(|| SqlForgeError::UnsupportedType {
            column: column.name().to_string(),
            category: column.category(),
        })
}

fn column_sql(column: &Column, inline_pk: bool) -> Result<String> {
    let sql_type = storage_class(column)?;
    let mut sql = format!("{} {}", escape_identifier(column.name()), sql_type);

    if inline_pk {
        sql.push_str(" PRIMARY KEY");
    }

    if column.is_autoincrement() && sql_type.supports_autoincrement() {
        sql.push_str(" AUTOINCREMENT");
    } else if column.is_unique() {
        sql.push_str(" UNIQUE");
    }

    if sql_type.supports_collation()
        && let Some(collation) = column.collation.to_sql()
    {
        sql.push_str(" COLLATE ");
        sql.push_str(&collation);
    }

    if column.required || (!inline_pk && !column.column_type.nullable) {
        sql.push_str(" NOT NULL");
    }

    if let Some(default) = &column.default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&default_sql(column, default)?);
    }

    Ok(sql)
}

// Numeric defaults go in bare; everything else is wrapped in double quotes
// without escaping.
fn default_sql(column: &Column, default: &ColumnDefault) -> Result<String> {
    let sql_type = default
        .category
        .to_sqlite_type()
        .ok_or_else(|| SqlForgeError::UnsupportedType {
            column: format!("default of {}", column.name()),
            category: default.category,
        })?;

    if sql_type.is_unquoted_default() {
        Ok(default.value.to_string())
    } else {
        Ok(format!("\"{}\"", default.value))
    }
}

fn foreign_key_sql(fk: &ForeignKey) -> String {
    let mut sql = format!(
        "FOREIGN KEY({}) REFERENCES {}({})",
        column_list(&fk.columns),
        escape_identifier(&fk.table_to),
        column_list(&fk.columns_to)
    );

    if !fk.on_update.is_no_action() {
        sql.push_str(" ON UPDATE ");
        sql.push_str(fk.on_update.as_sql());
    }

    if !fk.on_delete.is_no_action() {
        sql.push_str(" ON DELETE ");
        sql.push_str(fk.on_delete.as_sql());
    }

    sql
}

fn column_list<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| escape_identifier(c.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

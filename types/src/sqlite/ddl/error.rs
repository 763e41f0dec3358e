//! Errors raised while building a schema descriptor

use thiserror::Error;

/// A schema descriptor violates one of its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("table name must not be empty")]
    EmptyTableName,

    #[error("table `{table}` has no columns")]
    NoColumns { table: String },

    #[error("column `{column}` is declared twice on table `{table}`")]
    DuplicateColumn { table: String, column: String },

    /// A composite primary key was declared while a column is also flagged as the key
    #[error(
        "table `{table}` declares a composite primary key but column `{column}` is also flagged PRIMARY KEY"
    )]
    ConflictingPrimaryKey { table: String, column: String },

    /// AUTOINCREMENT is only legal on the table's single primary key column
    #[error("column `{column}` on table `{table}` is AUTOINCREMENT but is not the single primary key")]
    AutoincrementOutsidePrimaryKey { table: String, column: String },

    #[error("table `{table}` is WITHOUT ROWID but declares no primary key")]
    WithoutRowidNeedsPrimaryKey { table: String },

    #[error("table `{table}` references unknown column `{column}`")]
    UnknownColumn { table: String, column: String },

    #[error("unique constraint `{name}` on table `{table}` has no columns")]
    EmptyUniqueConstraint { table: String, name: String },

    #[error(
        "foreign key on table `{table}` referencing `{parent}` maps {local} local column(s) onto {referenced} parent column(s)"
    )]
    ForeignKeyArity {
        table: String,
        parent: String,
        local: usize,
        referenced: usize,
    },
}

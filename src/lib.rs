//! # sqlforge
//!
//! Generates SQLite DDL and WHERE fragments from typed schema descriptors and
//! predicate trees, and reads result rows back into typed values.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlforge::prelude::*;
//!
//! # fn main() -> sqlforge::Result<()> {
//! let users = TableSchema::builder("users")
//!     .column(Column::typed::<i64>("id").primary_key().autoincrement())
//!     .column(Column::typed::<String>("name"))
//!     .column(Column::typed::<Option<String>>("email").unique())
//!     .build()?;
//!
//! let ddl = create_table(&users, &CreateTableOptions::new().if_not_exists())?;
//! assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS `users` ("));
//!
//! let mut params = ParamList::new();
//! let condition = Predicate::from(
//!     ClauseGroup::new(Comparison::like("name", "A%")).or(Comparison::is_null("email")),
//! )
//! .where_clause(Some(&mut params))?;
//!
//! assert_eq!(condition, "WHERE (name LIKE @P0 OR email IS NULL)");
//! assert_eq!(params.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature        | Enables                                          |
//! |----------------|--------------------------------------------------|
//! | `chrono`       | date/time values and columns (default)           |
//! | `uuid`         | UUID values and columns (default)                |
//! | `rust-decimal` | decimal values and columns (default)             |
//! | `serde`        | `Serialize`/`Deserialize` on schema descriptors  |
//! | `rusqlite`     | [`sqlite::Command`] for running compiled SQL     |
//! | `tracing`      | `tracing` events for compiled statements         |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for sqlforge operations
pub use sqlforge_core::error::Result;

/// Error types
pub mod error {
    pub use sqlforge_core::error::SqlForgeError;
    pub use sqlforge_types::sqlite::ddl::SchemaError;
}

/// Schema descriptor types: tables, columns, keys and type classification.
pub use sqlforge_types as types;

/// Values, literal formatting, identifier escaping and parameter sinks.
pub mod core {
    pub use sqlforge_core::{
        IdentQuote, Param, ParamList, ParameterSink, Placeholder, PlaceholderStyle, RawLiteral,
        Value, escape_identifier, format_literal, ident, literal, params,
    };
}

/// SQLite compilers: predicates, DDL, row materialization.
pub use sqlforge_sqlite as sqlite;

// =============================================================================
// Prelude
// =============================================================================

/// Everything needed to describe a table, compile statements and read rows.
pub mod prelude {
    pub use sqlforge_core::{
        IdentQuote, ParamList, ParameterSink, RawLiteral, SqlForgeError, Value,
        escape_identifier, format_literal,
    };
    pub use sqlforge_sqlite::{
        ClauseGroup, CompareValue, Comparison, CreateTableOptions, Entity, FromSQLiteValue, Logic,
        Operator, Predicate, Record, SQLiteValue, create_table, drop_table, materialize, read,
        read_as, schema_of,
    };
    #[cfg(feature = "rusqlite")]
    pub use sqlforge_sqlite::Command;
    pub use sqlforge_types::prelude::*;
}

//! SQLite compilers for sqlforge
//!
//! - [`predicate`]: predicate trees compiled to WHERE fragments
//! - [`ddl`]: CREATE TABLE / DROP TABLE from a schema descriptor
//! - [`row`]: reading stored values back into typed values
//! - [`entity`]: per-type schema cache
//! - [`command`]: running compiled SQL through rusqlite (feature `rusqlite`)

#[cfg(feature = "rusqlite")]
pub mod command;
pub mod ddl;
pub mod entity;
pub mod predicate;
pub mod row;
pub mod values;

#[cfg(feature = "rusqlite")]
pub use command::Command;
pub use ddl::{CreateTableOptions, create_table, drop_table};
pub use entity::{Entity, schema_of};
pub use predicate::{ClauseGroup, CompareValue, Comparison, Logic, Operator, Predicate};
pub use row::{FromSQLiteValue, Record, materialize, read, read_as};
pub use values::SQLiteValue;

//! Shared type definitions for sqlforge
//!
//! This crate is the leaf of the workspace. It describes *what* a table looks
//! like and how Rust types classify into SQLite storage classes; it never
//! renders SQL itself.
//!
//! - SQLite storage classes, type categories and collations in [`sqlite`]
//! - Schema descriptor types and their builder in [`sqlite::ddl`]
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of descriptors
//! - `uuid` - Classify `uuid::Uuid`
//! - `chrono` - Classify chrono date/time types
//! - `rust-decimal` - Classify `rust_decimal::Decimal`

pub mod serde_helpers;
pub mod sqlite;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::sqlite::ddl::{
        Column, ColumnDefault, ColumnType, ForeignKey, ReferentialAction, SchemaError,
        TableSchema, TableSchemaBuilder, UniqueConstraint,
    };
    pub use crate::sqlite::{Collation, SQLiteType, SqlTyped, TypeCategory};
}

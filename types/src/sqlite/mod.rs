//! SQLite type definitions
//!
//! This module provides type definitions for SQLite including:
//!
//! - [`SQLiteType`] - SQLite column storage classes
//! - [`TypeCategory`] - Rust type classification for SQLite mapping
//! - [`Collation`] - Text collating sequences
//! - [`SqlTyped`] - Static classification of Rust types

mod collation;
pub mod ddl;
mod sql_type;
mod type_category;

pub use collation::Collation;
pub use sql_type::SQLiteType;
pub use type_category::{SqlTyped, TypeCategory};

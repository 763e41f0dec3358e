//! SQLite schema descriptor types
//!
//! A [`TableSchema`] is built once per entity type through
//! [`TableSchemaBuilder`] and is immutable afterwards:
//!
//! ```
//! use sqlforge_types::sqlite::Collation;
//! use sqlforge_types::sqlite::ddl::{Column, ForeignKey, ReferentialAction, TableSchema};
//!
//! let posts = TableSchema::builder("posts")
//!     .column(Column::typed::<i64>("id").primary_key().autoincrement())
//!     .column(Column::typed::<String>("slug").unique().collation(Collation::NoCase))
//!     .column(Column::typed::<i64>("author_id"))
//!     .foreign_key(
//!         ForeignKey::new(["author_id"])
//!             .references("users", ["id"])
//!             .on_delete(ReferentialAction::Cascade),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(posts.columns.len(), 3);
//! ```

mod column;
mod error;
mod foreign_key;
mod table;
mod unique_constraint;

pub use column::{Column, ColumnDefault, ColumnType};
pub use error::SchemaError;
pub use foreign_key::{ForeignKey, ReferentialAction};
pub use table::{TableSchema, TableSchemaBuilder};
pub use unique_constraint::UniqueConstraint;

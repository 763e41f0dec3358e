use sqlforge_types::sqlite::TypeCategory;
use sqlforge_types::sqlite::ddl::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlForgeError {
    /// A column or default value has no storage class
    #[error("unsupported type `{category}` for {column}")]
    UnsupportedType {
        column: String,
        category: TypeCategory,
    },

    /// A comparison value does not fit its operator, e.g. BETWEEN without a
    /// (lower, upper) pair
    #[error("malformed value for `{field}` {operator}: found {found}")]
    MalformedPredicateValue {
        field: String,
        operator: &'static str,
        found: String,
    },

    /// Schema descriptor violates its invariants
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Error converting a stored value into its destination type
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for sqlforge operations
pub type Result<T> = std::result::Result<T, SqlForgeError>;

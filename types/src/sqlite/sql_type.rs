//! SQLite column type definitions
//!
//! Defines the SQLite storage classes a column can be declared with.

/// Enum representing the SQLite storage classes.
///
/// These correspond to the [SQLite storage classes](https://sqlite.org/datatype3.html#storage_classes_and_datatypes).
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::SQLiteType;
///
/// let int_type = SQLiteType::Integer;
/// assert_eq!(int_type.to_sql_type(), "INTEGER");
/// assert!(int_type.supports_autoincrement());
/// assert!(!SQLiteType::Text.supports_autoincrement());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SQLiteType {
    /// SQLite INTEGER type - stores signed integers up to 8 bytes.
    ///
    /// See: <https://sqlite.org/datatype3.html#integer_datatype>
    Integer,

    /// SQLite TEXT type - stores text in UTF-8, UTF-16BE, or UTF-16LE encoding.
    Text,

    /// SQLite BLOB type - stores binary data exactly as input.
    Blob,

    /// SQLite REAL type - stores 8-byte IEEE floating point numbers.
    Real,

    /// SQLite NUMERIC type - stores values as INTEGER, REAL, or TEXT depending on the value.
    ///
    /// See: <https://sqlite.org/datatype3.html#type_affinity>
    Numeric,
}

impl SQLiteType {
    /// Get the SQL type string for this type
    #[must_use]
    pub const fn to_sql_type(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Real => "REAL",
            Self::Numeric => "NUMERIC",
        }
    }

    /// `AUTOINCREMENT` is only meaningful on an `INTEGER` column.
    #[must_use]
    pub const fn supports_autoincrement(&self) -> bool {
        matches!(self, Self::Integer)
    }

    /// `COLLATE` is only emitted for `TEXT` columns.
    #[must_use]
    pub const fn supports_collation(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Whether literals of this class are written without quotes in a `DEFAULT` clause.
    #[must_use]
    pub const fn is_unquoted_default(&self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }
}

impl core::fmt::Display for SQLiteType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.to_sql_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quoting() {
        assert!(SQLiteType::Integer.is_unquoted_default());
        assert!(SQLiteType::Real.is_unquoted_default());
        assert!(!SQLiteType::Numeric.is_unquoted_default());
        assert!(!SQLiteType::Text.is_unquoted_default());
        assert!(!SQLiteType::Blob.is_unquoted_default());
    }

    #[test]
    fn test_flags() {
        assert!(SQLiteType::Integer.supports_autoincrement());
        assert!(!SQLiteType::Numeric.supports_autoincrement());
        assert!(SQLiteType::Text.supports_collation());
        assert!(!SQLiteType::Blob.supports_collation());
    }
}

//! SQLite type category definitions
//!
//! Provides the classification of Rust types that drives both the storage
//! class chosen for a column and the dispatch used when reading it back.

use super::SQLiteType;

// =============================================================================
// TypeCategory - Rust type classification
// =============================================================================

/// Categorizes Rust types for storage-class mapping and row materialization.
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::{SQLiteType, SqlTyped, TypeCategory};
///
/// let category = <Option<String> as SqlTyped>::CATEGORY;
/// assert_eq!(category, TypeCategory::Text);
/// assert_eq!(category.to_sqlite_type(), Some(SQLiteType::Text));
///
/// // Unsigned integers have no storage class
/// assert_eq!(<u32 as SqlTyped>::CATEGORY.to_sqlite_type(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeCategory {
    /// `bool` - stored as INTEGER 0/1
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `char` - stored as its code point
    Char,
    /// `String`, `&str`
    Text,
    /// `Vec<u8>` and other structured payloads - stored as BLOB
    Object,
    /// `rust_decimal::Decimal`
    Decimal,
    /// Date/time types
    DateTime,
    /// `f64`
    F64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `uuid::Uuid`
    Uuid,
    /// Anything not recognized
    Unknown,
}

impl TypeCategory {
    /// Map this category onto its SQLite storage class.
    ///
    /// Returns `None` for categories with no mapping; callers surface that as
    /// an unsupported-type error.
    #[must_use]
    pub const fn to_sqlite_type(&self) -> Option<SQLiteType> {
        match self {
            TypeCategory::Bool
            | TypeCategory::I8
            | TypeCategory::I16
            | TypeCategory::I32
            | TypeCategory::I64
            | TypeCategory::Char => Some(SQLiteType::Integer),
            TypeCategory::Text => Some(SQLiteType::Text),
            TypeCategory::Object => Some(SQLiteType::Blob),
            TypeCategory::Decimal | TypeCategory::DateTime => Some(SQLiteType::Numeric),
            TypeCategory::F64 => Some(SQLiteType::Real),
            TypeCategory::U8
            | TypeCategory::U16
            | TypeCategory::U32
            | TypeCategory::U64
            | TypeCategory::F32
            | TypeCategory::Uuid
            | TypeCategory::Unknown => None,
        }
    }

    /// Rust-facing name used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TypeCategory::Bool => "bool",
            TypeCategory::I8 => "i8",
            TypeCategory::I16 => "i16",
            TypeCategory::I32 => "i32",
            TypeCategory::I64 => "i64",
            TypeCategory::Char => "char",
            TypeCategory::Text => "text",
            TypeCategory::Object => "object",
            TypeCategory::Decimal => "decimal",
            TypeCategory::DateTime => "datetime",
            TypeCategory::F64 => "f64",
            TypeCategory::U8 => "u8",
            TypeCategory::U16 => "u16",
            TypeCategory::U32 => "u32",
            TypeCategory::U64 => "u64",
            TypeCategory::F32 => "f32",
            TypeCategory::Uuid => "uuid",
            TypeCategory::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SqlTyped - static classification
// =============================================================================

/// Static type classification of a Rust type.
///
/// `Option<T>` keeps the category of `T` and flips [`SqlTyped::NULLABLE`];
/// every other implementor is a non-nullable value type.
pub trait SqlTyped {
    const CATEGORY: TypeCategory;
    const NULLABLE: bool = false;
}

macro_rules! impl_sql_typed {
    ($($ty:ty => $cat:ident),+ $(,)?) => {
        $(
            impl SqlTyped for $ty {
                const CATEGORY: TypeCategory = TypeCategory::$cat;
            }
        )+
    };
}

impl_sql_typed! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    char => Char,
    String => Text,
    &str => Text,
    Vec<u8> => Object,
    &[u8] => Object,
    f64 => F64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
}

impl<T: SqlTyped> SqlTyped for Option<T> {
    const CATEGORY: TypeCategory = T::CATEGORY;
    const NULLABLE: bool = true;
}

#[cfg(feature = "rust-decimal")]
impl SqlTyped for rust_decimal::Decimal {
    const CATEGORY: TypeCategory = TypeCategory::Decimal;
}

#[cfg(feature = "chrono")]
impl SqlTyped for chrono::NaiveDateTime {
    const CATEGORY: TypeCategory = TypeCategory::DateTime;
}

#[cfg(feature = "chrono")]
impl SqlTyped for chrono::NaiveDate {
    const CATEGORY: TypeCategory = TypeCategory::DateTime;
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> SqlTyped for chrono::DateTime<Tz> {
    const CATEGORY: TypeCategory = TypeCategory::DateTime;
}

#[cfg(feature = "uuid")]
impl SqlTyped for uuid::Uuid {
    const CATEGORY: TypeCategory = TypeCategory::Uuid;
}

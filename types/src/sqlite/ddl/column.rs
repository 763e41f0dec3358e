//! SQLite Column descriptor types
//!
//! - [`ColumnType`] - the classified Rust type behind a column
//! - [`ColumnDefault`] - a `DEFAULT` value together with its classification
//! - [`Column`] - the full column descriptor

use std::borrow::Cow;
use std::fmt::Display;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;
use crate::sqlite::{Collation, SQLiteType, SqlTyped, TypeCategory};

// =============================================================================
// Column Type
// =============================================================================

/// The classified property type of a column.
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::TypeCategory;
/// use sqlforge_types::sqlite::ddl::ColumnType;
///
/// let ty = ColumnType::of::<Option<i64>>();
/// assert_eq!(ty.category, TypeCategory::I64);
/// assert!(ty.nullable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnType {
    /// Rust type classification
    pub category: TypeCategory,
    /// Can the property represent an absent value?
    pub nullable: bool,
}

impl ColumnType {
    #[must_use]
    pub const fn new(category: TypeCategory, nullable: bool) -> Self {
        Self { category, nullable }
    }

    /// Classify `T` statically
    #[must_use]
    pub const fn of<T: SqlTyped>() -> Self {
        Self {
            category: T::CATEGORY,
            nullable: T::NULLABLE,
        }
    }

    /// Storage class, or `None` when the category has no mapping
    #[inline]
    #[must_use]
    pub const fn sqlite_type(&self) -> Option<SQLiteType> {
        self.category.to_sqlite_type()
    }
}

// =============================================================================
// Column Default
// =============================================================================

/// A configured `DEFAULT` value.
///
/// The text is emitted as-is; the category decides whether it is quoted.
/// Text is never escaped, so values must not contain `"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDefault {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub value: Cow<'static, str>,
    pub category: TypeCategory,
}

impl ColumnDefault {
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>, category: TypeCategory) -> Self {
        Self {
            value: value.into(),
            category,
        }
    }

    /// Default from a typed value, classified by its Rust type
    #[must_use]
    pub fn of<T: SqlTyped + Display>(value: T) -> Self {
        Self::new(value.to_string(), T::CATEGORY)
    }

    /// Boolean default stored as `1`/`0`
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::new(if value { "1" } else { "0" }, TypeCategory::Bool)
    }
}

// =============================================================================
// Column
// =============================================================================

/// Column descriptor.
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::Collation;
/// use sqlforge_types::sqlite::ddl::{Column, ColumnType};
///
/// let id = Column::new("id", ColumnType::of::<i64>())
///     .primary_key()
///     .autoincrement();
/// let email = Column::new("email", ColumnType::of::<Option<String>>())
///     .unique()
///     .collation(Collation::NoCase);
///
/// assert!(id.is_primary_key());
/// assert!(email.column_type.nullable);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    /// Column name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Classified property type
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub column_type: ColumnType,

    /// Is this column flagged PRIMARY KEY?
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_key: bool,

    /// Is this column UNIQUE?
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique: bool,

    /// Is this column AUTOINCREMENT?
    #[cfg_attr(feature = "serde", serde(default))]
    pub autoincrement: bool,

    /// Collating sequence
    #[cfg_attr(feature = "serde", serde(default))]
    pub collation: Collation,

    /// Explicitly marked NOT NULL
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,

    /// Default value
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<ColumnDefault>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            unique: false,
            autoincrement: false,
            collation: Collation::Default,
            required: false,
            default: None,
        }
    }

    /// Shorthand for `Column::new(name, ColumnType::of::<T>())`
    #[must_use]
    pub fn typed<T: SqlTyped>(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, ColumnType::of::<T>())
    }

    /// Set PRIMARY KEY
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Set UNIQUE
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set AUTOINCREMENT
    #[must_use]
    pub fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }

    /// Set the collating sequence
    #[must_use]
    pub fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Mark NOT NULL explicitly
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value
    #[must_use]
    pub fn default_value(mut self, default: ColumnDefault) -> Self {
        self.default = Some(default);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> TypeCategory {
        self.column_type.category
    }

    #[inline]
    #[must_use]
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[inline]
    #[must_use]
    pub fn is_autoincrement(&self) -> bool {
        self.autoincrement
    }

    #[inline]
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }
}

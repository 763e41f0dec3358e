//! SQLite Foreign Key descriptor types

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_vec_from_strings};

// =============================================================================
// Referential Action
// =============================================================================

/// Foreign key referential action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReferentialAction {
    /// No action (default)
    #[default]
    NoAction,
    /// Restrict deletion
    Restrict,
    /// Cascade changes
    Cascade,
    /// Set to NULL
    SetNull,
    /// Set to default value
    SetDefault,
}

impl ReferentialAction {
    /// Get the SQL representation
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }

    /// `NO ACTION` is SQLite's default, so its clause is omitted
    #[inline]
    #[must_use]
    pub const fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }
}

// =============================================================================
// Foreign Key
// =============================================================================

/// Foreign key descriptor, single- or multi-column.
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::ddl::{ForeignKey, ReferentialAction};
///
/// let fk = ForeignKey::new(["order_id", "line_no"])
///     .references("order_lines", ["order_id", "line_no"])
///     .on_delete(ReferentialAction::Cascade);
///
/// assert_eq!(fk.columns.len(), 2);
/// assert_eq!(fk.table_to, "order_lines");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForeignKey {
    /// Local columns
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_vec_from_strings"))]
    pub columns: Vec<Cow<'static, str>>,

    /// Parent table name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub table_to: Cow<'static, str>,

    /// Parent columns
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_vec_from_strings"))]
    pub columns_to: Vec<Cow<'static, str>>,

    /// ON UPDATE action
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_update: ReferentialAction,

    /// ON DELETE action
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_delete: ReferentialAction,
}

impl ForeignKey {
    /// Create a foreign key over the given local columns
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            table_to: Cow::Borrowed(""),
            columns_to: Vec::new(),
            on_update: ReferentialAction::NoAction,
            on_delete: ReferentialAction::NoAction,
        }
    }

    /// Set the parent table and columns
    #[must_use]
    pub fn references<I, S>(mut self, table: impl Into<Cow<'static, str>>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.table_to = table.into();
        self.columns_to = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set ON UPDATE action
    #[must_use]
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = action;
        self
    }

    /// Set ON DELETE action
    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }
}

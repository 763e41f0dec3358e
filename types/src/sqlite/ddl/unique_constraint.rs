//! SQLite Unique Constraint descriptor types

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_vec_from_strings};

/// Table-level unique constraint over a named set of columns.
///
/// Single-column uniqueness is usually expressed on the column itself with
/// [`Column::unique`](super::Column::unique).
///
/// # Examples
///
/// ```
/// use sqlforge_types::sqlite::ddl::UniqueConstraint;
///
/// let uniq = UniqueConstraint::new("uq_email_tenant", ["email", "tenant_id"]);
/// assert_eq!(uniq.columns.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueConstraint {
    /// Group name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Columns in the unique constraint
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_vec_from_strings"))]
    pub columns: Vec<Cow<'static, str>>,
}

impl UniqueConstraint {
    #[must_use]
    pub fn new<I, S>(name: impl Into<Cow<'static, str>>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_constraint() {
        let uniq = UniqueConstraint::new("uq_slug", ["slug".to_string()]);
        assert_eq!(uniq.name(), "uq_slug");
        assert_eq!(uniq.columns, vec![Cow::<str>::Owned("slug".into())]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let uniq = UniqueConstraint::new("uq", ["a", "b"]);
        let json = serde_json::to_string(&uniq).unwrap();
        let parsed: UniqueConstraint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, uniq);
    }
}

//! Text collating sequences

use std::borrow::Cow;

/// Collating sequence applied to a `TEXT` column.
///
/// See: <https://sqlite.org/datatype3.html#collating_sequences>
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Collation {
    /// No `COLLATE` clause; SQLite falls back to `BINARY`.
    #[default]
    Default,
    /// Byte-wise comparison
    Binary,
    /// ASCII case-insensitive comparison
    NoCase,
    /// Like `BINARY` but ignores trailing spaces
    RTrim,
    /// An application-defined collation registered on the connection
    Custom(Cow<'static, str>),
}

impl Collation {
    /// The collation name as emitted after `COLLATE`, uppercased.
    ///
    /// Returns `None` for [`Collation::Default`].
    #[must_use]
    pub fn to_sql(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::Default => None,
            Self::Binary => Some(Cow::Borrowed("BINARY")),
            Self::NoCase => Some(Cow::Borrowed("NOCASE")),
            Self::RTrim => Some(Cow::Borrowed("RTRIM")),
            Self::Custom(name) => Some(Cow::Owned(name.to_uppercase())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_sql() {
        assert_eq!(Collation::Default.to_sql(), None);
        assert_eq!(Collation::NoCase.to_sql().as_deref(), Some("NOCASE"));
        assert_eq!(
            Collation::Custom("unicode_ci".into()).to_sql().as_deref(),
            Some("UNICODE_CI")
        );
    }
}

//! SQLite storage values as read from a result row

use std::borrow::Cow;
use std::fmt;

/// One of SQLite's five storage classes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SQLiteValue<'a> {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value (borrowed or owned string)
    Text(Cow<'a, str>),
    /// Blob value (borrowed or owned binary data)
    Blob(Cow<'a, [u8]>),
    /// NULL value
    #[default]
    Null,
}

impl<'a> SQLiteValue<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, SQLiteValue::Null)
    }

    /// Storage class name, as SQLite's `typeof()` reports it
    pub fn type_name(&self) -> &'static str {
        match self {
            SQLiteValue::Integer(_) => "integer",
            SQLiteValue::Real(_) => "real",
            SQLiteValue::Text(_) => "text",
            SQLiteValue::Blob(_) => "blob",
            SQLiteValue::Null => "null",
        }
    }

    /// Converts this value to an owned version with 'static lifetime
    pub fn into_owned(self) -> SQLiteValue<'static> {
        match self {
            SQLiteValue::Integer(i) => SQLiteValue::Integer(i),
            SQLiteValue::Real(r) => SQLiteValue::Real(r),
            SQLiteValue::Text(cow) => SQLiteValue::Text(Cow::Owned(cow.into_owned())),
            SQLiteValue::Blob(cow) => SQLiteValue::Blob(Cow::Owned(cow.into_owned())),
            SQLiteValue::Null => SQLiteValue::Null,
        }
    }
}

impl<'a> fmt::Display for SQLiteValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SQLiteValue::Integer(i) => write!(f, "{i}"),
            SQLiteValue::Real(r) => write!(f, "{r}"),
            SQLiteValue::Text(cow) => f.write_str(cow),
            SQLiteValue::Blob(cow) => write!(f, "<{} byte blob>", cow.len()),
            SQLiteValue::Null => f.write_str("NULL"),
        }
    }
}

impl<'a> From<i64> for SQLiteValue<'a> {
    fn from(value: i64) -> Self {
        SQLiteValue::Integer(value)
    }
}

impl<'a> From<f64> for SQLiteValue<'a> {
    fn from(value: f64) -> Self {
        SQLiteValue::Real(value)
    }
}

impl<'a> From<&'a str> for SQLiteValue<'a> {
    fn from(value: &'a str) -> Self {
        SQLiteValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for SQLiteValue<'a> {
    fn from(value: String) -> Self {
        SQLiteValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for SQLiteValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        SQLiteValue::Blob(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for SQLiteValue<'a> {
    fn from(value: Vec<u8>) -> Self {
        SQLiteValue::Blob(Cow::Owned(value))
    }
}

impl<'a, T: Into<SQLiteValue<'a>>> From<Option<T>> for SQLiteValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(SQLiteValue::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// rusqlite implementations
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl<'a> From<rusqlite::types::Value> for SQLiteValue<'a> {
    fn from(value: rusqlite::types::Value) -> Self {
        match value {
            rusqlite::types::Value::Null => SQLiteValue::Null,
            rusqlite::types::Value::Integer(i) => SQLiteValue::Integer(i),
            rusqlite::types::Value::Real(r) => SQLiteValue::Real(r),
            rusqlite::types::Value::Text(s) => SQLiteValue::Text(s.into()),
            rusqlite::types::Value::Blob(b) => SQLiteValue::Blob(b.into()),
        }
    }
}

#[cfg(feature = "rusqlite")]
impl<'a> From<rusqlite::types::ValueRef<'a>> for SQLiteValue<'a> {
    fn from(value: rusqlite::types::ValueRef<'a>) -> Self {
        match value {
            rusqlite::types::ValueRef::Null => SQLiteValue::Null,
            rusqlite::types::ValueRef::Integer(i) => SQLiteValue::Integer(i),
            rusqlite::types::ValueRef::Real(r) => SQLiteValue::Real(r),
            // Borrow if valid UTF-8, otherwise allocate for lossy conversion
            rusqlite::types::ValueRef::Text(items) => match std::str::from_utf8(items) {
                Ok(s) => SQLiteValue::Text(Cow::Borrowed(s)),
                Err(_) => SQLiteValue::Text(String::from_utf8_lossy(items).into_owned().into()),
            },
            rusqlite::types::ValueRef::Blob(items) => SQLiteValue::Blob(Cow::Borrowed(items)),
        }
    }
}

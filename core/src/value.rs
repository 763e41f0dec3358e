//! Typed scalar values handed to the compilers

use std::borrow::Cow;
use std::fmt;

//------------------------------------------------------------------------------
// RawLiteral
//------------------------------------------------------------------------------

/// Text embedded verbatim into generated SQL.
///
/// A raw literal bypasses both quoting and parameter binding. It is how
/// placeholders are spliced into comparisons, and how callers embed trusted
/// fragments such as subqueries. Never wrap user input in one.
///
/// ```
/// use sqlforge_core::{RawLiteral, Value, format_literal};
///
/// let sub = RawLiteral::new("(SELECT max(id) FROM users)");
/// assert_eq!(format_literal(&Value::from(sub)), "(SELECT max(id) FROM users)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawLiteral<'a>(Cow<'a, str>);

impl<'a> RawLiteral<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_owned(self) -> RawLiteral<'static> {
        RawLiteral(Cow::Owned(self.0.into_owned()))
    }
}

impl fmt::Display for RawLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A typed scalar value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<'a> {
    /// NULL / absent value
    #[default]
    Null,
    Bool(bool),
    /// Stored as its code point
    Char(char),
    Integer(i64),
    Unsigned(u64),
    Real(f64),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
    #[cfg(feature = "rust-decimal")]
    Decimal(rust_decimal::Decimal),
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    /// Verbatim SQL text
    Raw(RawLiteral<'a>),
}

impl<'a> Value<'a> {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Raw(_))
    }

    /// Short type name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Integer(_) => "integer",
            Value::Unsigned(_) => "unsigned",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            #[cfg(feature = "rust-decimal")]
            Value::Decimal(_) => "decimal",
            #[cfg(feature = "chrono")]
            Value::DateTime(_) => "datetime",
            #[cfg(feature = "uuid")]
            Value::Uuid(_) => "uuid",
            Value::Raw(_) => "raw",
        }
    }

    /// Converts this value to an owned version with 'static lifetime
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(b),
            Value::Char(c) => Value::Char(c),
            Value::Integer(i) => Value::Integer(i),
            Value::Unsigned(u) => Value::Unsigned(u),
            Value::Real(r) => Value::Real(r),
            Value::Text(cow) => Value::Text(Cow::Owned(cow.into_owned())),
            Value::Blob(cow) => Value::Blob(Cow::Owned(cow.into_owned())),
            #[cfg(feature = "rust-decimal")]
            Value::Decimal(d) => Value::Decimal(d),
            #[cfg(feature = "chrono")]
            Value::DateTime(dt) => Value::DateTime(dt),
            #[cfg(feature = "uuid")]
            Value::Uuid(u) => Value::Uuid(u),
            Value::Raw(raw) => Value::Raw(raw.into_owned()),
        }
    }

    /// Render as an SQL literal
    pub fn to_literal(&self) -> String {
        crate::literal::format_literal(self)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

//------------------------------------------------------------------------------
// Conversions
//------------------------------------------------------------------------------

macro_rules! impl_from_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for Value<'a> {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<u64> for Value<'a> {
    fn from(value: u64) -> Self {
        Value::Unsigned(value)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(value: f32) -> Self {
        Value::Real(f64::from(value))
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<char> for Value<'a> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Blob(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(Cow::Owned(value))
    }
}

impl<'a> From<RawLiteral<'a>> for Value<'a> {
    fn from(value: RawLiteral<'a>) -> Self {
        Value::Raw(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "rust-decimal")]
impl<'a> From<rust_decimal::Decimal> for Value<'a> {
    fn from(value: rust_decimal::Decimal) -> Self {
        Value::Decimal(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDateTime> for Value<'a> {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDate> for Value<'a> {
    fn from(value: chrono::NaiveDate) -> Self {
        Value::DateTime(value.and_time(chrono::NaiveTime::default()))
    }
}

// Wall-clock time is kept; the offset is dropped.
#[cfg(feature = "chrono")]
impl<'a, Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value<'a> {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Value::DateTime(value.naive_local())
    }
}

#[cfg(feature = "uuid")]
impl<'a> From<uuid::Uuid> for Value<'a> {
    fn from(value: uuid::Uuid) -> Self {
        Value::Uuid(value)
    }
}

//------------------------------------------------------------------------------
// Database Driver Implementations
//------------------------------------------------------------------------------

#[cfg(feature = "rusqlite")]
impl<'a> rusqlite::ToSql for Value<'a> {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        use rusqlite::types::{ToSqlOutput, Value as Owned, ValueRef};

        let output = match self {
            Value::Null => ToSqlOutput::Owned(Owned::Null),
            Value::Bool(b) => ToSqlOutput::Owned(Owned::Integer(i64::from(*b))),
            Value::Char(c) => ToSqlOutput::Owned(Owned::Integer(i64::from(u32::from(*c)))),
            Value::Integer(i) => ToSqlOutput::Owned(Owned::Integer(*i)),
            Value::Unsigned(u) => {
                let i = i64::try_from(*u)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                ToSqlOutput::Owned(Owned::Integer(i))
            }
            Value::Real(r) => ToSqlOutput::Owned(Owned::Real(*r)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b.as_ref())),
            #[cfg(feature = "rust-decimal")]
            Value::Decimal(d) => ToSqlOutput::Owned(Owned::Text(d.to_string())),
            #[cfg(feature = "chrono")]
            Value::DateTime(dt) => ToSqlOutput::Owned(Owned::Text(
                dt.format(crate::literal::DATETIME_FORMAT).to_string(),
            )),
            #[cfg(feature = "uuid")]
            Value::Uuid(u) => ToSqlOutput::Owned(Owned::Text(u.hyphenated().to_string())),
            Value::Raw(raw) => ToSqlOutput::Borrowed(ValueRef::Text(raw.as_str().as_bytes())),
        };
        Ok(output)
    }
}

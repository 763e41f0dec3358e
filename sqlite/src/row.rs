//! Row materialization
//!
//! Turns storage values read from a result row back into typed [`Value`]s,
//! driven by each column's [`TypeCategory`]. The typed path,
//! [`FromSQLiteValue`], converts straight into a Rust type.

use std::borrow::Cow;

use sqlforge_core::{Result, SqlForgeError, Value};
use sqlforge_types::sqlite::TypeCategory;
use sqlforge_types::sqlite::ddl::TableSchema;

use crate::values::SQLiteValue;

/// Trait for types that can be converted from SQLite values.
///
/// SQLite has 5 storage classes: NULL, INTEGER, REAL, TEXT, BLOB. Implement
/// the conversions that make sense for your type and return
/// [`SqlForgeError::Conversion`] for the rest.
pub trait FromSQLiteValue: Sized {
    /// Convert from a 64-bit integer value
    fn from_sqlite_integer(value: i64) -> Result<Self>;

    /// Convert from a text/string value
    fn from_sqlite_text(value: &str) -> Result<Self>;

    /// Convert from a real/float value
    fn from_sqlite_real(value: f64) -> Result<Self>;

    /// Convert from a blob/binary value
    fn from_sqlite_blob(value: &[u8]) -> Result<Self>;

    /// Convert from a NULL value (default returns error)
    fn from_sqlite_null() -> Result<Self> {
        Err(SqlForgeError::Conversion("unexpected NULL value".into()))
    }

    /// Dispatch on the storage class of `value`
    fn from_sqlite_value(value: &SQLiteValue<'_>) -> Result<Self> {
        match value {
            SQLiteValue::Null => Self::from_sqlite_null(),
            SQLiteValue::Integer(i) => Self::from_sqlite_integer(*i),
            SQLiteValue::Real(r) => Self::from_sqlite_real(*r),
            SQLiteValue::Text(s) => Self::from_sqlite_text(s),
            SQLiteValue::Blob(b) => Self::from_sqlite_blob(b),
        }
    }
}

/// Typed read of a single storage value
pub fn read_as<T: FromSQLiteValue>(value: &SQLiteValue<'_>) -> Result<T> {
    T::from_sqlite_value(value)
}

fn conversion(message: String) -> SqlForgeError {
    SqlForgeError::Conversion(message)
}

fn checked_real_to_int<T>(value: f64, type_name: &str) -> Result<T>
where
    T: TryFrom<i128>,
    <T as TryFrom<i128>>::Error: std::fmt::Display,
{
    if !value.is_finite() {
        return Err(conversion(format!(
            "cannot convert non-finite REAL {value} to {type_name}"
        )));
    }

    if value % 1.0 != 0.0 {
        return Err(conversion(format!(
            "cannot convert non-integer REAL {value} to {type_name}"
        )));
    }

    if value < i128::MIN as f64 || value > i128::MAX as f64 {
        return Err(conversion(format!("REAL {value} out of range for {type_name}")));
    }

    let int_value = value as i128;
    int_value
        .try_into()
        .map_err(|e| conversion(format!("REAL {value} out of range for {type_name}: {e}")))
}

// =============================================================================
// Primitive implementations
// =============================================================================

macro_rules! impl_from_sqlite_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromSQLiteValue for $ty {
                fn from_sqlite_integer(value: i64) -> Result<Self> {
                    value.try_into().map_err(|e| {
                        conversion(format!("i64 {} out of range for {}: {}", value, stringify!($ty), e))
                    })
                }

                fn from_sqlite_text(value: &str) -> Result<Self> {
                    value.trim().parse().map_err(|e| {
                        conversion(format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e))
                    })
                }

                fn from_sqlite_real(value: f64) -> Result<Self> {
                    checked_real_to_int(value, stringify!($ty))
                }

                fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
                    Err(conversion(concat!("cannot convert BLOB to ", stringify!($ty)).into()))
                }
            }
        )+
    };
}

macro_rules! impl_from_sqlite_value_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromSQLiteValue for $ty {
                fn from_sqlite_integer(value: i64) -> Result<Self> {
                    Ok(value as $ty)
                }

                fn from_sqlite_text(value: &str) -> Result<Self> {
                    value.trim().parse().map_err(|e| {
                        conversion(format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e))
                    })
                }

                fn from_sqlite_real(value: f64) -> Result<Self> {
                    Ok(value as $ty)
                }

                fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
                    Err(conversion(concat!("cannot convert BLOB to ", stringify!($ty)).into()))
                }
            }
        )+
    };
}

impl_from_sqlite_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_from_sqlite_value_float!(f32, f64);

impl FromSQLiteValue for bool {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        Ok(value != 0)
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(conversion(format!("cannot parse '{value}' as bool"))),
        }
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        Ok(value != 0.0)
    }

    fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
        Err(conversion("cannot convert BLOB to bool".into()))
    }
}

// Chars are stored as their code point.
impl FromSQLiteValue for char {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| conversion(format!("{value} is not a valid char code point")))
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(conversion(format!("cannot read '{value}' as a single char"))),
        }
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        Self::from_sqlite_integer(checked_real_to_int(value, "char")?)
    }

    fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
        Err(conversion("cannot convert BLOB to char".into()))
    }
}

impl FromSQLiteValue for String {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_sqlite_blob(value: &[u8]) -> Result<Self> {
        String::from_utf8(value.to_vec())
            .map_err(|e| conversion(format!("invalid UTF-8 in BLOB: {e}")))
    }
}

impl FromSQLiteValue for Vec<u8> {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        Ok(value.to_le_bytes().to_vec())
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        Ok(value.as_bytes().to_vec())
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        Ok(value.to_le_bytes().to_vec())
    }

    fn from_sqlite_blob(value: &[u8]) -> Result<Self> {
        Ok(value.to_vec())
    }
}

impl<T: FromSQLiteValue> FromSQLiteValue for Option<T> {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        T::from_sqlite_integer(value).map(Some)
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        T::from_sqlite_text(value).map(Some)
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        T::from_sqlite_real(value).map(Some)
    }

    fn from_sqlite_blob(value: &[u8]) -> Result<Self> {
        T::from_sqlite_blob(value).map(Some)
    }

    fn from_sqlite_null() -> Result<Self> {
        Ok(None)
    }
}

#[cfg(feature = "rust-decimal")]
impl FromSQLiteValue for rust_decimal::Decimal {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        Ok(rust_decimal::Decimal::from(value))
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|e| conversion(format!("cannot parse '{value}' as Decimal: {e}")))
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        rust_decimal::Decimal::try_from(value)
            .map_err(|e| conversion(format!("REAL {value} out of range for Decimal: {e}")))
    }

    fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
        Err(conversion("cannot convert BLOB to Decimal".into()))
    }
}

#[cfg(feature = "chrono")]
impl FromSQLiteValue for chrono::NaiveDateTime {
    fn from_sqlite_integer(value: i64) -> Result<Self> {
        chrono::DateTime::from_timestamp(value, 0)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| conversion(format!("timestamp {value} out of range")))
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        const FORMATS: [&str; 2] = [sqlforge_core::literal::DATETIME_FORMAT, "%Y-%m-%d %H:%M:%S%.f"];
        FORMATS
            .iter()
            .find_map(|format| chrono::NaiveDateTime::parse_from_str(value, format).ok())
            .ok_or_else(|| conversion(format!("cannot parse '{value}' as a date/time")))
    }

    fn from_sqlite_real(value: f64) -> Result<Self> {
        Self::from_sqlite_integer(checked_real_to_int(value, "NaiveDateTime")?)
    }

    fn from_sqlite_blob(_value: &[u8]) -> Result<Self> {
        Err(conversion("cannot convert BLOB to NaiveDateTime".into()))
    }
}

#[cfg(feature = "uuid")]
impl FromSQLiteValue for uuid::Uuid {
    fn from_sqlite_integer(_value: i64) -> Result<Self> {
        Err(conversion("cannot convert INTEGER to Uuid".into()))
    }

    fn from_sqlite_text(value: &str) -> Result<Self> {
        uuid::Uuid::parse_str(value)
            .map_err(|e| conversion(format!("cannot parse '{value}' as Uuid: {e}")))
    }

    fn from_sqlite_real(_value: f64) -> Result<Self> {
        Err(conversion("cannot convert REAL to Uuid".into()))
    }

    fn from_sqlite_blob(value: &[u8]) -> Result<Self> {
        uuid::Uuid::from_slice(value).map_err(|e| conversion(format!("invalid Uuid BLOB: {e}")))
    }
}

// =============================================================================
// Category-driven reads
// =============================================================================

/// Read `value` as a column of `category`.
///
/// NULL reads as [`Value::Null`] for every category. Categories without a
/// dedicated reader come back as their storage class, uncoerced.
///
/// ```
/// use sqlforge_core::Value;
/// use sqlforge_sqlite::row::read;
/// use sqlforge_sqlite::values::SQLiteValue;
/// use sqlforge_types::sqlite::TypeCategory;
///
/// assert_eq!(read(&SQLiteValue::Integer(1), TypeCategory::Bool).unwrap(), Value::Bool(true));
/// assert_eq!(read(&SQLiteValue::Integer(65), TypeCategory::Char).unwrap(), Value::Char('A'));
/// assert!(read(&SQLiteValue::Integer(300), TypeCategory::U8).is_err());
/// ```
pub fn read(value: &SQLiteValue<'_>, category: TypeCategory) -> Result<Value<'static>> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    let typed = match category {
        TypeCategory::U8 => Value::from(read_as::<u8>(value)?),
        TypeCategory::I16 => Value::from(read_as::<i16>(value)?),
        TypeCategory::I32 => Value::from(read_as::<i32>(value)?),
        TypeCategory::I64 => Value::from(read_as::<i64>(value)?),
        TypeCategory::Bool => Value::from(read_as::<bool>(value)?),
        #[cfg(feature = "rust-decimal")]
        TypeCategory::Decimal => Value::from(read_as::<rust_decimal::Decimal>(value)?),
        TypeCategory::F64 => Value::from(read_as::<f64>(value)?),
        TypeCategory::Char => Value::from(read_as::<char>(value)?),
        _ => read_generic(value),
    };
    Ok(typed)
}

fn read_generic(value: &SQLiteValue<'_>) -> Value<'static> {
    match value {
        SQLiteValue::Null => Value::Null,
        SQLiteValue::Integer(i) => Value::Integer(*i),
        SQLiteValue::Real(r) => Value::Real(*r),
        SQLiteValue::Text(s) => Value::Text(Cow::Owned(s.to_string())),
        SQLiteValue::Blob(b) => Value::Blob(Cow::Owned(b.to_vec())),
    }
}

// =============================================================================
// Record
// =============================================================================

/// Materialized row: `(column name, value)` pairs in result order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value<'static>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value<'static>) {
        self.fields.push((name.into(), value));
    }

    /// Value of the first field called `name`
    pub fn get(&self, name: &str) -> Option<&Value<'static>> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<'static>)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn into_fields(self) -> Vec<(String, Value<'static>)> {
        self.fields
    }
}

/// Pair each result column with the schema column of the same name and read
/// it by that column's category. Result columns the schema does not know are
/// skipped.
pub fn materialize<'v, I, N>(schema: &TableSchema, columns: I) -> Result<Record>
where
    I: IntoIterator<Item = (N, SQLiteValue<'v>)>,
    N: AsRef<str>,
{
    let mut record = Record::new();
    for (name, value) in columns {
        let name = name.as_ref();
        let Some(column) = schema.column(name) else {
            continue;
        };
        let value = read(&value, column.category()).map_err(|e| match e {
            SqlForgeError::Conversion(message) => {
                SqlForgeError::Conversion(format!("column `{name}`: {message}"))
            }
            other => other,
        })?;
        record.push(name, value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlforge_types::sqlite::ddl::Column;

    #[test]
    fn test_null_reads_as_null_for_every_category() {
        for category in [
            TypeCategory::U8,
            TypeCategory::I64,
            TypeCategory::Bool,
            TypeCategory::Char,
            TypeCategory::Text,
            TypeCategory::Uuid,
        ] {
            assert_eq!(read(&SQLiteValue::Null, category).unwrap(), Value::Null);
        }
    }

    #[test]
    fn test_dispatch_table() {
        assert_eq!(read(&SQLiteValue::Integer(200), TypeCategory::U8).unwrap(), Value::Integer(200));
        assert_eq!(read(&SQLiteValue::Integer(-5), TypeCategory::I16).unwrap(), Value::Integer(-5));
        assert_eq!(read(&SQLiteValue::from("42"), TypeCategory::I32).unwrap(), Value::Integer(42));
        assert_eq!(read(&SQLiteValue::Real(3.0), TypeCategory::I64).unwrap(), Value::Integer(3));
        assert_eq!(read(&SQLiteValue::Integer(0), TypeCategory::Bool).unwrap(), Value::Bool(false));
        assert_eq!(read(&SQLiteValue::Integer(2), TypeCategory::F64).unwrap(), Value::Real(2.0));
        assert_eq!(read(&SQLiteValue::Integer(0x263A), TypeCategory::Char).unwrap(), Value::Char('☺'));
    }

    #[test]
    fn test_out_of_range_is_a_conversion_error() {
        assert!(matches!(
            read(&SQLiteValue::Integer(70_000), TypeCategory::I16),
            Err(SqlForgeError::Conversion(_))
        ));
        assert!(matches!(
            read(&SQLiteValue::Real(1.5), TypeCategory::I32),
            Err(SqlForgeError::Conversion(_))
        ));
        assert!(matches!(
            read(&SQLiteValue::from("abc"), TypeCategory::F64),
            Err(SqlForgeError::Conversion(_))
        ));
        assert!(read(&SQLiteValue::Integer(0xD800), TypeCategory::Char).is_err());
    }

    #[test]
    fn test_generic_fallback_does_not_coerce() {
        assert_eq!(read(&SQLiteValue::Integer(7), TypeCategory::Text).unwrap(), Value::Integer(7));
        assert_eq!(
            read(&SQLiteValue::from("x"), TypeCategory::Unknown).unwrap(),
            Value::Text(Cow::Owned("x".into()))
        );
        assert_eq!(
            read(&SQLiteValue::from(vec![1_u8, 2]), TypeCategory::Object).unwrap(),
            Value::Blob(Cow::Owned(vec![1, 2]))
        );
    }

    #[test]
    fn test_read_as() {
        assert_eq!(read_as::<Option<i32>>(&SQLiteValue::Null).unwrap(), None);
        assert_eq!(read_as::<String>(&SQLiteValue::Integer(9)).unwrap(), "9");
        assert!(read_as::<i64>(&SQLiteValue::Null).is_err());
    }

    #[test]
    fn test_materialize_skips_unknown_columns() {
        let schema = TableSchema::builder("users")
            .column(Column::typed::<i64>("id").primary_key())
            .column(Column::typed::<bool>("active"))
            .build()
            .unwrap();

        let record = materialize(
            &schema,
            [
                ("id", SQLiteValue::Integer(1)),
                ("extra", SQLiteValue::from("ignored")),
                ("active", SQLiteValue::Integer(1)),
            ],
        )
        .unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("id"), Some(&Value::Integer(1)));
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
        assert_eq!(record.get("extra"), None);
    }

    #[test]
    fn test_materialize_names_failing_column() {
        let schema = TableSchema::builder("t")
            .column(Column::typed::<u8>("small"))
            .build()
            .unwrap();

        let err = materialize(&schema, [("small", SQLiteValue::Integer(-1))]).unwrap_err();
        assert!(matches!(err, SqlForgeError::Conversion(ref m) if m.starts_with("column `small`")));
    }

    #[cfg(feature = "rust-decimal")]
    #[test]
    fn test_decimal() {
        let value = read(&SQLiteValue::from("12.50"), TypeCategory::Decimal).unwrap();
        assert_eq!(value, Value::Decimal(rust_decimal::Decimal::new(1250, 2)));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_datetime_reads_literal_format() {
        let dt = read_as::<chrono::NaiveDateTime>(&SQLiteValue::from("2024/03/09 07:05:30")).unwrap();
        assert_eq!(dt.to_string(), "2024-03-09 07:05:30");
    }
}

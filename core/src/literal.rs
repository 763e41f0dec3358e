//! SQL literal rendering
//!
//! [`format_literal`] turns a [`Value`] into text that can be spliced into a
//! statement. Strings only get their single quotes doubled; nothing else is
//! escaped. Prefer binding through a
//! [`ParameterSink`](crate::params::ParameterSink) whenever one is available.

use std::fmt::Write;

use crate::value::Value;

/// `strftime` pattern for date/time literals: `yyyy/MM/dd HH:mm:ss`, no timezone.
pub const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render `value` as an SQL literal.
///
/// Reals use Rust's default formatting, so `NaN` and the infinities come out
/// as `NaN`, `inf` and `-inf`, which SQLite parses as identifiers. Callers
/// must not pass non-finite floats, or must bind them through a sink instead.
///
/// ```
/// use sqlforge_core::{RawLiteral, Value, format_literal};
///
/// assert_eq!(format_literal(&Value::Null), "NULL");
/// assert_eq!(format_literal(&Value::from("O'Brien")), "'O''Brien'");
/// assert_eq!(format_literal(&Value::from(true)), "1");
/// assert_eq!(format_literal(&Value::from(2.5)), "2.5");
/// assert_eq!(format_literal(&RawLiteral::new("@P0").into()), "@P0");
/// ```
pub fn format_literal(value: &Value<'_>) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Char(c) => u32::from(*c).to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Unsigned(u) => u.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => quote(s),
        Value::Blob(bytes) => {
            let mut out = String::with_capacity(bytes.len() * 2 + 3);
            out.push_str("X'");
            for byte in bytes.iter() {
                let _ = write!(out, "{byte:02X}");
            }
            out.push('\'');
            out
        }
        #[cfg(feature = "rust-decimal")]
        Value::Decimal(d) => d.to_string(),
        #[cfg(feature = "chrono")]
        Value::DateTime(dt) => quote(&dt.format(DATETIME_FORMAT).to_string()),
        #[cfg(feature = "uuid")]
        Value::Uuid(u) => quote(&u.hyphenated().to_string()),
        Value::Raw(raw) => raw.as_str().to_string(),
    }
}

/// Single-quote `s`, doubling every embedded `'`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    let mut position = 0;
    for (i, c) in s.char_indices() {
        if c == '\'' {
            out.push_str(&s[position..i]);
            out.push_str("''");
            position = i + 1;
        }
    }
    out.push_str(&s[position..]);
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RawLiteral;

    /// Undo SQL string literal quoting, failing on a lone quote.
    fn unquote(literal: &str) -> Option<String> {
        let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
        let mut out = String::new();
        let mut chars = body.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.next() != Some('\'') {
                    return None;
                }
            }
            out.push(c);
        }
        Some(out)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(format_literal(&Value::Null), "NULL");
        assert_eq!(format_literal(&Value::from(false)), "0");
        assert_eq!(format_literal(&Value::from(-42_i64)), "-42");
        assert_eq!(format_literal(&Value::from(u64::MAX)), "18446744073709551615");
        assert_eq!(format_literal(&Value::from(0.125_f64)), "0.125");
        assert_eq!(format_literal(&Value::from('A')), "65");
        assert_eq!(format_literal(&Value::from(vec![0x0a_u8, 0xff])), "X'0AFF'");
        assert_eq!(
            format_literal(&Value::from(RawLiteral::new("(SELECT 1)"))),
            "(SELECT 1)"
        );
    }

    #[test]
    fn test_non_finite_reals_render_bare() {
        assert_eq!(format_literal(&Value::from(f64::NAN)), "NaN");
        assert_eq!(format_literal(&Value::from(f64::INFINITY)), "inf");
        assert_eq!(format_literal(&Value::from(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_quote_doubling_round_trips() {
        for input in ["", "plain", "it's", "''", "'leading", "trailing'", "a''b'c", "ünï'cødé"] {
            let literal = format_literal(&Value::from(input));
            assert_eq!(unquote(&literal).as_deref(), Some(input), "{literal}");
        }
    }

    #[test]
    fn test_no_other_escaping() {
        assert_eq!(format_literal(&Value::from("a\"b\\c%")), "'a\"b\\c%'");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_datetime_format() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 30)
            .unwrap();
        assert_eq!(format_literal(&Value::from(dt)), "'2024/03/09 07:05:30'");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_format() {
        let id = uuid::Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(
            format_literal(&Value::from(id)),
            "'67e55044-10b1-426f-9247-bb680e5fe0c8'"
        );
    }

    #[cfg(feature = "rust-decimal")]
    #[test]
    fn test_decimal_unquoted() {
        let d = rust_decimal::Decimal::new(12345, 2);
        assert_eq!(format_literal(&Value::from(d)), "123.45");
    }
}

//! Predicate trees and their compilation to WHERE fragments
//!
//! A [`Predicate`] is an ordered list of [`ClauseGroup`]s joined by a single
//! [`Logic`]. Each group holds one or more [`Comparison`]s, each of which
//! carries the logic joining it to the text before it.
//!
//! ```
//! use sqlforge_core::ParamList;
//! use sqlforge_sqlite::predicate::{ClauseGroup, Comparison, Logic, Predicate};
//!
//! let predicate = Predicate::new()
//!     .group(ClauseGroup::new(Comparison::gt("age", 18)).and(Comparison::like("name", "A%")))
//!     .group(ClauseGroup::new(Comparison::is_null("deleted_at")))
//!     .group_logic(Logic::Or);
//!
//! assert_eq!(
//!     predicate.to_sql().unwrap(),
//!     "(age > 18 AND name LIKE 'A%') OR deleted_at IS NULL"
//! );
//!
//! let mut params = ParamList::new();
//! assert_eq!(
//!     predicate.compile(Some(&mut params)).unwrap(),
//!     "(age > @P0 AND name LIKE @P1) OR deleted_at IS NULL"
//! );
//! assert_eq!(params.len(), 2);
//! ```
//!
//! Field names are emitted verbatim and IN lists are never parameterized;
//! both must come from trusted code.

use std::borrow::Cow;
use std::fmt;

use sqlforge_core::{ParameterSink, RawLiteral, Result, SqlForgeError, Value, format_literal};

//------------------------------------------------------------------------------
// Logic & Operator
//------------------------------------------------------------------------------

/// Boolean connective between comparisons or groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// Separator text including surrounding spaces
    #[inline]
    pub const fn separator(&self) -> &'static str {
        match self {
            Logic::And => " AND ",
            Logic::Or => " OR ",
        }
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Equals,
    NotEqualTo,
    Like,
    NotLike,
    GreaterThan,
    GreaterOrEquals,
    LessThan,
    LessOrEquals,
    In,
    NotIn,
    Between,
    NotBetween,
}

impl Operator {
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::NotEqualTo => "NotEqualTo",
            Operator::Like => "Like",
            Operator::NotLike => "NotLike",
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterOrEquals => "GreaterOrEquals",
            Operator::LessThan => "LessThan",
            Operator::LessOrEquals => "LessOrEquals",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::Between => "Between",
            Operator::NotBetween => "NotBetween",
        }
    }

    /// Is this the negated form, rendered with a leading `NOT`?
    #[inline]
    pub const fn is_negated(&self) -> bool {
        matches!(self, Operator::NotLike | Operator::NotIn | Operator::NotBetween)
    }

    // Infix text of the binary forms; `NotLike` is `NOT field LIKE v`.
    const fn infix(&self) -> &'static str {
        match self {
            Operator::Equals => " = ",
            Operator::NotEqualTo => " <> ",
            Operator::Like | Operator::NotLike => " LIKE ",
            Operator::GreaterThan => " > ",
            Operator::GreaterOrEquals => " >= ",
            Operator::LessThan => " < ",
            Operator::LessOrEquals => " <= ",
            Operator::In | Operator::NotIn => " IN ",
            Operator::Between | Operator::NotBetween => " BETWEEN ",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//------------------------------------------------------------------------------
// CompareValue
//------------------------------------------------------------------------------

/// Right-hand side of a [`Comparison`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CompareValue<'a> {
    #[default]
    Null,
    Scalar(Value<'a>),
    /// BETWEEN bounds (lower, upper)
    Pair(Value<'a>, Value<'a>),
    /// IN list
    Sequence(Vec<Value<'a>>),
    Raw(RawLiteral<'a>),
}

impl<'a> CompareValue<'a> {
    /// `Null` and `Scalar(Value::Null)` both mean "no value"
    pub fn is_null(&self) -> bool {
        matches!(self, CompareValue::Null | CompareValue::Scalar(Value::Null))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, CompareValue::Raw(_) | CompareValue::Scalar(Value::Raw(_)))
    }

    /// `(lower, upper)` if this value can serve as BETWEEN bounds
    pub fn as_pair(&self) -> Option<(&Value<'a>, &Value<'a>)> {
        match self {
            CompareValue::Pair(lower, upper) => Some((lower, upper)),
            CompareValue::Sequence(values) if values.len() == 2 => Some((&values[0], &values[1])),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            CompareValue::Null => "null".to_string(),
            CompareValue::Scalar(value) => format!("scalar {}", value.kind()),
            CompareValue::Pair(..) => "pair".to_string(),
            CompareValue::Sequence(values) => format!("sequence of {}", values.len()),
            CompareValue::Raw(_) => "raw literal".to_string(),
        }
    }
}

impl<'a> From<Value<'a>> for CompareValue<'a> {
    fn from(value: Value<'a>) -> Self {
        CompareValue::Scalar(value)
    }
}

impl<'a> From<RawLiteral<'a>> for CompareValue<'a> {
    fn from(value: RawLiteral<'a>) -> Self {
        CompareValue::Raw(value)
    }
}

impl<'a> From<Vec<Value<'a>>> for CompareValue<'a> {
    fn from(values: Vec<Value<'a>>) -> Self {
        CompareValue::Sequence(values)
    }
}

impl<'a> From<(Value<'a>, Value<'a>)> for CompareValue<'a> {
    fn from((lower, upper): (Value<'a>, Value<'a>)) -> Self {
        CompareValue::Pair(lower, upper)
    }
}

//------------------------------------------------------------------------------
// Comparison
//------------------------------------------------------------------------------

/// `field <operator> value`, plus the logic joining it to its predecessor
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub field: Cow<'a, str>,
    pub operator: Operator,
    pub value: CompareValue<'a>,
    /// Ignored on the first comparison of a group
    pub logic: Logic,
}

impl<'a> Comparison<'a> {
    pub fn new(
        field: impl Into<Cow<'a, str>>,
        operator: Operator,
        value: impl Into<CompareValue<'a>>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            logic: Logic::And,
        }
    }

    fn scalar(field: impl Into<Cow<'a, str>>, operator: Operator, value: impl Into<Value<'a>>) -> Self {
        Self::new(field, operator, CompareValue::Scalar(value.into()))
    }

    pub fn eq(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::Equals, value)
    }

    pub fn ne(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::NotEqualTo, value)
    }

    pub fn like(field: impl Into<Cow<'a, str>>, pattern: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::Like, pattern)
    }

    pub fn not_like(field: impl Into<Cow<'a, str>>, pattern: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::NotLike, pattern)
    }

    pub fn gt(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::GreaterThan, value)
    }

    pub fn gte(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::GreaterOrEquals, value)
    }

    pub fn lt(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::LessThan, value)
    }

    pub fn lte(field: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        Self::scalar(field, Operator::LessOrEquals, value)
    }

    /// `field IS NULL`
    pub fn is_null(field: impl Into<Cow<'a, str>>) -> Self {
        Self::new(field, Operator::Equals, CompareValue::Null)
    }

    /// `NOT field IS NULL`
    pub fn is_not_null(field: impl Into<Cow<'a, str>>) -> Self {
        Self::new(field, Operator::NotEqualTo, CompareValue::Null)
    }

    pub fn is_in<I, V>(field: impl Into<Cow<'a, str>>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        Self::new(field, Operator::In, CompareValue::Sequence(values))
    }

    pub fn not_in<I, V>(field: impl Into<Cow<'a, str>>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        Self::new(field, Operator::NotIn, CompareValue::Sequence(values))
    }

    /// IN over a list that is already formatted, e.g. `"1,2,3"`. The text is
    /// emitted verbatim.
    pub fn in_list(field: impl Into<Cow<'a, str>>, list: impl Into<Cow<'a, str>>) -> Self {
        Self::new(field, Operator::In, Value::Text(list.into()))
    }

    pub fn between(
        field: impl Into<Cow<'a, str>>,
        lower: impl Into<Value<'a>>,
        upper: impl Into<Value<'a>>,
    ) -> Self {
        Self::new(field, Operator::Between, CompareValue::Pair(lower.into(), upper.into()))
    }

    pub fn not_between(
        field: impl Into<Cow<'a, str>>,
        lower: impl Into<Value<'a>>,
        upper: impl Into<Value<'a>>,
    ) -> Self {
        Self::new(field, Operator::NotBetween, CompareValue::Pair(lower.into(), upper.into()))
    }

    /// Set the logic joining this comparison to its predecessor
    pub fn with_logic(mut self, logic: Logic) -> Self {
        self.logic = logic;
        self
    }

    fn malformed(&self) -> SqlForgeError {
        SqlForgeError::MalformedPredicateValue {
            field: self.field.to_string(),
            operator: self.operator.name(),
            found: self.value.describe(),
        }
    }

    fn compile(&self, sink: &mut Option<&mut dyn ParameterSink<'a>>) -> Result<String> {
        let field = self.field.as_ref();
        let not = if self.operator.is_negated() { "NOT " } else { "" };

        if self.value.is_null() {
            return Ok(match self.operator {
                Operator::Equals => format!("{field} IS NULL"),
                Operator::NotEqualTo => format!("NOT {field} IS NULL"),
                _ => String::new(),
            });
        }

        let parameterize = sink.is_some() && !self.value.is_raw();

        match self.operator {
            Operator::Between | Operator::NotBetween => {
                let (lower, upper) = self.value.as_pair().ok_or_else(|| self.malformed())?;
                let (lower, upper) = if parameterize {
                    (operand(lower, sink), operand(upper, sink))
                } else {
                    (format_literal(lower), format_literal(upper))
                };
                Ok(format!("{not}{field} BETWEEN {lower} AND {upper}"))
            }
            Operator::In | Operator::NotIn => {
                let list = match &self.value {
                    CompareValue::Sequence(values) => values
                        .iter()
                        .map(format_literal)
                        .collect::<Vec<_>>()
                        .join(","),
                    CompareValue::Pair(a, b) => format!("{},{}", format_literal(a), format_literal(b)),
                    CompareValue::Scalar(Value::Text(text)) => text.to_string(),
                    CompareValue::Scalar(value) => format_literal(value),
                    CompareValue::Raw(raw) => raw.to_string(),
                    CompareValue::Null => String::new(),
                };
                Ok(format!("{not}{field} IN ({list})"))
            }
            operator => {
                let rhs = match &self.value {
                    CompareValue::Scalar(value) if parameterize => operand(value, sink),
                    CompareValue::Scalar(value) => format_literal(value),
                    CompareValue::Raw(raw) => raw.to_string(),
                    _ => return Err(self.malformed()),
                };
                Ok(format!("{not}{field}{}{rhs}", operator.infix()))
            }
        }
    }
}

/// Bind `value` when a sink is present, otherwise format it inline.
/// Raw values are always spliced verbatim.
fn operand<'a>(value: &Value<'a>, sink: &mut Option<&mut dyn ParameterSink<'a>>) -> String {
    match (value, sink) {
        (Value::Raw(raw), _) => raw.to_string(),
        (_, Some(sink)) => sink.bind(value.clone()).to_string(),
        (_, None) => format_literal(value),
    }
}

//------------------------------------------------------------------------------
// ClauseGroup & Predicate
//------------------------------------------------------------------------------

/// Non-empty run of comparisons, parenthesized when it holds more than one
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseGroup<'a> {
    comparisons: Vec<Comparison<'a>>,
}

impl<'a> ClauseGroup<'a> {
    pub fn new(first: Comparison<'a>) -> Self {
        Self {
            comparisons: vec![first],
        }
    }

    pub fn and(self, comparison: Comparison<'a>) -> Self {
        self.push(comparison.with_logic(Logic::And))
    }

    pub fn or(self, comparison: Comparison<'a>) -> Self {
        self.push(comparison.with_logic(Logic::Or))
    }

    /// Append keeping the comparison's own logic
    pub fn push(mut self, comparison: Comparison<'a>) -> Self {
        self.comparisons.push(comparison);
        self
    }

    pub fn comparisons(&self) -> &[Comparison<'a>] {
        &self.comparisons
    }

    fn compile(&self, sql: &mut String, sink: &mut Option<&mut dyn ParameterSink<'a>>) -> Result<()> {
        let parenthesize = self.comparisons.len() > 1;
        if parenthesize {
            sql.push('(');
        }
        for (i, comparison) in self.comparisons.iter().enumerate() {
            if i > 0 {
                sql.push_str(comparison.logic.separator());
            }
            sql.push_str(&comparison.compile(sink)?);
        }
        if parenthesize {
            sql.push(')');
        }
        Ok(())
    }
}

impl<'a> From<Comparison<'a>> for ClauseGroup<'a> {
    fn from(comparison: Comparison<'a>) -> Self {
        Self::new(comparison)
    }
}

/// Ordered clause groups joined by one `group_logic`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate<'a> {
    pub groups: Vec<ClauseGroup<'a>>,
    pub group_logic: Logic,
}

impl<'a> Predicate<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause group
    pub fn group(mut self, group: impl Into<ClauseGroup<'a>>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Set the logic used between every pair of adjacent groups
    pub fn group_logic(mut self, logic: Logic) -> Self {
        self.group_logic = logic;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Compile to a condition without the `WHERE` keyword.
    ///
    /// With a sink, scalar and BETWEEN operands are bound as `@P<n>`
    /// parameters; without one every value is formatted inline. On error the
    /// sink keeps whatever earlier comparisons already bound, so discard the
    /// statement.
    pub fn compile(&self, mut sink: Option<&mut dyn ParameterSink<'a>>) -> Result<String> {
        let mut sql = String::new();
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                sql.push_str(self.group_logic.separator());
            }
            group.compile(&mut sql, &mut sink)?;
        }

        sqlforge_core::sqlforge_trace_sql!(
            "predicate",
            &sql,
            sink.as_ref().map_or(0, |s| s.parameter_count())
        );
        Ok(sql)
    }

    /// Compile with every value formatted inline
    pub fn to_sql(&self) -> Result<String> {
        self.compile(None)
    }

    /// `WHERE <condition>`, or an empty string when the condition is empty
    pub fn where_clause(&self, sink: Option<&mut dyn ParameterSink<'a>>) -> Result<String> {
        let condition = self.compile(sink)?;
        if condition.is_empty() {
            Ok(condition)
        } else {
            Ok(format!("WHERE {condition}"))
        }
    }
}

impl<'a> From<ClauseGroup<'a>> for Predicate<'a> {
    fn from(group: ClauseGroup<'a>) -> Self {
        Self::new().group(group)
    }
}

impl<'a> From<Comparison<'a>> for Predicate<'a> {
    fn from(comparison: Comparison<'a>) -> Self {
        Self::new().group(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlforge_core::ParamList;

    #[test]
    fn test_single_comparison_has_no_parens() {
        let predicate = Predicate::from(Comparison::eq("id", 5));
        assert_eq!(predicate.to_sql().unwrap(), "id = 5");
    }

    #[test]
    fn test_multi_comparison_group_is_parenthesized() {
        let predicate = Predicate::from(
            ClauseGroup::new(Comparison::eq("a", 1)).or(Comparison::ne("b", "x")),
        );
        assert_eq!(predicate.to_sql().unwrap(), "(a = 1 OR b <> 'x')");
    }

    #[test]
    fn test_group_logic_applies_between_every_group() {
        let predicate = Predicate::new()
            .group(Comparison::eq("a", 1))
            .group(Comparison::eq("b", 2))
            .group(Comparison::eq("c", 3))
            .group_logic(Logic::Or);
        assert_eq!(predicate.to_sql().unwrap(), "a = 1 OR b = 2 OR c = 3");
    }

    #[test]
    fn test_null_handling() {
        let render = |c: Comparison<'static>| Predicate::from(c).to_sql().unwrap();

        assert_eq!(render(Comparison::is_null("x")), "x IS NULL");
        assert_eq!(render(Comparison::is_not_null("x")), "NOT x IS NULL");
        assert_eq!(render(Comparison::eq("x", Value::Null)), "x IS NULL");
        assert_eq!(render(Comparison::gt("x", None::<i64>)), "");
        assert_eq!(render(Comparison::like("x", Value::Null)), "");
    }

    #[test]
    fn test_null_is_never_bound() {
        let mut params = ParamList::new();
        let predicate = Predicate::from(Comparison::is_null("x"));
        assert_eq!(predicate.compile(Some(&mut params)).unwrap(), "x IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn test_binary_operators() {
        let cases = [
            (Comparison::eq("f", 1), "f = 1"),
            (Comparison::ne("f", 1), "f <> 1"),
            (Comparison::like("f", "a%"), "f LIKE 'a%'"),
            (Comparison::not_like("f", "a%"), "NOT f LIKE 'a%'"),
            (Comparison::gt("f", 1), "f > 1"),
            (Comparison::gte("f", 1), "f >= 1"),
            (Comparison::lt("f", 1), "f < 1"),
            (Comparison::lte("f", 1), "f <= 1"),
        ];
        for (comparison, expected) in cases {
            assert_eq!(Predicate::from(comparison).to_sql().unwrap(), expected);
        }
    }

    #[test]
    fn test_sink_numbers_parameters_in_order() {
        let mut params = ParamList::new();
        let predicate = Predicate::from(
            ClauseGroup::new(Comparison::gt("field", 5)).and(Comparison::lt("field2", 10)),
        );

        let sql = predicate.compile(Some(&mut params)).unwrap();
        assert_eq!(sql, "(field > @P0 AND field2 < @P1)");
        assert_eq!(params.get("@P0"), Some(&Value::Integer(5)));
        assert_eq!(params.get("@P1"), Some(&Value::Integer(10)));
    }

    #[test]
    fn test_numbering_continues_across_compilations() {
        let mut params = ParamList::new();
        Predicate::from(Comparison::eq("a", 1))
            .compile(Some(&mut params))
            .unwrap();
        let sql = Predicate::from(Comparison::eq("b", 2))
            .compile(Some(&mut params))
            .unwrap();
        assert_eq!(sql, "b = @P1");
    }

    #[test]
    fn test_raw_is_spliced_not_bound() {
        let mut params = ParamList::new();
        let predicate = Predicate::from(Comparison::new(
            "id",
            Operator::Equals,
            RawLiteral::new("(SELECT max(id) FROM t)"),
        ));
        assert_eq!(
            predicate.compile(Some(&mut params)).unwrap(),
            "id = (SELECT max(id) FROM t)"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_in_lists() {
        let render = |c: Comparison<'static>| Predicate::from(c).to_sql().unwrap();

        assert_eq!(render(Comparison::is_in("id", [1, 2, 3])), "id IN (1,2,3)");
        assert_eq!(render(Comparison::not_in("name", ["a", "b'c"])), "NOT name IN ('a','b''c')");
        assert_eq!(render(Comparison::in_list("id", "4, 5")), "id IN (4, 5)");
        assert_eq!(render(Comparison::new("id", Operator::In, Value::from(7))), "id IN (7)");
    }

    #[test]
    fn test_in_is_not_parameterized() {
        let mut params = ParamList::new();
        let sql = Predicate::from(Comparison::is_in("id", [1, 2]))
            .compile(Some(&mut params))
            .unwrap();
        assert_eq!(sql, "id IN (1,2)");
        assert!(params.is_empty());
    }

    #[test]
    fn test_between() {
        assert_eq!(
            Predicate::from(Comparison::between("age", 18, 65)).to_sql().unwrap(),
            "age BETWEEN 18 AND 65"
        );
        let two = Comparison::new(
            "age",
            Operator::NotBetween,
            vec![Value::from(1), Value::from(2)],
        );
        assert_eq!(
            Predicate::from(two).to_sql().unwrap(),
            "NOT age BETWEEN 1 AND 2"
        );

        let mut params = ParamList::new();
        let sql = Predicate::from(Comparison::between("age", 18, 65))
            .compile(Some(&mut params))
            .unwrap();
        assert_eq!(sql, "age BETWEEN @P0 AND @P1");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_between_rejects_non_pair_before_binding() {
        let mut params = ParamList::new();
        let bad = Comparison::new("age", Operator::Between, Value::from(3));
        let err = Predicate::from(bad).compile(Some(&mut params)).unwrap_err();

        assert!(matches!(
            err,
            SqlForgeError::MalformedPredicateValue { ref field, operator: "Between", .. } if field == "age"
        ));
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_clause() {
        assert_eq!(Predicate::new().where_clause(None).unwrap(), "");
        assert_eq!(
            Predicate::from(Comparison::eq("id", 1)).where_clause(None).unwrap(),
            "WHERE id = 1"
        );
    }
}

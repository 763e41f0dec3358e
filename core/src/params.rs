use std::{borrow::Cow, fmt};

use crate::value::{RawLiteral, Value};

/// Various styles of SQL parameter placeholders.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// Colon style placeholders (:param)
    Colon,
    /// At-sign style placeholders (@param)
    #[default]
    AtSign,
    /// Dollar style placeholders ($param)
    Dollar,
    /// Positional placeholders (?)
    Positional,
}

/// A SQL parameter placeholder.
#[derive(Default, Debug, Clone, Hash, PartialEq, Eq)]
pub struct Placeholder {
    /// The name of the parameter, without its sigil.
    pub name: Cow<'static, str>,
    /// The style of the placeholder.
    pub style: PlaceholderStyle,
}

impl Placeholder {
    /// Creates a new placeholder with the given name and style.
    pub fn with_style(name: impl Into<Cow<'static, str>>, style: PlaceholderStyle) -> Self {
        Placeholder {
            name: name.into(),
            style,
        }
    }

    /// Creates a new colon-style placeholder.
    pub fn colon(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_style(name, PlaceholderStyle::Colon)
    }

    /// Creates a new at-sign-style placeholder.
    pub fn at(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_style(name, PlaceholderStyle::AtSign)
    }

    /// Creates a new dollar-style placeholder.
    pub fn dollar(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_style(name, PlaceholderStyle::Dollar)
    }

    /// Creates a positional placeholder ('?').
    pub const fn positional() -> Self {
        Placeholder {
            name: Cow::Borrowed(""),
            style: PlaceholderStyle::Positional,
        }
    }

    /// The `n`th generated placeholder: `@P<n>`
    pub fn indexed(n: usize) -> Self {
        Self::at(format!("P{n}"))
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            PlaceholderStyle::Colon => write!(f, ":{}", self.name),
            PlaceholderStyle::AtSign => write!(f, "@{}", self.name),
            PlaceholderStyle::Dollar => write!(f, "${}", self.name),
            PlaceholderStyle::Positional => write!(f, "?"),
        }
    }
}

/// A SQL parameter that associates a value with a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Param<'a> {
    /// The placeholder to use in the SQL
    pub placeholder: Placeholder,
    /// The value to bind
    pub value: Value<'a>,
}

impl<'a> Param<'a> {
    pub fn new(placeholder: Placeholder, value: impl Into<Value<'a>>) -> Self {
        Self {
            placeholder,
            value: value.into(),
        }
    }

    /// Placeholder text as it appears in SQL, e.g. `@P0`
    pub fn name(&self) -> String {
        self.placeholder.to_string()
    }

    pub fn into_owned(self) -> Param<'static> {
        Param {
            placeholder: self.placeholder,
            value: self.value.into_owned(),
        }
    }
}

//------------------------------------------------------------------------------
// Parameter Sink
//------------------------------------------------------------------------------

/// Collaborator that accumulates bound parameters while a statement compiles.
///
/// Implementors only supply storage. [`bind`](ParameterSink::bind) names each
/// parameter `@P<n>` from the running count, so a sink shared by several
/// compilations keeps numbering where the previous one stopped. Compile one
/// statement at a time per sink.
pub trait ParameterSink<'a> {
    /// Number of parameters added so far
    fn parameter_count(&self) -> usize;

    /// Build a parameter for `placeholder`
    fn create_parameter(&self, placeholder: Placeholder, value: Value<'a>) -> Param<'a> {
        Param::new(placeholder, value)
    }

    /// Append a parameter
    fn add_parameter(&mut self, param: Param<'a>);

    /// Add `value` under the next `@P<n>` name and return that placeholder
    /// for splicing into SQL.
    fn bind(&mut self, value: Value<'a>) -> RawLiteral<'static> {
        let placeholder = Placeholder::indexed(self.parameter_count());
        let text = placeholder.to_string();
        let param = self.create_parameter(placeholder, value);
        self.add_parameter(param);
        RawLiteral::new(text)
    }
}

/// In-memory [`ParameterSink`].
///
/// ```
/// use sqlforge_core::{ParamList, ParameterSink, Value};
///
/// let mut params = ParamList::new();
/// assert_eq!(params.bind(Value::from(5)).as_str(), "@P0");
/// assert_eq!(params.bind(Value::from("x")).as_str(), "@P1");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList<'a> {
    params: Vec<Param<'a>>,
}

impl<'a> ParamList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param<'a>> {
        self.params.iter()
    }

    /// Find a parameter by its SQL text, e.g. `@P1`
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.params
            .iter()
            .find(|p| p.name() == name)
            .map(|p| &p.value)
    }

    pub fn as_slice(&self) -> &[Param<'a>] {
        &self.params
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }

    pub fn into_vec(self) -> Vec<Param<'a>> {
        self.params
    }
}

impl<'a> ParameterSink<'a> for ParamList<'a> {
    fn parameter_count(&self) -> usize {
        self.params.len()
    }

    fn add_parameter(&mut self, param: Param<'a>) {
        self.params.push(param);
    }
}

impl<'a> IntoIterator for ParamList<'a> {
    type Item = Param<'a>;
    type IntoIter = std::vec::IntoIter<Param<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b ParamList<'a> {
    type Item = &'b Param<'a>;
    type IntoIter = std::slice::Iter<'b, Param<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

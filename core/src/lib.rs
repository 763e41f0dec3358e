//! Core building blocks shared by the sqlforge compilers.
//!
//! - [`Value`] and [`RawLiteral`]: typed scalars handed to the compilers
//! - [`literal`]: renders a [`Value`] as an SQL literal
//! - [`ident`]: wraps identifiers in delimiters
//! - [`params`]: placeholders and the [`ParameterSink`] collaborator
//! - [`error`]: the crate-wide error type

pub mod error;
pub mod ident;
pub mod literal;
pub mod params;
pub mod tracing;
pub mod value;

pub use error::{Result, SqlForgeError};
pub use ident::{IdentQuote, escape_identifier};
pub use literal::format_literal;
pub use params::{Param, ParamList, ParameterSink, Placeholder, PlaceholderStyle};
pub use value::{RawLiteral, Value};

pub use sqlforge_types as types;

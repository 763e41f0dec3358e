//! Serde helpers for `Cow<'static, str>` deserialization
//!
//! Descriptor types hold `Cow<'static, str>` so they can be built from string
//! literals without allocating, while still being deserializable from JSON
//! (where strings become `Cow::Owned`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};
#[cfg(feature = "serde")]
use std::borrow::Cow;

/// Deserialize a String into `Cow<'static, str>`
#[cfg(feature = "serde")]
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize a `Vec<String>` into `Vec<Cow<'static, str>>`
#[cfg(feature = "serde")]
pub fn cow_vec_from_strings<'de, D>(deserializer: D) -> Result<Vec<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let vec: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(vec.into_iter().map(Cow::Owned).collect())
}

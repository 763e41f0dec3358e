//! Identifier escaping

/// Delimiter pair used to wrap identifiers.
///
/// ```
/// use sqlforge_core::IdentQuote;
///
/// let quote = IdentQuote::default();
/// assert_eq!(quote.escape("users"), "`users`");
/// assert_eq!(quote.escape("`users`"), "`users`");
/// assert_eq!(IdentQuote::brackets().escape("order"), "[order]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentQuote {
    pub open: char,
    pub close: char,
}

impl IdentQuote {
    #[must_use]
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    /// `` `name` ``
    #[must_use]
    pub const fn backtick() -> Self {
        Self::new('`', '`')
    }

    /// `"name"`
    #[must_use]
    pub const fn double_quote() -> Self {
        Self::new('"', '"')
    }

    /// `[name]`
    #[must_use]
    pub const fn brackets() -> Self {
        Self::new('[', ']')
    }

    /// Strip any delimiters already present on the edges of `name`, then wrap it.
    ///
    /// Idempotent: escaping an escaped identifier yields the same text.
    #[must_use]
    pub fn escape(&self, name: &str) -> String {
        let bare = name.trim_matches(|c| c == self.open || c == self.close);
        let mut out = String::with_capacity(bare.len() + 2);
        out.push(self.open);
        out.push_str(bare);
        out.push(self.close);
        out
    }
}

impl Default for IdentQuote {
    fn default() -> Self {
        Self::backtick()
    }
}

/// Escape `name` with the default backtick pair
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    IdentQuote::default().escape(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_is_idempotent() {
        for name in ["users", "`users`", "``users``", "user id", "a`b"] {
            let once = escape_identifier(name);
            assert_eq!(escape_identifier(&once), once, "{name}");
        }
    }

    #[test]
    fn test_strips_either_delimiter() {
        let quote = IdentQuote::brackets();
        assert_eq!(quote.escape("[users]"), "[users]");
        assert_eq!(quote.escape("]users["), "[users]");
        assert_eq!(IdentQuote::double_quote().escape("\"t\""), "\"t\"");
    }

    #[test]
    fn test_inner_delimiters_are_kept() {
        assert_eq!(escape_identifier("a`b"), "`a`b`");
    }
}

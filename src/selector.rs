//! Field selectors and subtype keys.

use std::fmt;

/// Identifies one field of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    /// 0-based column index (column 0 is the record type).
    Positional(usize),
    /// Name of a `name:type:value` tagged cell.
    Named(String),
}

impl Selector {
    /// Parse a single selector token.
    ///
    /// Tokens made only of ASCII digits are positional; anything else,
    /// including the empty token, is a tag name. Returns `None` when a
    /// digit-only token does not fit in `usize`.
    pub fn parse_token(token: &str) -> Option<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            token.parse().ok().map(Selector::Positional)
        } else {
            Some(Selector::Named(token.to_string()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Positional(i) => write!(f, "{i}"),
            Selector::Named(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Positional(i)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Named(name.to_string())
    }
}

/// Subtype key under a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// No subtype given: matches every row of the record type.
    Any,
    /// Concrete subtype tag.
    Tag(String),
}

impl Subtype {
    pub fn tag(tag: impl Into<String>) -> Self {
        Subtype::Tag(tag.into())
    }

    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Subtype::Any => None,
            Subtype::Tag(tag) => Some(tag),
        }
    }
}

//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, as written by the site owner.
///
/// Menu entries are addressed by index, e.g. `menu[2].path`.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("author").key("contacts").key("github");
/// assert_eq!(path.as_str(), "author.contacts.github");
///
/// let path = FieldPath::new("menu").index(0).key("label");
/// assert_eq!(path.as_str(), "menu[0].label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a `.key` segment.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_owned())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Append an `[index]` segment.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

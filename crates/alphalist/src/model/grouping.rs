//! Where an entry's bucket letter comes from.

use std::fmt;
use std::sync::Arc;

use super::item::ListEntry;

/// Type alias for a caller-supplied grouping function.
///
/// Returns the character to bucket on, or `None` for "no grouping source".
pub type KeyFn<T> = Arc<dyn Fn(&T) -> Option<char> + Send + Sync>;

/// Selects the grouping source for each entry.
pub enum GroupBy<T> {
    /// First character of the display label.
    Value,
    /// First character of a named field (see [`ListEntry::field`]).
    ///
    /// Entries without the field go to the uncategorized bucket.
    Field(String),
    /// A custom function.
    Key(KeyFn<T>),
}

impl<T> GroupBy<T> {
    /// Groups by a named field.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Groups by a custom function.
    pub fn key<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<char> + Send + Sync + 'static,
    {
        Self::Key(Arc::new(f))
    }
}

impl<T: ListEntry> GroupBy<T> {
    /// The raw (not yet classified) first character of the entry's grouping source.
    pub fn source_char(&self, entry: &T) -> Option<char> {
        match self {
            Self::Value => entry.value().chars().next(),
            Self::Field(name) => entry.field(name).and_then(|s| s.chars().next()),
            Self::Key(f) => f(entry),
        }
    }
}

impl<T> Default for GroupBy<T> {
    fn default() -> Self {
        Self::Value
    }
}

impl<T> Clone for GroupBy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value => Self::Value,
            Self::Field(name) => Self::Field(name.clone()),
            Self::Key(f) => Self::Key(Arc::clone(f)),
        }
    }
}

/// Functions compare by identity.
impl<T> PartialEq for GroupBy<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value, Self::Value) => true,
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Key(a), Self::Key(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for GroupBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("Value"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Key(_) => f.write_str("Key(<fn>)"),
        }
    }
}

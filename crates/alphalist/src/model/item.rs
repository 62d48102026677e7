//! List entries.
//!
//! The list works over any type implementing [`ListEntry`]. [`Item`] is the
//! stock entry: a key, a display value, and optional extra string fields that
//! can serve as an explicit grouping source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trait for records that can be shown in an alphabet list.
///
/// # Example
///
/// ```ignore
/// use alphalist::model::ListEntry;
///
/// struct Contact {
///     id: String,
///     full_name: String,
///     last_name: String,
/// }
///
/// impl ListEntry for Contact {
///     fn key(&self) -> &str {
///         &self.id
///     }
///
///     fn value(&self) -> &str {
///         &self.full_name
///     }
///
///     fn field(&self, name: &str) -> Option<&str> {
///         (name == "last_name").then_some(self.last_name.as_str())
///     }
/// }
/// ```
pub trait ListEntry: Send + Sync {
    /// Stable, unique identity used by the renderer for row diffing.
    ///
    /// Uniqueness is a caller contract; the list does not check it.
    fn key(&self) -> &str;

    /// Display label.
    fn value(&self) -> &str;

    /// Looks up a named string field, used when grouping by an explicit field.
    fn field(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// The stock list entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Unique identity.
    pub key: String,
    /// Display label.
    pub value: String,
    /// Extra string fields, addressable by [`ListEntry::field`].
    #[serde(default, flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Item {
    /// Creates an item with no extra fields.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds an extra field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

impl ListEntry for Item {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "key" => Some(&self.key),
            "value" => Some(&self.value),
            _ => self.fields.get(name).map(String::as_str),
        }
    }
}

//! HTML attribute maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::list::ClassList;
use super::value::AttrValue;

/// Name of the attribute holding CSS classes.
pub const CLASS: &str = "class";

/// Name of the option listing classes that injection must not add.
///
/// It is consumed by [`inject_classes`](crate::inject_classes) and never
/// survives into the returned attributes.
pub const SKIP: &str = "skip";

/// A mapping from attribute name to value, as handed to tag-building helpers.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::{Attributes, AttrValue};
///
/// let attrs = Attributes::new()
///     .with("class", ["x", "y"])
///     .with("id", "main");
///
/// assert_eq!(attrs.classes().to_string(), "x y");
/// assert_eq!(attrs.get("id"), Some(&AttrValue::from("main")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the updated map for chaining.
    pub fn with<V: Into<AttrValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an attribute, returning the previous value.
    pub fn insert<V: Into<AttrValue>>(&mut self, name: &str, value: V) -> Option<AttrValue> {
        self.entries.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the normalized `class` tokens, empty when the attribute is absent.
    pub fn classes(&self) -> ClassList {
        self.get(CLASS).map(ClassList::from).unwrap_or_default()
    }

    /// Writes `classes` back as a single space-joined `class` string.
    pub fn set_classes(&mut self, classes: &ClassList) {
        self.insert(CLASS, classes);
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name.as_ref(), value);
        }
        attrs
    }
}

//! Attribute values.

use serde::{Deserialize, Serialize};

use super::list::ClassList;

/// The value of an HTML attribute: a single string or a sequence of strings.
///
/// The `class` attribute accepts either form; operations normalize it through
/// [`ClassList`] and always write it back as [`AttrValue::Str`].
///
/// Serializes untagged, so `"a b"` and `["a", "b"]` both deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A plain string, e.g. `"btn btn-primary"`.
    Str(String),
    /// A sequence of strings, e.g. `["btn", "btn-primary"]`.
    List(Vec<String>),
}

impl AttrValue {
    /// Returns the string form if this is an [`AttrValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::List(_) => None,
        }
    }

    /// Returns `true` for an empty string or an empty sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Str(s) => s.is_empty(),
            AttrValue::List(items) => items.is_empty(),
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::List(items) => write!(f, "{}", items.join(" ")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::List(items)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(items: [&str; N]) -> Self {
        AttrValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&ClassList> for AttrValue {
    fn from(classes: &ClassList) -> Self {
        AttrValue::Str(classes.to_string())
    }
}

impl From<ClassList> for AttrValue {
    fn from(classes: ClassList) -> Self {
        AttrValue::from(&classes)
    }
}

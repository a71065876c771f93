//! Ordered, duplicate-free lists of CSS class tokens.

use super::value::AttrValue;

/// An ordered set of CSS class tokens.
///
/// Every way of building a `ClassList` normalizes its input: strings are split
/// on whitespace, empty pieces are dropped, and a token that is already present
/// keeps the position of its first occurrence.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::ClassList;
///
/// let classes = ClassList::from("btn  btn-primary btn");
/// assert_eq!(classes.len(), 2);
/// assert_eq!(classes.to_string(), "btn btn-primary");
///
/// let from_list = ClassList::from(vec!["a b", "c", "a"]);
/// assert_eq!(from_list.to_string(), "a b c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-delimited class string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.push_str(classes);
        list
    }

    /// Appends every token of `classes` that is not already present.
    pub fn push_str(&mut self, classes: &str) {
        self.push(classes);
    }

    /// Appends a token, returning `true` if anything was added.
    ///
    /// Input containing whitespace is split, so `push("a b")` adds `a` and `b`
    /// as separate tokens.
    pub fn push(&mut self, token: &str) -> bool {
        let mut added = false;
        for piece in token.split_whitespace() {
            if !self.contains(piece) {
                self.tokens.push(piece.to_string());
                added = true;
            }
        }
        added
    }

    /// Appends every token of `other` that is not already present.
    pub fn extend_from(&mut self, other: &ClassList) {
        for token in other.iter() {
            self.push(token);
        }
    }

    /// Returns `true` if `token` is in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns `true` if at least one token of `other` is in the list.
    pub fn contains_any(&self, other: &ClassList) -> bool {
        other.iter().any(|token| self.contains(token))
    }

    /// Returns `true` if every token of `other` is in the list.
    pub fn contains_all(&self, other: &ClassList) -> bool {
        other.iter().all(|token| self.contains(token))
    }

    /// Removes every token that also appears in `other`.
    pub fn remove_all(&mut self, other: &ClassList) {
        self.tokens.retain(|token| !other.contains(token));
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the list holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Consumes the list, returning its tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for classes in iter {
            list.push_str(classes.as_ref());
        }
        list
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl From<&String> for ClassList {
    fn from(classes: &String) -> Self {
        Self::parse(classes)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for ClassList {
    fn from(classes: Vec<S>) -> Self {
        classes.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for ClassList {
    fn from(classes: &[S]) -> Self {
        classes.iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for ClassList {
    fn from(classes: [S; N]) -> Self {
        classes.into_iter().collect()
    }
}

impl From<&AttrValue> for ClassList {
    fn from(value: &AttrValue) -> Self {
        match value {
            AttrValue::Str(classes) => Self::parse(classes),
            AttrValue::List(classes) => classes.iter().collect(),
        }
    }
}

impl From<AttrValue> for ClassList {
    fn from(value: AttrValue) -> Self {
        Self::from(&value)
    }
}

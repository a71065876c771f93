//! Registry-free class operations.

use super::attributes::{Attributes, SKIP};
use super::list::ClassList;

/// Appends classes to the `class` attribute.
///
/// Tokens already present keep their position; new ones are appended in
/// order. A `skip` entry in `attrs` lists tokens that must not be added and
/// is removed from the result. The returned map always carries `class`, as an
/// empty string if nothing was there and nothing was added.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::{inject_classes, Attributes};
///
/// let attrs = inject_classes("a b c", Attributes::new().with("class", "a c x"));
/// assert_eq!(attrs, Attributes::new().with("class", "a c x b"));
///
/// let attrs = inject_classes("a b c", Attributes::new().with("class", "x").with("skip", "b"));
/// assert_eq!(attrs, Attributes::new().with("class", "x a c"));
/// ```
pub fn inject_classes<C: Into<ClassList>>(classes: C, attrs: Attributes) -> Attributes {
    inject_classes_skipping(classes, attrs, ClassList::new())
}

/// Like [`inject_classes`], with an explicit list of tokens to leave out.
///
/// The explicit list is merged with any `skip` entry found in `attrs`.
pub fn inject_classes_skipping<C, S>(classes: C, mut attrs: Attributes, skip: S) -> Attributes
where
    C: Into<ClassList>,
    S: Into<ClassList>,
{
    let mut skip = skip.into();
    if let Some(inline) = attrs.remove(SKIP) {
        skip.extend_from(&ClassList::from(inline));
    }

    let mut existing = attrs.classes();
    for token in classes.into().iter() {
        if !skip.contains(token) {
            existing.push(token);
        }
    }

    attrs.set_classes(&existing);
    attrs
}

/// Removes classes from the `class` attribute, keeping the order of the rest.
///
/// Tokens that are not present are ignored.
pub fn remove_classes<C: Into<ClassList>>(classes: C, mut attrs: Attributes) -> Attributes {
    let mut existing = attrs.classes();
    existing.remove_all(&classes.into());
    attrs.set_classes(&existing);
    attrs
}

/// Returns `true` if any of `classes` is present in `attrs`.
pub fn has_any_class<C: Into<ClassList>>(classes: C, attrs: &Attributes) -> bool {
    attrs.classes().contains_any(&classes.into())
}

/// Returns `true` if all of `classes` are present in `attrs`, in any order.
pub fn check_classes<C: Into<ClassList>>(classes: C, attrs: &Attributes) -> bool {
    attrs.classes().contains_all(&classes.into())
}

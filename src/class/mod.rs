//! Class-token bookkeeping on HTML attribute maps.
//!
//! This module provides the registry-free primitives:
//!
//! - [`ClassList`]: An ordered, duplicate-free list of class tokens
//! - [`AttrValue`]: An attribute value, either a string or a list of strings
//! - [`Attributes`]: A mapping of attribute names to values
//! - [`inject_classes`], [`remove_classes`], [`has_any_class`], [`check_classes`]
//!
//! Every operation normalizes the `class` attribute through [`ClassList`] and
//! writes it back as one space-joined string.

mod attributes;
mod list;
mod ops;
mod value;

pub use attributes::{Attributes, CLASS, SKIP};
pub use list::ClassList;
pub use ops::{check_classes, has_any_class, inject_classes, inject_classes_skipping, remove_classes};
pub use value::AttrValue;

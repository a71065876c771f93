//! The options helper used by tag-building code.
//!
//! [`OptionsAware`] bundles every class operation behind one receiver, so a
//! helper only has to say which [`StyleRegistry`] it works against.

use crate::class::{self, Attributes, ClassList};
use crate::style::StyleRegistry;

/// Class operations bound to a style registry.
///
/// Implementors provide [`OptionsAware::registry`]; every other method has a
/// default implementation.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::{Attributes, BootstrapOptions, OptionsAware};
///
/// let helper = BootstrapOptions;
/// let attrs = helper.inject_classes("a", Attributes::new().with("class", "x y z"));
///
/// assert_eq!(attrs, Attributes::new().with("class", "x y z a"));
/// assert!(helper.check_classes("z a", &attrs));
/// assert_eq!(helper.gen_class_name("btn", "success").as_deref(), Some("btn-success"));
/// ```
pub trait OptionsAware {
    /// The registry used for style lookups.
    fn registry(&self) -> &StyleRegistry;

    /// See [`class::inject_classes`].
    fn inject_classes<C: Into<ClassList>>(&self, classes: C, attrs: Attributes) -> Attributes {
        class::inject_classes(classes, attrs)
    }

    /// See [`class::inject_classes_skipping`].
    fn inject_classes_skipping<C, S>(&self, classes: C, attrs: Attributes, skip: S) -> Attributes
    where
        C: Into<ClassList>,
        S: Into<ClassList>,
    {
        class::inject_classes_skipping(classes, attrs, skip)
    }

    /// See [`class::remove_classes`].
    fn remove_classes<C: Into<ClassList>>(&self, classes: C, attrs: Attributes) -> Attributes {
        class::remove_classes(classes, attrs)
    }

    /// See [`class::has_any_class`].
    fn has_any_class<C: Into<ClassList>>(&self, classes: C, attrs: &Attributes) -> bool {
        class::has_any_class(classes, attrs)
    }

    /// See [`class::check_classes`].
    fn check_classes<C: Into<ClassList>>(&self, classes: C, attrs: &Attributes) -> bool {
        class::check_classes(classes, attrs)
    }

    /// See [`StyleRegistry::rename_classes`].
    fn rename_classes(&self, prefix: &str, attrs: Attributes) -> Attributes {
        self.registry().rename_classes(prefix, attrs)
    }

    /// See [`StyleRegistry::apply_button_classes`].
    fn apply_button_classes(&self, attrs: Attributes) -> Attributes {
        self.registry().apply_button_classes(attrs)
    }

    /// See [`StyleRegistry::gen_class_name`].
    fn gen_class_name(&self, family: &str, style: &str) -> Option<String> {
        self.registry().gen_class_name(family, style)
    }

    /// See [`StyleRegistry::gen_all_class_names`].
    fn gen_all_class_names(&self, family: &str) -> Vec<String> {
        self.registry().gen_all_class_names(family)
    }
}

/// Options helper backed by the shared Bootstrap registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapOptions;

impl OptionsAware for BootstrapOptions {
    fn registry(&self) -> &StyleRegistry {
        StyleRegistry::bootstrap()
    }
}

/// Options helper that owns its registry, e.g. one loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct CustomOptions {
    registry: StyleRegistry,
}

impl CustomOptions {
    pub fn new(registry: StyleRegistry) -> Self {
        Self { registry }
    }
}

impl OptionsAware for CustomOptions {
    fn registry(&self) -> &StyleRegistry {
        &self.registry
    }
}

impl From<StyleRegistry> for CustomOptions {
    fn from(registry: StyleRegistry) -> Self {
        Self::new(registry)
    }
}

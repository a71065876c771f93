//! # bootstrap-ui-classes
//!
//! CSS class-token helpers for Bootstrap-styled view layers.
//!
//! Tag-building helpers pass around attribute maps whose `class` entry may be
//! a string or a list of strings. This crate normalizes that entry into an
//! ordered, duplicate-free token list and provides the operations such helpers
//! need: injecting, removing, renaming and checking classes, plus lookups of
//! the style tokens each Bootstrap component family recognizes.
//!
//! ## Quick Start
//!
//! ```rust
//! use bootstrap_ui_classes::{Attributes, BootstrapOptions, OptionsAware};
//!
//! let helper = BootstrapOptions;
//!
//! let attrs = Attributes::new().with("class", "primary").with("type", "submit");
//! let attrs = helper.apply_button_classes(attrs);
//!
//! assert_eq!(
//!     attrs,
//!     Attributes::new().with("class", "btn-primary btn").with("type", "submit"),
//! );
//! assert!(helper.has_any_class("btn-success btn-primary", &attrs));
//! ```
//!
//! ## Registry-free operations
//!
//! [`inject_classes`], [`remove_classes`], [`has_any_class`] and
//! [`check_classes`] need no registry and are available as free functions.
//!
//! ## Custom registries
//!
//! A [`StyleRegistry`] can be loaded from YAML or JSON and wrapped in
//! [`CustomOptions`]:
//!
//! ```rust
//! use bootstrap_ui_classes::{CustomOptions, OptionsAware, StyleRegistry};
//!
//! let registry = StyleRegistry::from_yaml(
//!     "- name: badge\n  styles: [primary, secondary]\n",
//! ).unwrap();
//! let helper = CustomOptions::new(registry);
//!
//! assert_eq!(
//!     helper.gen_all_class_names("badge"),
//!     vec!["primary", "secondary", "badge-primary", "badge-secondary"],
//! );
//! ```

pub mod class;
mod options;
pub mod style;

pub use class::{
    check_classes, has_any_class, inject_classes, inject_classes_skipping, remove_classes,
    AttrValue, Attributes, ClassList,
};
pub use options::{BootstrapOptions, CustomOptions, OptionsAware};
pub use style::{
    FamilyConfig, RegistryError, StyleFamily, StyleRegistry, BUTTON_FAMILY, DEFAULT_BUTTON_STYLE,
};

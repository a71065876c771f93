//! Component families and their style tokens.
//!
//! This module provides the registry side of class handling:
//!
//! - [`StyleFamily`]: A component family with its style and size tokens
//! - [`StyleRegistry`]: An ordered collection of families, with the shared
//!   Bootstrap table and YAML/JSON loading
//! - [`RegistryError`]: Errors from loading or validating a registry
//!
//! Registry-aware operations (`gen_class_name`, `gen_all_class_names`,
//! `rename_classes`, `apply_button_classes`) are methods on [`StyleRegistry`].

mod error;
mod family;
mod naming;
mod registry;

pub use error::RegistryError;
pub use family::StyleFamily;
pub use registry::{FamilyConfig, StyleRegistry, BUTTON_FAMILY, DEFAULT_BUTTON_STYLE};

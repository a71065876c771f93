//! Registry of component families and their style tokens.
//!
//! A [`StyleRegistry`] maps family names (`btn`, `alert`, ...) to the style and
//! size tokens each recognizes. It can be built in code, loaded from a YAML or
//! JSON document, or taken from the shared Bootstrap table returned by
//! [`StyleRegistry::bootstrap`].
//!
//! # Configuration Format
//!
//! A registry document is either a list of families or a mapping keyed by
//! family name. `styles` and `sizes` are optional, and families and tokens
//! keep their declaration order in both shapes:
//!
//! ```yaml
//! - name: btn
//!   styles: [default, primary, danger]
//!   sizes: [sm, lg]
//! - name: alert
//!   styles: [success, danger]
//! ```
//!
//! ```yaml
//! btn:
//!   styles: [default, primary, danger]
//!   sizes: [sm, lg]
//! alert:
//!   styles: [success, danger]
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::RegistryError;
use super::family::StyleFamily;

/// Family name used for buttons.
pub const BUTTON_FAMILY: &str = "btn";

/// Style applied to buttons that carry no recognized style.
pub const DEFAULT_BUTTON_STYLE: &str = "default";

static BOOTSTRAP: Lazy<StyleRegistry> = Lazy::new(|| {
    const CONTEXTUAL: [&str; 4] = ["success", "info", "warning", "danger"];

    StyleRegistry::new()
        .add(
            StyleFamily::new(BUTTON_FAMILY)
                .with_styles(["default", "primary"])
                .with_styles(CONTEXTUAL)
                .with_styles(["link"])
                .with_sizes(["xs", "sm", "lg"]),
        )
        .add(StyleFamily::new("alert").with_styles(CONTEXTUAL))
        .add(
            StyleFamily::new("label")
                .with_styles(["default", "primary"])
                .with_styles(CONTEXTUAL),
        )
        .add(
            StyleFamily::new("panel")
                .with_styles(["default", "primary"])
                .with_styles(CONTEXTUAL),
        )
        .add(
            StyleFamily::new("text")
                .with_styles(["muted", "primary"])
                .with_styles(CONTEXTUAL),
        )
        .add(
            StyleFamily::new("bg")
                .with_styles(["primary"])
                .with_styles(CONTEXTUAL),
        )
        .add(StyleFamily::new("progress-bar").with_styles(CONTEXTUAL))
        .add(StyleFamily::new("input-group").with_sizes(["sm", "lg"]))
});

/// One family entry of a registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub name: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl From<&StyleFamily> for FamilyConfig {
    fn from(family: &StyleFamily) -> Self {
        Self {
            name: family.name().to_string(),
            styles: family.styles().to_vec(),
            sizes: family.sizes().to_vec(),
        }
    }
}

/// Body of a family in the mapping form, where the name is the key.
#[derive(Debug, Default, Deserialize)]
struct FamilyBody {
    #[serde(default)]
    styles: Vec<String>,
    #[serde(default)]
    sizes: Vec<String>,
}

/// Families declared as `name: { styles, sizes }`, in document order.
struct FamilyMap(Vec<FamilyConfig>);

struct FamilyMapVisitor;

impl<'de> Visitor<'de> for FamilyMapVisitor {
    type Value = FamilyMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of family names to styles and sizes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some((name, body)) = map.next_entry::<String, Option<FamilyBody>>()? {
            let body = body.unwrap_or_default();
            entries.push(FamilyConfig {
                name,
                styles: body.styles,
                sizes: body.sizes,
            });
        }
        Ok(FamilyMap(entries))
    }
}

impl<'de> Deserialize<'de> for FamilyMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FamilyMapVisitor)
    }
}

/// A registry document in either accepted shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum RegistryDocument {
    List(Vec<FamilyConfig>),
    Map(FamilyMap),
}

impl RegistryDocument {
    fn into_entries(self) -> Vec<FamilyConfig> {
        match self {
            RegistryDocument::List(entries) => entries,
            RegistryDocument::Map(FamilyMap(entries)) => entries,
        }
    }
}

/// An ordered collection of [`StyleFamily`] entries.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::{StyleFamily, StyleRegistry};
///
/// let registry = StyleRegistry::new()
///     .add(StyleFamily::new("badge").with_styles(["primary", "secondary"]));
///
/// assert_eq!(registry.gen_class_name("badge", "primary").as_deref(), Some("badge-primary"));
/// assert_eq!(registry.gen_class_name("badge", "link"), None);
/// assert_eq!(registry.gen_class_name("btn", "primary"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    families: Vec<StyleFamily>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared Bootstrap registry.
    ///
    /// | family | styles | sizes |
    /// |--------|--------|-------|
    /// | `btn` | default primary success info warning danger link | xs sm lg |
    /// | `alert` | success info warning danger | |
    /// | `label` | default primary success info warning danger | |
    /// | `panel` | default primary success info warning danger | |
    /// | `text` | muted primary success info warning danger | |
    /// | `bg` | primary success info warning danger | |
    /// | `progress-bar` | success info warning danger | |
    /// | `input-group` | | sm lg |
    pub fn bootstrap() -> &'static StyleRegistry {
        &BOOTSTRAP
    }

    /// Adds a family, returning the updated registry for chaining.
    ///
    /// A family with the same name is replaced in place.
    pub fn add(mut self, family: StyleFamily) -> Self {
        match self.families.iter_mut().find(|f| f.name() == family.name()) {
            Some(existing) => *existing = family,
            None => self.families.push(family),
        }
        self
    }

    /// Looks up a family by name.
    pub fn get(&self, name: &str) -> Option<&StyleFamily> {
        self.families.iter().find(|f| f.name() == name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Family names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(StyleFamily::name)
    }

    pub fn families(&self) -> &[StyleFamily] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Validates every family.
    pub fn validate(&self) -> Result<(), RegistryError> {
        self.families.iter().try_for_each(StyleFamily::validate)
    }

    /// Builds a registry from parsed configuration entries.
    ///
    /// Unlike [`StyleRegistry::add`], duplicate family names are an error here.
    pub fn from_config(entries: Vec<FamilyConfig>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in entries {
            if registry.has(&entry.name) {
                return Err(RegistryError::DuplicateFamily { name: entry.name });
            }
            let family = StyleFamily::new(entry.name)
                .with_styles(entry.styles)
                .with_sizes(entry.sizes);
            family.validate()?;
            registry.families.push(family);
        }
        tracing::debug!(families = registry.len(), "loaded style registry");
        Ok(registry)
    }

    /// Loads a registry from a YAML document, in list or mapping form.
    pub fn from_yaml(source: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_yaml::from_str(source)?;
        Self::from_config(document.into_entries())
    }

    /// Loads a registry from a JSON document, in list or mapping form.
    pub fn from_json(source: &str) -> Result<Self, RegistryError> {
        let document: RegistryDocument = serde_json::from_str(source)?;
        Self::from_config(document.into_entries())
    }

    /// Configuration entries describing this registry.
    pub fn to_config(&self) -> Vec<FamilyConfig> {
        self.families.iter().map(FamilyConfig::from).collect()
    }

    /// Returns `{family}-{style}`, or `None` if either is unknown.
    ///
    /// Size tokens are accepted as styles.
    pub fn gen_class_name(&self, family: &str, style: &str) -> Option<String> {
        let Some(found) = self.get(family) else {
            tracing::trace!(family, "unknown style family");
            return None;
        };
        let name = found.class_name(style);
        if name.is_none() {
            tracing::trace!(family, style, "style not recognized by family");
        }
        name
    }

    /// Every bare token of `family`, then every compound class name.
    ///
    /// Returns an empty list for an unknown family.
    pub fn gen_all_class_names(&self, family: &str) -> Vec<String> {
        match self.get(family) {
            Some(found) => found.all_class_names(),
            None => {
                tracing::trace!(family, "unknown style family");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_families_in_order() {
        let names: Vec<&str> = StyleRegistry::bootstrap().names().collect();
        assert_eq!(
            names,
            vec!["btn", "alert", "label", "panel", "text", "bg", "progress-bar", "input-group"]
        );
    }

    #[test]
    fn test_bootstrap_is_valid() {
        assert!(StyleRegistry::bootstrap().validate().is_ok());
    }

    #[test]
    fn test_bootstrap_button_tokens() {
        let btn = StyleRegistry::bootstrap().get(BUTTON_FAMILY).unwrap();
        assert_eq!(
            btn.styles(),
            ["default", "primary", "success", "info", "warning", "danger", "link"]
        );
        assert_eq!(btn.sizes(), ["xs", "sm", "lg"]);
    }

    #[test]
    fn test_add_replaces_in_place() {
        let registry = StyleRegistry::new()
            .add(StyleFamily::new("a").with_styles(["x"]))
            .add(StyleFamily::new("b"))
            .add(StyleFamily::new("a").with_styles(["y"]));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().styles(), ["y"]);
    }

    #[test]
    fn test_gen_class_name() {
        let registry = StyleRegistry::bootstrap();
        assert_eq!(registry.gen_class_name("btn", "success").as_deref(), Some("btn-success"));
        assert_eq!(registry.gen_class_name("btn", "lg").as_deref(), Some("btn-lg"));
        assert_eq!(registry.gen_class_name("alert", "primary"), None);
        assert_eq!(registry.gen_class_name("unknown", "primary"), None);
    }

    #[test]
    fn test_gen_all_class_names_unknown_family() {
        assert!(StyleRegistry::bootstrap().gen_all_class_names("nope").is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let registry = StyleRegistry::from_yaml(
            "- name: badge\n  styles: [primary, secondary]\n- name: input\n  sizes: [sm]\n",
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.gen_all_class_names("input"),
            vec!["sm", "input-sm"]
        );
    }

    #[test]
    fn test_from_json() {
        let registry =
            StyleRegistry::from_json(r#"[{"name": "alert", "styles": ["danger"]}]"#).unwrap();
        assert_eq!(registry.gen_class_name("alert", "danger").as_deref(), Some("alert-danger"));
    }

    #[test]
    fn test_from_yaml_mapping_form() {
        let registry =
            StyleRegistry::from_yaml("btn:\n  styles: [primary]\n  sizes: [lg]\nwell:\n").unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["btn", "well"]);
        assert_eq!(registry.gen_class_name("btn", "primary").as_deref(), Some("btn-primary"));
        assert_eq!(registry.gen_class_name("btn", "lg").as_deref(), Some("btn-lg"));
        assert!(registry.gen_all_class_names("well").is_empty());
    }

    #[test]
    fn test_from_json_mapping_form_keeps_document_order() {
        let registry = StyleRegistry::from_json(
            r#"{"text": {"styles": ["muted"]}, "alert": {"styles": ["danger"]}, "bg": {}}"#,
        )
        .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["text", "alert", "bg"]);
    }

    #[test]
    fn test_mapping_form_rejects_scalar_body() {
        let err = StyleRegistry::from_json(r#"{"name": "btn"}"#).unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }

    #[test]
    fn test_from_config_rejects_duplicate_family() {
        let err = StyleRegistry::from_json(r#"[{"name": "a"}, {"name": "a"}]"#).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateFamily { name } if name == "a"));
    }

    #[test]
    fn test_from_yaml_rejects_invalid_token() {
        let err = StyleRegistry::from_yaml("- name: btn\n  styles: ['two words']\n").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidToken { .. }));
    }

    #[test]
    fn test_from_yaml_parse_error() {
        let err = StyleRegistry::from_yaml("name: [unterminated").unwrap_err();
        assert!(matches!(err, RegistryError::Yaml(_)));
    }

    #[test]
    fn test_config_round_trip_keeps_bootstrap() {
        let config = StyleRegistry::bootstrap().to_config();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reloaded = StyleRegistry::from_yaml(&yaml).unwrap();
        assert_eq!(&reloaded, StyleRegistry::bootstrap());
    }
}

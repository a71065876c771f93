//! Registry-aware class rewriting.

use crate::class::{inject_classes, remove_classes, Attributes, ClassList, CLASS};

use super::registry::{StyleRegistry, BUTTON_FAMILY, DEFAULT_BUTTON_STYLE};

impl StyleRegistry {
    /// Rewrites style tokens in `class` to their `{prefix}-{token}` form.
    ///
    /// When `prefix` names a registered family, only that family's style and
    /// size tokens are rewritten. For any other prefix every token is
    /// rewritten except `prefix` itself and tokens already starting with
    /// `{prefix}-`. Attributes without `class`, or an empty `prefix`, leave
    /// `attrs` unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bootstrap_ui_classes::{Attributes, StyleRegistry};
    ///
    /// let registry = StyleRegistry::bootstrap();
    /// let attrs = Attributes::new().with("class", "success pull-right");
    ///
    /// assert_eq!(
    ///     registry.rename_classes("alert", attrs),
    ///     Attributes::new().with("class", "alert-success pull-right"),
    /// );
    /// ```
    pub fn rename_classes(&self, prefix: &str, mut attrs: Attributes) -> Attributes {
        if prefix.is_empty() || !attrs.contains_key(CLASS) {
            return attrs;
        }

        let family = self.get(prefix);
        if family.is_none() {
            tracing::trace!(prefix, "renaming classes for unregistered family");
        }

        let compound = format!("{}-", prefix);
        let renamed: ClassList = attrs
            .classes()
            .iter()
            .map(|token| {
                let rewrite = match family {
                    Some(family) => family.recognizes(token),
                    None => token != prefix && !token.starts_with(&compound),
                };
                if rewrite {
                    format!("{}{}", compound, token)
                } else {
                    token.to_string()
                }
            })
            .collect();

        attrs.set_classes(&renamed);
        attrs
    }

    /// Gives `attrs` the classes of a Bootstrap button.
    ///
    /// The first button style found, bare (`primary`) or compound
    /// (`btn-primary`), becomes the button's style. Every style token and the
    /// base `btn` class are stripped, then `btn-{style} btn` is appended after
    /// the remaining classes, whatever order the input had. Without a style,
    /// `btn btn-default` is appended instead. Size tokens are renamed to their
    /// compound form. Without a `btn` family in the registry only the base and
    /// default classes are appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bootstrap_ui_classes::{Attributes, StyleRegistry};
    ///
    /// let registry = StyleRegistry::bootstrap();
    ///
    /// assert_eq!(
    ///     registry.apply_button_classes(Attributes::new().with("class", "btn primary")),
    ///     Attributes::new().with("class", "btn-primary btn"),
    /// );
    /// assert_eq!(
    ///     registry.apply_button_classes(Attributes::new()),
    ///     Attributes::new().with("class", "btn btn-default"),
    /// );
    /// ```
    pub fn apply_button_classes(&self, attrs: Attributes) -> Attributes {
        let default_class = format!("{}-{}", BUTTON_FAMILY, DEFAULT_BUTTON_STYLE);

        let Some(button) = self.get(BUTTON_FAMILY) else {
            return inject_classes([BUTTON_FAMILY, default_class.as_str()], attrs);
        };

        let classes = attrs.classes();
        let style = classes
            .iter()
            .find_map(|token| {
                if button.is_style(token) {
                    Some(token)
                } else {
                    button.strip_prefix(token).filter(|s| button.is_style(s))
                }
            })
            .map(str::to_string);

        let attrs = match style {
            Some(style) => {
                let stripped: ClassList = button
                    .styles()
                    .iter()
                    .flat_map(|s| [s.clone(), format!("{}-{}", BUTTON_FAMILY, s)])
                    .chain([BUTTON_FAMILY.to_string()])
                    .collect();
                let attrs = remove_classes(stripped, attrs);
                inject_classes(
                    [format!("{}-{}", BUTTON_FAMILY, style), BUTTON_FAMILY.to_string()],
                    attrs,
                )
            }
            None => inject_classes([BUTTON_FAMILY, default_class.as_str()], attrs),
        };

        self.rename_classes(BUTTON_FAMILY, attrs)
    }
}

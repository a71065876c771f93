//! A component family and the style tokens it recognizes.

use super::error::RegistryError;

/// A UI component family such as `btn` or `alert`.
///
/// A family recognizes a list of style tokens (`primary`, `danger`, ...) and a
/// list of size tokens (`sm`, `lg`, ...). The compound class for a token is
/// `{family}-{token}`.
///
/// # Example
///
/// ```rust
/// use bootstrap_ui_classes::StyleFamily;
///
/// let alert = StyleFamily::new("alert").with_styles(["success", "danger"]);
///
/// assert_eq!(alert.class_name("danger").as_deref(), Some("alert-danger"));
/// assert_eq!(alert.class_name("primary"), None);
/// assert_eq!(alert.strip_prefix("alert-success"), Some("success"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFamily {
    name: String,
    styles: Vec<String>,
    sizes: Vec<String>,
}

impl StyleFamily {
    /// Creates a family with no tokens.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Appends style tokens, returning the updated family for chaining.
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.extend(styles.into_iter().map(Into::into));
        self
    }

    /// Appends size tokens, returning the updated family for chaining.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// All recognized tokens: styles first, then sizes, in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.styles
            .iter()
            .chain(self.sizes.iter())
            .map(String::as_str)
    }

    pub fn is_style(&self, token: &str) -> bool {
        self.styles.iter().any(|s| s == token)
    }

    pub fn is_size(&self, token: &str) -> bool {
        self.sizes.iter().any(|s| s == token)
    }

    /// Returns `true` for any style or size token of this family.
    pub fn recognizes(&self, token: &str) -> bool {
        self.is_style(token) || self.is_size(token)
    }

    /// Builds `{family}-{token}`, or `None` if the token is not recognized.
    pub fn class_name(&self, token: &str) -> Option<String> {
        self.recognizes(token)
            .then(|| format!("{}-{}", self.name, token))
    }

    /// Maps a compound class back to its bare token.
    ///
    /// Returns `None` unless `class` is `{family}-{token}` for a recognized token.
    pub fn strip_prefix<'a>(&self, class: &'a str) -> Option<&'a str> {
        class
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|token| self.recognizes(token))
    }

    /// Bare tokens followed by their compound class names, in the same order.
    pub fn all_class_names(&self) -> Vec<String> {
        let bare = self.tokens().map(str::to_string);
        let compound = self.tokens().map(|token| format!("{}-{}", self.name, token));
        bare.chain(compound).collect()
    }

    /// Checks the family name and tokens.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if !is_token(&self.name) {
            return Err(RegistryError::InvalidFamilyName {
                name: self.name.clone(),
            });
        }

        let mut seen: Vec<&str> = Vec::new();
        for token in self.tokens() {
            if !is_token(token) {
                return Err(RegistryError::InvalidToken {
                    family: self.name.clone(),
                    token: token.to_string(),
                });
            }
            if seen.contains(&token) {
                return Err(RegistryError::DuplicateToken {
                    family: self.name.clone(),
                    token: token.to_string(),
                });
            }
            seen.push(token);
        }

        Ok(())
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

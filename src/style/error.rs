//! Style registry errors.

use thiserror::Error;

/// Error returned when a style registry cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The YAML document could not be parsed.
    #[error("failed to parse style registry YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed.
    #[error("failed to parse style registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A family was declared with an empty or whitespace-bearing name.
    #[error("invalid style family name '{name}'")]
    InvalidFamilyName { name: String },

    /// A style or size token is empty or contains whitespace.
    #[error("style family '{family}' declares invalid token '{token}'")]
    InvalidToken { family: String, token: String },

    /// The same token is declared twice within one family.
    #[error("style family '{family}' declares token '{token}' more than once")]
    DuplicateToken { family: String, token: String },

    /// Two families share a name.
    #[error("style family '{name}' is declared more than once")]
    DuplicateFamily { name: String },
}

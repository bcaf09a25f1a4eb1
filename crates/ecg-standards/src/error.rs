//! Error types for threshold configuration loading.

use thiserror::Error;

/// Errors that can occur when building a threshold configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Override text is not valid TOML or does not match the schema.
    #[error("Failed to parse threshold overrides: {0}")]
    Parse(#[from] toml::de::Error),

    /// A threshold is non-finite or inconsistent with a related threshold.
    #[error("Invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

/// Result type for standards operations.
pub type Result<T> = std::result::Result<T, StandardsError>;

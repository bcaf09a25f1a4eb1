//! Error types for case validation.

use thiserror::Error;

/// Reasons a case is rejected before any evaluator runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DiagnosisError {
    /// A mandatory feature is absent from the case.
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A feature is present but unusable.
    #[error("Invalid {field} value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl DiagnosisError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field } => field,
            Self::InvalidValue { field, .. } => field,
        }
    }
}

/// Result type for diagnosis operations.
pub type Result<T> = std::result::Result<T, DiagnosisError>;

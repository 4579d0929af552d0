//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing the engine to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A named input field was missing or outside its allowed range
    #[error("Invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Validation failed (e.g., inconsistent configuration values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates an invalid-parameter error naming the offending field.
    ///
    /// Use this whenever a caller-supplied value is rejected, so the caller
    /// can point at the exact input that needs fixing:
    /// - Spectral grade outside 0-9
    /// - Empty identifiers or names
    /// - Tech level outside the supported range
    ///
    /// # Example
    /// ```ignore
    /// if grade > 9 {
    ///     return Err(DomainError::invalid_parameter("grade", "must be between 0 and 9"));
    /// }
    /// ```
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// The field named by an invalid-parameter error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

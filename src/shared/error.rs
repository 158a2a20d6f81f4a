//! Shared Error Types
//!
//! Errors raised by the platform-agnostic parts of the crate. The backend
//! wraps them in `BackendError`, which decides the HTTP status.
//!
//! # Usage
//!
//! ```rust
//! use blogmark::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! assert_eq!(error.to_string(), "title: must not be empty");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A required field is missing or empty
    #[error("{field}: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let SharedError::ValidationError { field, message } =
            SharedError::validation("text", "must not be empty");
        assert_eq!(field, "text");
        assert_eq!(message, "must not be empty");
    }

    #[test]
    fn test_validation_display_names_field() {
        let error = SharedError::validation("body", "must not be empty");
        assert_eq!(error.to_string(), "body: must not be empty");
    }
}

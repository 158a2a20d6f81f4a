/**
 * Backend Error Types
 *
 * Every failure a handler can produce maps to exactly one variant here, and
 * every variant has a fixed HTTP status:
 *
 * - `Shared` validation - 400 Bad Request
 * - `DuplicateIdentifier` - 400 Bad Request
 * - `InvalidCredentials` - 401 Unauthorized
 * - `Unauthenticated` - 401 Unauthorized
 * - `Forbidden` - 403 Forbidden
 * - `NotFound` - 404 Not Found
 * - `Internal` - 500 Internal Server Error
 *
 * `InvalidCredentials` and `Unauthenticated` carry no detail: the caller
 * never learns which half of a credential was wrong.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Client-facing message for internal failures
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blogmark::backend::error::BackendError;
///
/// let err = BackendError::validation("title", "must not be empty");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::not_found("Post");
/// assert_eq!(err.message(), "Post not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Validation error from the shared module
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Registration with an identifier that is already taken
    #[error("Identifier already exists")]
    DuplicateIdentifier,

    /// Login with an unknown identifier or a wrong secret
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired or foreign bearer token
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated, but not allowed to touch this resource
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Referenced resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Kind of resource that was looked up
        resource: &'static str,
    },

    /// Persistence, hashing or signing failure
    ///
    /// The message is for the server log only.
    #[error("Internal error: {message}")]
    Internal {
        /// Diagnostic detail
        message: String,
    },
}

impl BackendError {
    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shared(SharedError::validation(field, message))
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a not-found error for a kind of resource
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create an internal error with server-side detail
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shared(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::DuplicateIdentifier => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to show the client
    pub fn message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            return GENERIC_SERVER_ERROR.to_string();
        }
        self.to_string()
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(format!("database error: {}", err))
    }
}

impl From<sqlx::migrate::MigrateError> for BackendError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::internal(format!("migration error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing error: {}", err))
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("blocking task failed: {}", err))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

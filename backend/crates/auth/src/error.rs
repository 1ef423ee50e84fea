//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account with the submitted email
    #[error("No user with that email address!")]
    UnknownEmail,

    /// Wrong password for an existing account
    #[error("Incorrect password!")]
    IncorrectPassword,

    /// User row not found (by id)
    #[error("No user found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already in use")]
    EmailTaken,

    /// Username already registered
    #[error("Username already in use")]
    UsernameTaken,

    /// Session cookie missing, tampered, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Logout without an active session
    #[error("No active session")]
    NoActiveSession,

    /// Malformed input (username/email/password shape)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UnknownEmail | AuthError::IncorrectPassword => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::EmailTaken | AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::NoActiveSession => StatusCode::NOT_FOUND,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UnknownEmail | AuthError::IncorrectPassword => ErrorKind::BadRequest,
            AuthError::UserNotFound | AuthError::NoActiveSession => ErrorKind::NotFound,
            AuthError::EmailTaken | AuthError::UsernameTaken => ErrorKind::Conflict,
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Storage and internal errors are sanitized: the client sees a
    /// generic message, the detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownEmail | AuthError::IncorrectPassword => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.message().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_are_bad_request() {
        assert_eq!(AuthError::UnknownEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::IncorrectPassword.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_login_failure_messages() {
        assert_eq!(
            AuthError::UnknownEmail.to_string(),
            "No user with that email address!"
        );
        assert_eq!(AuthError::IncorrectPassword.to_string(), "Incorrect password!");
        assert_eq!(AuthError::UserNotFound.to_string(), "No user found");
    }

    #[test]
    fn test_database_errors_are_sanitized() {
        let err = AuthError::Internal("connection string leaked".to_string());
        let app_err = err.to_app_error();
        assert_eq!(app_err.message(), "Internal server error");
    }
}

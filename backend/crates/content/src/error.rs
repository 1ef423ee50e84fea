//! Content Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Post row not found
    #[error("No post found with this id")]
    PostNotFound,

    /// Comment row not found
    #[error("No comment found with this id")]
    CommentNotFound,

    /// User row not found (activity view)
    #[error("No user found")]
    UserNotFound,

    /// Malformed input (empty title/body)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::PostNotFound
            | ContentError::CommentNotFound
            | ContentError::UserNotFound => StatusCode::NOT_FOUND,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::PostNotFound
            | ContentError::CommentNotFound
            | ContentError::UserNotFound => ErrorKind::NotFound,
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, sanitizing storage errors
    pub fn to_app_error(&self) -> AppError {
        match self {
            ContentError::Database(_) => AppError::new(self.kind(), "Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

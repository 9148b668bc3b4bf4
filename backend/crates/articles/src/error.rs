//! Article Error Types
//!
//! Article-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Guard failures from the accounts
//! crate pass through unchanged so their status and message survive.

use accounts::error::AccountError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Article-specific result type alias
pub type ArticleResult<T> = Result<T, ArticleError>;

/// Article-specific error variants
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Required creation field missing or empty
    #[error("Please provide title, name, and content")]
    MissingFields,

    /// Slug already used by another article
    #[error("Article with this name already exists")]
    SlugTaken,

    /// No article with that slug or id
    #[error("Article not found")]
    NotFound,

    /// Exists but not published, and the caller may not see drafts
    #[error("Article not available")]
    NotAvailable,

    /// Caller is neither the author nor editor/admin
    #[error("Not authorized to update this article")]
    UpdateForbidden,

    /// Caller is neither the author nor admin
    #[error("Not authorized to delete this article")]
    DeleteForbidden,

    /// Input validation failure with a specific message
    #[error("{0}")]
    Validation(String),

    /// Guard failure resolved by the accounts crate
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ArticleError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArticleError::MissingFields
            | ArticleError::SlugTaken
            | ArticleError::Validation(_) => StatusCode::BAD_REQUEST,
            ArticleError::NotFound => StatusCode::NOT_FOUND,
            ArticleError::NotAvailable
            | ArticleError::UpdateForbidden
            | ArticleError::DeleteForbidden => StatusCode::FORBIDDEN,
            ArticleError::Account(e) => e.status_code(),
            ArticleError::Database(_) | ArticleError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArticleError::MissingFields
            | ArticleError::SlugTaken
            | ArticleError::Validation(_) => ErrorKind::BadRequest,
            ArticleError::NotFound => ErrorKind::NotFound,
            ArticleError::NotAvailable
            | ArticleError::UpdateForbidden
            | ArticleError::DeleteForbidden => ErrorKind::Forbidden,
            ArticleError::Account(e) => e.kind(),
            ArticleError::Database(_) | ArticleError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server errors collapse to a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ArticleError::Account(e) => e.to_app_error(),
            ArticleError::Database(_) | ArticleError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ArticleError::Database(e) => {
                tracing::error!(error = %e, "Article database error");
            }
            ArticleError::Internal(msg) => {
                tracing::error!(message = %msg, "Article internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Article error");
            }
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        match self {
            // Guard failures carry their own logging
            ArticleError::Account(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

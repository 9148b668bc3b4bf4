//! Account Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Each variant's display string is the
//! exact message a client sees; server-side detail stays in the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Required registration field missing or blank
    #[error("Please provide all required fields")]
    MissingFields,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Email already registered (after normalization)
    #[error("User with this email already exists")]
    EmailTaken,

    /// Login called without email or password
    #[error("Please provide email and password")]
    MissingCredentials,

    /// Unknown email or wrong password; deliberately identical message
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Not authorized, no token provided")]
    NoToken,

    /// Bearer token malformed, tampered, or expired
    #[error("Not authorized, token failed")]
    TokenRejected,

    /// Token verified but the user no longer exists
    #[error("Not authorized, user not found")]
    TokenUserMissing,

    /// Authenticated but the role is not in the route's allowed set
    #[error("Role {0} is not authorized to access this resource")]
    RoleForbidden(String),

    /// Target user does not exist
    #[error("User not found")]
    UserNotFound,

    /// Input validation failure with a specific message
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::MissingFields
            | AccountError::PasswordMismatch
            | AccountError::EmailTaken
            | AccountError::MissingCredentials
            | AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::InvalidCredentials
            | AccountError::NoToken
            | AccountError::TokenRejected
            | AccountError::TokenUserMissing => StatusCode::UNAUTHORIZED,
            AccountError::RoleForbidden(_) => StatusCode::FORBIDDEN,
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingFields
            | AccountError::PasswordMismatch
            | AccountError::EmailTaken
            | AccountError::MissingCredentials
            | AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::InvalidCredentials
            | AccountError::NoToken
            | AccountError::TokenRejected
            | AccountError::TokenUserMissing => ErrorKind::Unauthorized,
            AccountError::RoleForbidden(_) => ErrorKind::Forbidden,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::Database(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server errors collapse to a generic message;
    /// the source is already logged.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::TokenRejected => {
                tracing::warn!("Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for AccountError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AccountError::Internal(err.to_string())
    }
}

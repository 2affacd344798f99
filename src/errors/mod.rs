//! Application error type and its HTTP rendering.
//!
//! Every variant maps to a [`MessageCode`]; the response body carries the
//! code and catalog message, never the underlying cause.

mod catalog;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorResponse;

pub use catalog::MessageCode;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0}")]
    Conflict(MessageCode),

    // Validation
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),

    /// Operation failed; the cause was logged where it happened.
    #[error("{0}")]
    Failed(MessageCode),
}

impl AppError {
    /// Catalog entry rendered for this error
    pub fn message_code(&self) -> MessageCode {
        match self {
            AppError::Unauthorized => MessageCode::Unauthorized,
            AppError::InvalidCredentials => MessageCode::InvalidCredentials,
            AppError::NotFound => MessageCode::NotFound,
            AppError::Conflict(code) | AppError::Failed(code) => *code,
            AppError::Validation(_) => MessageCode::ValidationFailed,
            AppError::Database(_) => MessageCode::DatabaseError,
            AppError::Jwt(_) => MessageCode::InvalidToken,
            AppError::Internal(_) => MessageCode::InternalError,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) | AppError::Failed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to clients. Causes that stop at this boundary are logged.
    fn user_message(&self) -> &'static str {
        match self {
            AppError::Database(e) => tracing::error!(error = ?e, "Database error"),
            AppError::Jwt(e) => tracing::debug!(error = ?e, "Token rejected"),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            _ => {}
        }
        self.message_code().message()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let code = self.message_code();
        let errors = match self {
            AppError::Validation(errors) => errors,
            _ => Vec::new(),
        };

        let body = ErrorResponse {
            success: false,
            code: code.code().to_string(),
            message: message.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(code: MessageCode) -> Self {
        AppError::Conflict(code)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

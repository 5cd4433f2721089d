//! Application error taxonomy and its HTTP mapping.
//!
//! Every core operation returns [`AppError`]. The JSON rendering here is used by
//! machine-facing endpoints; the HTML dashboard translates errors itself (see
//! [`crate::web::handlers::error`]).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload: stable code, human message, structured details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("a user with email `{email}` already exists")]
    DuplicateEmail { email: String },

    #[error("no user is registered with email `{email}`")]
    UserNotFound { email: String },

    #[error("password does not match the stored credential")]
    InvalidCredential,

    #[error("authentication required")]
    Unauthenticated,

    #[error("short name `{name}` is already taken")]
    DuplicateName { name: String },

    #[error("website entry {id} not found")]
    NotFound { id: i64 },

    #[error("website entry {id} belongs to another user")]
    Forbidden { id: i64 },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail { .. } => "duplicate_email",
            Self::UserNotFound { .. } => "user_not_found",
            Self::InvalidCredential => "invalid_credential",
            Self::Unauthenticated => "unauthenticated",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::NotFound { .. } => "not_found",
            Self::Forbidden { .. } => "forbidden",
            Self::Validation { .. } => "validation_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail { .. } | Self::DuplicateName { .. } => StatusCode::CONFLICT,
            Self::UserNotFound { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidCredential | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable form.
    ///
    /// Internal errors keep their message but drop details, which may carry
    /// driver output.
    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            Self::DuplicateEmail { email } | Self::UserNotFound { email } => {
                json!({ "email": email })
            }
            Self::DuplicateName { name } => json!({ "name": name }),
            Self::NotFound { id } | Self::Forbidden { id } => json!({ "id": id }),
            Self::Validation { details, .. } => details.clone(),
            Self::InvalidCredential | Self::Unauthenticated | Self::Internal { .. } => json!({}),
        };

        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, details } = &self {
            tracing::error!(%details, "{}", message);
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid form input",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(e: tower_sessions::session::Error) -> Self {
        AppError::internal("Session store error", json!({ "reason": e.to_string() }))
    }
}

//! REST API error types
//!
//! Every failure is rendered as
//! `{"message": ..., "error": {"code": ..., "message": ..., "field": ...}}`
//! so clients can read either the flat message or the structured body.

use pms_auth::AuthError;
use pms_core::CoreError;
use pms_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub message: String,
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Unique key already taken (400)
    #[error("Duplicate: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    /// Bad credentials or session token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Store not initialized yet (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } | Self::Duplicate { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Duplicate { .. } => "DUPLICATE",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Unavailable { .. } => "SERVICE_UNAVAILABLE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for the common "`<entity>` not found" case
    #[track_caller]
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound {
            message: format!("{} not found", entity),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Client mistakes are routine; only server-side failures are errors
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Duplicate { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Unavailable { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            message: message.clone(),
            error: ApiErrorBody {
                code: code.to_string(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Malformed path or body identifiers are validation failures
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid ID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.client_message(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::UniqueViolation { message, .. } => {
                log::warn!("Unique constraint violated: {}", message);
                ApiError::Duplicate {
                    message: "User with this email or employee code already exists".to_string(),
                    location,
                }
            }
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location,
            },
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: other.to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_client_error() {
            ApiError::Unauthorized {
                message: match e {
                    AuthError::TokenExpired { .. } => "Session token expired".to_string(),
                    AuthError::MissingHeader { .. } => "Missing bearer token".to_string(),
                    _ => "Invalid session token".to_string(),
                },
                location,
            }
        } else {
            log::error!("Auth failure: {}", e);
            ApiError::Internal {
                message: e.to_string(),
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

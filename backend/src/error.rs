//! Error handling for the AquaFarm server
//!
//! Every failure maps to one JSON shape: `{"error": {"code", "message", "field"?}}`

use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::FormError;
use thiserror::Error;

/// User-facing message for any text-generation failure
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate irrigation schedule. Please try again.";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    // Schedule generator errors
    #[error("A schedule is already being generated")]
    GenerationInProgress,

    #[error("Text generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::Validation {
            field: e.field.to_string(),
            message: e.message,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => json_error_field(&message),
            _ => None,
        };
        AppError::Validation {
            field: field.unwrap_or_else(|| "body".to_string()),
            message,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let field = match &rejection {
            PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
                ErrorKind::ParseErrorAtKey { key, .. } | ErrorKind::InvalidUtf8InPathParam { key } => {
                    Some(key.clone())
                }
                _ => None,
            },
            _ => None,
        };
        AppError::Validation {
            field: field.unwrap_or_else(|| "path".to_string()),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation {
            field: "query".to_string(),
            message: rejection.body_text(),
        }
    }
}

/// Field path of a JSON data error, e.g. `duration` in
/// "Failed to deserialize the JSON body into the target type: duration: invalid type ..."
fn json_error_field(message: &str) -> Option<String> {
    let (_, detail) = message.split_once("target type: ")?;
    let (path, _) = detail.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    is_path.then(|| path.to_string())
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("VALIDATION_ERROR", message.clone())
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::ConfirmationRequired(msg) => (
                StatusCode::PRECONDITION_REQUIRED,
                ErrorDetail::new("CONFIRMATION_REQUIRED", msg.clone()),
            ),
            AppError::GenerationInProgress => (
                StatusCode::CONFLICT,
                ErrorDetail::new(
                    "GENERATION_IN_PROGRESS",
                    "A schedule is already being generated. Please wait.",
                ),
            ),
            // Details stay in the log; callers only see the generic message
            AppError::GenerationFailed(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail::new("GENERATION_FAILED", GENERATION_FAILED_MESSAGE),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("CONFIGURATION_ERROR", format!("Configuration error: {}", msg)),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

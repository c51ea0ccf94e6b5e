//! Application error handling
//!
//! Converts assessment and internal errors into JSON HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use health_predictor_shared::{AssessmentError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationError>>,
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(errors) => {
                let message = errors
                    .first()
                    .map(ValidationError::user_message)
                    .unwrap_or_else(|| "Invalid input".to_string());
                let field = errors.first().map(|e| e.field.clone());
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message,
                    field,
                    details: Some(errors),
                }
                .with_status(StatusCode::BAD_REQUEST)
            }
            ApiError::NotFound(msg) => ErrorDetail::plain("NOT_FOUND", msg).with_status(StatusCode::NOT_FOUND),
            ApiError::BadRequest(msg) => {
                ErrorDetail::plain("BAD_REQUEST", msg).with_status(StatusCode::BAD_REQUEST)
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                ErrorDetail::plain("INTERNAL_ERROR", "An internal error occurred".to_string())
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };

        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

impl ErrorDetail {
    fn plain(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            field: None,
            details: None,
        }
    }

    fn with_status(self, status: StatusCode) -> (StatusCode, Self) {
        (status, self)
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! Error types for the AgriConnect API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use session_store::{SessionError, ValidationError};
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Invalid phone number or password. Please enter your registered details or create a new account.")]
    InvalidCredentials,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(ValidationError::PhoneTaken(_)) => {
                (StatusCode::CONFLICT, "ALREADY_REGISTERED")
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ApiError::EmptyMessage => (StatusCode::BAD_REQUEST, "EMPTY_MESSAGE"),
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<agri_assistant::AssistantError> for ApiError {
    fn from(e: agri_assistant::AssistantError) -> Self {
        match e {
            agri_assistant::AssistantError::EmptyMessage => ApiError::EmptyMessage,
        }
    }
}

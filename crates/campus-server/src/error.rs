//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_core::ValidationErrors;
use campus_repository::RepositoryError;
use thiserror::Error;
use tracing::error;

use crate::api::rest::types::Envelope;

/// Message sent in place of internal error details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Message accompanying schema validation failures
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Message for a request body that is not valid JSON
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Request failed schema validation
    #[error("Validation failed: {}", .0.first_message())]
    Validation(#[from] ValidationErrors),

    /// Request body could not be parsed
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_envelope(self) -> Envelope {
        match self {
            ServerError::Validation(errors) => {
                Envelope::failure_with_errors(Some(VALIDATION_FAILED_MESSAGE), errors.first_message())
            }
            ServerError::InvalidJson(detail) => {
                Envelope::failure_with_errors(Some(INVALID_JSON_MESSAGE), detail)
            }
            ServerError::NotFound(message) | ServerError::Conflict(message) => {
                Envelope::failure(message)
            }
            ServerError::Internal(detail) => {
                error!("Request failed: {}", detail);
                Envelope::failure(INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_envelope())).into_response()
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StudentNotFound { .. } => {
                ServerError::NotFound("Student does not exists".to_string())
            }
            RepositoryError::CourseNotFound { .. } => {
                ServerError::NotFound("Course does not exists".to_string())
            }
            RepositoryError::DuplicateCourse { .. } => {
                ServerError::Conflict("Course Id already exists".to_string())
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// One failed field in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {message}")]
    Conflict { message: String, application_id: i64 },

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        AppError::Validation {
            message: message.into(),
            errors,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    application_id: Option<i64>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
            application_id: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    errors: (!errors.is_empty()).then_some(errors),
                    application_id: None,
                },
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::message(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),
            AppError::Conflict {
                message,
                application_id,
            } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    message,
                    errors: None,
                    application_id: Some(application_id),
                },
            ),
            AppError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorBody::message(msg))
            }
            AppError::Storage(e) => match e {
                StorageError::JobNotFound(_) => {
                    (StatusCode::NOT_FOUND, ErrorBody::message("Job not found"))
                }
                StorageError::DuplicateApplication { existing_id } => (
                    StatusCode::CONFLICT,
                    ErrorBody {
                        message: e.to_string(),
                        errors: None,
                        application_id: Some(existing_id),
                    },
                ),
                StorageError::UsernameTaken(_) => {
                    (StatusCode::CONFLICT, ErrorBody::message(e.to_string()))
                }
                StorageError::DanglingJob { .. } => {
                    tracing::error!("Storage integrity error: {e}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorBody::message(e.to_string()),
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("An internal server error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

use crate::api::ErrorResponse;
use crate::libs::error::TaskError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failure of a REST request, rendered as `{"code": .., "msg": ..}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Missing or invalid bearer token")]
    Unauthorized,

    #[error("Task '{0}' not found")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound(_) => "TASK_NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(e: TaskError) -> Self {
        match e {
            TaskError::NotFound(id) => Self::NotFound(id),
            TaskError::Database(err) => {
                tracing::error!(error = %err, "task store failure");
                Self::Internal
            }
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        TaskError::Database(e).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            msg: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rbe_core::{DialError, PresetError, SweepError};
use serde_json::json;

use crate::counter::CounterError;

/// Error types for the sandbox API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Unknown dial: {0}")]
    UnknownDial(String),

    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Counter storage error: {0}")]
    CounterError(#[from] CounterError),

    #[error("Internal server error")]
    InternalError,
}

impl From<PresetError> for ApiError {
    fn from(err: PresetError) -> Self {
        match err {
            PresetError::UnknownPreset(name) => ApiError::PresetNotFound(name),
        }
    }
}

impl From<DialError> for ApiError {
    fn from(err: DialError) -> Self {
        match err {
            DialError::UnknownDial(name) => ApiError::UnknownDial(name),
        }
    }
}

impl From<SweepError> for ApiError {
    fn from(err: SweepError) -> Self {
        ApiError::ValidationError {
            field: "steps".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Blocking task failed: {err}");
        ApiError::InternalError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::PresetNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::UnknownDial(_) | ApiError::ValidationError { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            ApiError::CounterError(_) => {
                tracing::error!("Counter error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal storage error".to_string(),
                )
            }

            ApiError::InternalError => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;

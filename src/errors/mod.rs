//! Unified error handling module
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Errors raised while turning request parameters into estimates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("unsupported strategy type: {0}")]
    UnsupportedStrategy(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("External API error: {0}")]
    ExternalApi(#[from] reqwest::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unsupported strategy type: {0}")]
    UnsupportedStrategy(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<EstimationError> for ApiError {
    fn from(err: EstimationError) -> Self {
        match err {
            EstimationError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            EstimationError::UnsupportedStrategy(tag) => ApiError::UnsupportedStrategy(tag),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::ExternalApi(e) => match e.status().map(|s| s.as_u16()) {
                Some(404) => (StatusCode::NOT_FOUND, "UPSTREAM_404"),
                Some(403) => (StatusCode::BAD_GATEWAY, "UPSTREAM_403"),
                Some(429) => (StatusCode::BAD_GATEWAY, "UPSTREAM_429"),
                Some(500..=599) => (StatusCode::BAD_GATEWAY, "UPSTREAM_5XX"),
                Some(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
                None => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
            },
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ApiError::UnsupportedStrategy(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_STRATEGY"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::warn!(code, "{}", self);
        }

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

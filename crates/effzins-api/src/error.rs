//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use effzins_math::MathError;
use thiserror::Error;

/// Body returned for every server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request field violates a precondition.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read as a calculation request.
    #[error("{0}")]
    BadRequest(String),

    /// A rate calculation failed.
    #[error("Calculation failed: {0}")]
    Calculation(#[from] MathError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Calculation(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Client errors echo their message, server errors never do
        let body = if status.is_client_error() {
            tracing::warn!(error = %self, "rejected rate request");
            self.to_string()
        } else {
            tracing::error!(error = %self, "rate request failed");
            GENERIC_ERROR_MESSAGE.to_string()
        };

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

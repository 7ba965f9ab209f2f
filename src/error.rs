//! Error types for the advisory server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::AdvisoryResponse;

// == Advisory Error Enum ==
/// Failure of a single advisory operation.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Inference API could not be reached
    #[error("Inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Inference API answered with a non-success status
    #[error("Inference API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not have the expected shape
    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),

    /// Top-ranked label is not one of the candidate labels
    #[error("Unrecognized label: {0}")]
    UnrecognizedLabel(String),

    /// Advisory input could not be serialized into a cache key
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == API Error Enum ==
/// Error returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Advisory operation failed; `message` is the static text shown to clients
    #[error("{message}")]
    Advisory {
        message: &'static str,
        #[source]
        source: AdvisoryError,
    },
}

impl ApiError {
    /// Wraps an advisory failure behind a static client-facing message.
    pub fn advisory(message: &'static str, source: AdvisoryError) -> Self {
        ApiError::Advisory { message, source }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Advisory { message, .. } => (StatusCode::BAD_GATEWAY, message.to_string()),
        };

        (status, Json(AdvisoryResponse::<()>::failure(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

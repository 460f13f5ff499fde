use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

/// Startup configuration failures. Any of these aborts the process before the
/// listener is bound.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0} in environment variables")]
    MissingVar(&'static str),
}

/// Failures talking to the generative model service.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to reach model service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a structured error; the message is surfaced as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("model service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API key is not a valid header value")]
    InvalidHeader,
}

/// Request-level failures, rendered as `{"error": ...}` JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Not able to generate response")]
    EmptyAnswer,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmptyAnswer => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "rejected request");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

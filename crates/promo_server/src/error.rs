//! Errors returned by the HTTP endpoints.

use crate::config::ConfigError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Request-level failure, rendered as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// Only POST is accepted.
    #[display("Method not allowed")]
    MethodNotAllowed,
    /// A required environment variable is unset.
    #[display("{} is not set", _0)]
    ConfigurationMissing(&'static str),
    /// The body is not valid JSON.
    #[display("Invalid JSON")]
    MalformedPayload,
    /// The relay body lacks an identity or text.
    #[display("identity and text are required")]
    MissingFields,
    /// The Bot API did not accept the message.
    #[display("Failed to deliver message")]
    DeliveryFailed,
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedPayload | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::DeliveryFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        warn!(error = %err, "Rejecting request");
        ApiError::ConfigurationMissing(err.variable)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

//! API error types
//!
//! Only client-input errors exist here. Registry operations on
//! well-formed input cannot fail, and "stream not found" is a normal
//! outcome encoded in the response body, not an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error type for malformed inbound requests
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Webhook event without a stream name
    MissingStreamName,
    /// Request body that decodes as neither form nor JSON
    UnreadableBody(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingStreamName => write!(f, "Missing stream name"),
            ApiError::UnreadableBody(reason) => write!(f, "Malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    /// All variants map to 400. The ingest server aborts a stream on any
    /// non-2xx answer to on-publish, so only genuinely unusable input may
    /// take this path, and never a 5xx.
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::MissingStreamName.to_string(), "Missing stream name");
        assert_eq!(
            ApiError::UnreadableBody("bad".to_string()).to_string(),
            "Malformed request body: bad"
        );
    }

    #[test]
    fn test_maps_to_client_error() {
        let response = ApiError::MissingStreamName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

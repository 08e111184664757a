//! Ingest-server webhook receivers
//!
//! The media ingest server (MediaMTX in the reference deployment) is
//! configured to POST here on stream lifecycle changes:
//!
//! ```text
//! runOnPublish:   curl -s -X POST http://api:4000/webhook/on-publish   -d 'name=%path%&remoteAddr=%remoteAddr%'
//! runOnUnpublish: curl -s -X POST http://api:4000/webhook/on-unpublish -d 'name=%path%'
//! ```
//!
//! The server aborts the underlying stream if on-publish gets a non-2xx
//! answer, so every recoverable condition must still produce a
//! well-formed response: bad input is a 400, but a stop event for a
//! stream we never saw is a *success* with `removed: false`.

use axum::extract::State;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;

use super::error::ApiError;
use super::extract::FormOrJson;
use super::{response, AppState};

/// Webhook payload as sent by the ingest server
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Stream path, bare or "live/"-prefixed
    #[serde(default)]
    pub name: String,

    /// Publishing client's address; absent on some hook configurations
    #[serde(default)]
    pub remote_addr: Option<String>,
}

/// `POST /webhook/on-publish`
///
/// Registers the stream and acknowledges with the full record.
pub async fn on_publish(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<WebhookPayload>,
) -> Result<Response, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::MissingStreamName);
    }
    let client_ip = payload.remote_addr.unwrap_or_else(|| "unknown".to_string());

    let stream = state.registry.register(name, client_ip).await;
    tracing::debug!(stream = %stream.stream_key, "on-publish acknowledged");

    Ok(response::ok(stream))
}

/// `POST /webhook/on-unpublish`
///
/// Deregisters the stream. Unknown keys acknowledge with
/// `removed: false`; duplicate stops and stop-before-start races are
/// normal, not failures.
pub async fn on_unpublish(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<WebhookPayload>,
) -> Result<Response, ApiError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::MissingStreamName);
    }

    let removed = state.registry.deregister(name).await;
    tracing::debug!(stream = name, removed = removed, "on-unpublish acknowledged");

    Ok(response::ok(json!({ "removed": removed })))
}

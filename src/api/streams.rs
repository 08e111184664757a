//! Stream query endpoints
//!
//! Read-only views over the registry. No mutation happens here; the
//! registry is populated exclusively by the webhook receivers.

use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;

use super::{response, AppState};

/// `GET /streams` — all currently active streams
pub async fn list_streams(State(state): State<AppState>) -> Response {
    let streams = state.registry.list().await;

    response::ok_stamped(json!({
        "count": streams.len(),
        "streams": streams,
    }))
}

/// `GET /streams/:key` — single stream, 404 when absent
///
/// The key is canonicalized before lookup, so `/streams/live%2Fcam1`
/// and `/streams/cam1` resolve the same entry.
pub async fn get_stream(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.registry.get(&key).await {
        Some(stream) => response::ok_stamped(stream),
        None => response::not_found(),
    }
}

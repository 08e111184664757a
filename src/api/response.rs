//! JSON response envelopes
//!
//! Every endpoint answers `{success, data, ...}`. Query endpoints carry a
//! `timestamp` field; webhook acknowledgements do not (the ingest server
//! only inspects the status code).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

/// 200 `{success: true, data}`
pub fn ok<T: Serialize>(data: T) -> Response {
    Json(json!({
        "success": true,
        "data": data,
    }))
    .into_response()
}

/// 200 `{success: true, data, timestamp}`
pub fn ok_stamped<T: Serialize>(data: T) -> Response {
    Json(json!({
        "success": true,
        "data": data,
        "timestamp": Utc::now(),
    }))
    .into_response()
}

/// 404 `{success: false, data: null, timestamp}` for queries on absent keys
pub fn not_found() -> Response {
    let body = Json(json!({
        "success": false,
        "data": null,
        "timestamp": Utc::now(),
    }));
    (StatusCode::NOT_FOUND, body).into_response()
}

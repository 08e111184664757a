//! Liveness probe
//!
//! Used by container healthchecks, load balancers, and uptime
//! monitoring.

use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use serde_json::json;

use super::{response, AppState};

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    response::ok(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": state.started_at.elapsed().as_secs(),
        "activeStreams": state.registry.count().await,
        "timestamp": Utc::now(),
    }))
}

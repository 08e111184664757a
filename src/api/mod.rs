//! HTTP surface
//!
//! Routes:
//!
//! - `POST /webhook/on-publish`, `POST /webhook/on-unpublish` — lifecycle
//!   events from the media ingest server (the only writers)
//! - `GET /streams`, `GET /streams/:key` — queries for playback clients
//! - `GET /health` — liveness probe
//! - `GET /` — API discovery
//!
//! All routes get permissive CORS; CDN edges, browsers, and admin tools
//! all call this API cross-origin.

pub mod error;
pub mod extract;
pub mod health;
pub mod response;
pub mod streams;
pub mod webhooks;

use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::registry::StreamRegistry;

pub use error::ApiError;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StreamRegistry>,
    /// Process start, for the health endpoint's uptime field
    pub started_at: Instant,
}

impl AppState {
    pub fn new(registry: Arc<StreamRegistry>) -> Self {
        Self {
            registry,
            started_at: Instant::now(),
        }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(discovery))
        .route("/health", get(health::health))
        .route("/streams", get(streams::list_streams))
        .route("/streams/:key", get(streams::get_stream))
        .route("/webhook/on-publish", post(webhooks::on_publish))
        .route("/webhook/on-unpublish", post(webhooks::on_unpublish))
        .fallback(not_found_fallback)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /` — API discovery
async fn discovery() -> Response {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET  /health",
            "streams": "GET  /streams",
            "stream": "GET  /streams/:key",
            "onPublish": "POST /webhook/on-publish",
            "onUnpublish": "POST /webhook/on-unpublish",
        },
    }))
    .into_response()
}

/// Fallback for unknown routes
async fn not_found_fallback() -> Response {
    let body = Json(json!({
        "success": false,
        "error": "Not found",
    }));
    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::{router, AppState, Router};
    use crate::registry::StreamRegistry;

    /// Router plus a handle on its registry, for seeding and asserting.
    pub(crate) fn test_app() -> (Router, Arc<StreamRegistry>) {
        let registry = Arc::new(StreamRegistry::new());
        let app = router(AppState::new(Arc::clone(&registry)));
        (app, registry)
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_discovery_document() {
        let (app, _registry) = test_app();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["service"], env!("CARGO_PKG_NAME"));
        assert!(json["endpoints"]["onPublish"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back() {
        let (app, _registry) = test_app();

        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found");
    }

    /// Full lifecycle: publish → list → unpublish → list → duplicate stop.
    #[tokio::test]
    async fn test_publish_query_unpublish_roundtrip() {
        let (app, _registry) = test_app();

        let publish = Request::builder()
            .method("POST")
            .uri("/webhook/on-publish")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=live/cam1&remoteAddr=10.0.0.5"))
            .unwrap();
        let response = app.clone().oneshot(publish).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let list = Request::builder()
            .uri("/streams")
            .body(Body::empty())
            .unwrap();
        let json = body_json(app.clone().oneshot(list).await.unwrap()).await;
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["streams"][0]["streamKey"], "cam1");

        let unpublish = |body: &str| {
            Request::builder()
                .method("POST")
                .uri("/webhook/on-unpublish")
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let json = body_json(app.clone().oneshot(unpublish("name=cam1")).await.unwrap()).await;
        assert_eq!(json["data"]["removed"], true);

        let list = Request::builder()
            .uri("/streams")
            .body(Body::empty())
            .unwrap();
        let json = body_json(app.clone().oneshot(list).await.unwrap()).await;
        assert_eq!(json["data"]["count"], 0);

        // Duplicate stop stays a success
        let response = app.oneshot(unpublish("name=cam1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["removed"], false);
    }
}

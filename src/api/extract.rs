//! Dual-format body extraction
//!
//! The ingest server posts webhook payloads as
//! `application/x-www-form-urlencoded` by default but can be configured
//! for JSON, so webhook endpoints accept both framings.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extracts `T` from a JSON body when the content type says JSON,
/// otherwise from a form-encoded body.
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnreadableBody(e.to_string()))?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnreadableBody(e.to_string()))?;
            Ok(Self(value))
        }
    }
}

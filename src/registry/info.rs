//! Per-stream record types
//!
//! This module defines the record stored in the registry for each active
//! stream. Records serialize in the wire format consumed by playback
//! clients (camelCase field names, RFC 3339 timestamps).

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::config::RegistryConfig;
use super::key::StreamKey;
use super::quality::QualityLevel;

/// Record for one active stream
///
/// Materialized entirely at registration time from the canonical key, the
/// publishing client's address, and the configured ladder. Immutable
/// afterwards; a re-publish replaces the whole record rather than editing
/// fields in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    /// Canonical stream key
    pub stream_key: StreamKey,

    /// When the publish event was registered
    pub started_at: DateTime<Utc>,

    /// Address of the publishing client, "unknown" if the event carried none
    pub client_ip: String,

    /// One playback entry per ladder rung
    pub qualities: Vec<QualityLevel>,

    /// `{base}/{key}/master.m3u8`
    pub master_playlist_url: String,
}

impl StreamInfo {
    /// Build the full record for `key`, deriving all playlist URLs.
    pub(super) fn materialize(key: &StreamKey, client_ip: String, config: &RegistryConfig) -> Self {
        let qualities = config
            .quality_ladder
            .iter()
            .map(|preset| QualityLevel::derive(preset, &config.hls_base_url, key))
            .collect();

        Self {
            stream_key: key.clone(),
            started_at: Utc::now(),
            client_ip,
            qualities,
            master_playlist_url: format!("{}/{}/master.m3u8", config.hls_base_url, key),
        }
    }
}

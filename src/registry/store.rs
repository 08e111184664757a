//! Stream registry implementation
//!
//! The central map of currently live streams, mutated by webhook events
//! and read by the query endpoints.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::config::RegistryConfig;
use super::info::StreamInfo;
use super::key::StreamKey;

/// Central registry of currently live streams
///
/// Thread-safe via `RwLock`: webhook writers take the lock exclusively,
/// query readers share it. Records are built before the lock is taken,
/// so a reader never sees a half-constructed entry.
pub struct StreamRegistry {
    /// Map of canonical stream key to stream record
    streams: RwLock<HashMap<StreamKey, StreamInfo>>,

    /// Configuration
    config: RegistryConfig,
}

impl StreamRegistry {
    /// Create a new stream registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new stream registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a stream when the ingest server reports publish start
    ///
    /// The raw key is canonicalized and any existing record for the same
    /// key is overwritten wholesale, start timestamp included. Performs
    /// no validation; callers reject empty keys before getting here.
    pub async fn register(&self, raw_key: &str, client_ip: impl Into<String>) -> StreamInfo {
        let key = StreamKey::canonical(raw_key);
        let info = StreamInfo::materialize(&key, client_ip.into(), &self.config);

        let mut streams = self.streams.write().await;
        let replaced = streams.insert(key.clone(), info.clone()).is_some();
        drop(streams);

        tracing::info!(
            stream = %key,
            client = %info.client_ip,
            replaced = replaced,
            "Stream registered"
        );

        info
    }

    /// Remove a stream when the ingest server reports publish stop
    ///
    /// Returns whether a record existed. Removing an unknown key is not
    /// an error; duplicate stop events and stops racing ahead of starts
    /// are normal.
    pub async fn deregister(&self, raw_key: &str) -> bool {
        let key = StreamKey::canonical(raw_key);
        let existed = self.streams.write().await.remove(&key).is_some();

        if existed {
            tracing::info!(stream = %key, "Stream removed");
        } else {
            tracing::debug!(stream = %key, "Stop event for unknown stream ignored");
        }

        existed
    }

    /// Snapshot of all active streams
    ///
    /// Order is implementation-defined; callers must not rely on it.
    pub async fn list(&self) -> Vec<StreamInfo> {
        self.streams.read().await.values().cloned().collect()
    }

    /// Look up a single stream by raw or canonical key
    pub async fn get(&self, raw_key: &str) -> Option<StreamInfo> {
        let key = StreamKey::canonical(raw_key);
        self.streams.read().await.get(&key).cloned()
    }

    /// Number of active streams
    pub async fn count(&self) -> usize {
        self.streams.read().await.len()
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

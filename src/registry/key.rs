//! Stream key canonicalization
//!
//! The ingest server reports the same stream either as a bare key
//! (`"mystream"`) or with its path prefix (`"live/mystream"`), depending
//! on which hook fired. Both forms must resolve to the same registry
//! entry, so keys are canonicalized before every lookup and insert.

use serde::Serialize;

/// Canonical identifier for a live stream
///
/// Exactly one leading `"live/"` segment is stripped, so canonicalization
/// is idempotent: `"live/live/x"` becomes `"live/x"` and stays there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StreamKey(String);

impl StreamKey {
    /// Canonicalize a raw key as reported by the ingest server.
    ///
    /// Total over all strings, including the empty string; callers that
    /// require a non-empty key must check before registering.
    pub fn canonical(raw: &str) -> Self {
        Self(raw.strip_prefix("live/").unwrap_or(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StreamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_unchanged() {
        assert_eq!(StreamKey::canonical("mystream").as_str(), "mystream");
    }

    #[test]
    fn test_prefix_stripped() {
        assert_eq!(StreamKey::canonical("live/mystream").as_str(), "mystream");
    }

    #[test]
    fn test_strips_only_one_segment() {
        assert_eq!(StreamKey::canonical("live/live/x").as_str(), "live/x");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["cam1", "live/cam1", "live/live/cam1", "", "live/"] {
            let once = StreamKey::canonical(raw);
            let twice = StreamKey::canonical(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_is_representable() {
        assert_eq!(StreamKey::canonical("").as_str(), "");
        assert_eq!(StreamKey::canonical("live/").as_str(), "");
    }

    #[test]
    fn test_interior_prefix_kept() {
        assert_eq!(StreamKey::canonical("a/live/b").as_str(), "a/live/b");
    }
}

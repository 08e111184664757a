//! Adaptive-bitrate quality ladder
//!
//! The ladder is static process configuration. It must match the
//! renditions the external transcoding pipeline actually produces; a
//! mismatch yields playlist URLs that 404 and is a deployment error,
//! not something the registry can detect.

use serde::Serialize;

use super::key::StreamKey;

/// One rung of the adaptive-bitrate ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityPreset {
    /// Rendition label, used as the playlist path segment (e.g. "720p")
    pub label: String,
    /// Nominal video bitrate in kbit/s
    pub bitrate: u32,
    /// Frame size as "WxH" (e.g. "1280x720")
    pub resolution: String,
}

impl QualityPreset {
    pub fn new(label: impl Into<String>, bitrate: u32, resolution: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bitrate,
            resolution: resolution.into(),
        }
    }
}

/// Default four-rung ladder matching the reference transcoder output
pub fn default_ladder() -> Vec<QualityPreset> {
    vec![
        QualityPreset::new("1080p", 4500, "1920x1080"),
        QualityPreset::new("720p", 2500, "1280x720"),
        QualityPreset::new("480p", 1200, "854x480"),
        QualityPreset::new("360p", 600, "640x360"),
    ]
}

/// A ladder rung with its playlist URL derived for one stream
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityLevel {
    pub label: String,
    pub bitrate: u32,
    pub resolution: String,
    /// `{base}/{key}/{label}/index.m3u8`
    pub playlist_url: String,
}

impl QualityLevel {
    /// Derive the playback entry for `key` from a ladder rung.
    pub(super) fn derive(preset: &QualityPreset, base_url: &str, key: &StreamKey) -> Self {
        Self {
            label: preset.label.clone(),
            bitrate: preset.bitrate,
            resolution: preset.resolution.clone(),
            playlist_url: format!("{}/{}/{}/index.m3u8", base_url, key, preset.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_rungs() {
        let ladder = default_ladder();

        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder[0].label, "1080p");
        assert_eq!(ladder[0].bitrate, 4500);
        assert_eq!(ladder[0].resolution, "1920x1080");
        assert_eq!(ladder[3].label, "360p");
        assert_eq!(ladder[3].bitrate, 600);
    }

    #[test]
    fn test_derive_playlist_url() {
        let preset = QualityPreset::new("720p", 2500, "1280x720");
        let key = StreamKey::canonical("abc");

        let level = QualityLevel::derive(&preset, "http://x/hls", &key);

        assert_eq!(level.playlist_url, "http://x/hls/abc/720p/index.m3u8");
        assert_eq!(level.label, "720p");
        assert_eq!(level.bitrate, 2500);
        assert_eq!(level.resolution, "1280x720");
    }
}

//! Registry configuration

use super::quality::{default_ladder, QualityPreset};

/// Registry configuration options
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL under which HLS segments are served (no trailing slash)
    pub hls_base_url: String,

    /// Quality ladder; must match the external transcoder's renditions
    pub quality_ladder: Vec<QualityPreset>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            hls_base_url: "http://localhost:8080/hls".to_string(),
            quality_ladder: default_ladder(),
        }
    }
}

impl RegistryConfig {
    /// Set the HLS base URL
    pub fn hls_base_url(mut self, url: impl Into<String>) -> Self {
        self.hls_base_url = url.into();
        self
    }

    /// Replace the quality ladder
    pub fn quality_ladder(mut self, ladder: Vec<QualityPreset>) -> Self {
        self.quality_ladder = ladder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert_eq!(config.hls_base_url, "http://localhost:8080/hls");
        assert_eq!(config.quality_ladder.len(), 4);
    }

    #[test]
    fn test_builder_chaining() {
        let config = RegistryConfig::default()
            .hls_base_url("http://cdn.example.com/hls")
            .quality_ladder(vec![QualityPreset::new("720p", 2500, "1280x720")]);

        assert_eq!(config.hls_base_url, "http://cdn.example.com/hls");
        assert_eq!(config.quality_ladder.len(), 1);
    }
}

//! Server configuration

use std::net::SocketAddr;

use crate::registry::RegistryConfig;

/// Server configuration options
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// Registry configuration (HLS base URL, quality ladder)
    pub registry: RegistryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:4000".parse().unwrap(),
            registry: RegistryConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with custom bind address
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            bind_addr: addr,
            ..Default::default()
        }
    }

    /// Set the bind address
    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the registry configuration
    pub fn registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }

    /// Set the HLS base URL
    pub fn hls_base_url(mut self, url: impl Into<String>) -> Self {
        self.registry = self.registry.hls_base_url(url);
        self
    }

    /// Build a config from the environment
    ///
    /// Honors `PORT` and `HLS_BASE_URL`; unset or unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => config.bind_addr.set_port(port),
                Err(_) => tracing::warn!(value = %port, "Ignoring unparseable PORT"),
            }
        }
        if let Ok(url) = std::env::var("HLS_BASE_URL") {
            config.registry = config.registry.hls_base_url(url);
        }

        config
    }
}

//! API server listener
//!
//! Binds the HTTP socket and serves the router.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api::{self, AppState};
use crate::registry::StreamRegistry;
use crate::server::config::ServerConfig;

/// Stream tracker API server
pub struct ApiServer {
    config: ServerConfig,
    registry: Arc<StreamRegistry>,
}

impl ApiServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(StreamRegistry::with_config(config.registry.clone()));
        Self { config, registry }
    }

    /// Get a reference to the stream registry
    pub fn registry(&self) -> &Arc<StreamRegistry> {
        &self.registry
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }

    /// Run the server
    ///
    /// This method blocks until the listener fails.
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = self.bind().await?;
        axum::serve(listener, self.app()).await
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await
    }

    async fn bind(&self) -> std::io::Result<TcpListener> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "Stream tracker API listening");
        Ok(listener)
    }

    fn app(&self) -> axum::Router {
        api::router(AppState::new(Arc::clone(&self.registry)))
    }
}

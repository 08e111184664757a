//! Stream tracker API entry point
//!
//! Reads configuration from the environment (`PORT`, `HLS_BASE_URL`),
//! then serves until ctrl-c.

use stream_tracker_rs::{ApiServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let server = ApiServer::new(config);

    tracing::info!(
        addr = %server.bind_addr(),
        "Webhook endpoints: POST /webhook/on-publish, POST /webhook/on-unpublish"
    );

    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await
}

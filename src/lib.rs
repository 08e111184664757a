//! Live stream tracking API
//!
//! Tracks the set of currently live media streams in real time, driven
//! entirely by push webhooks from a media ingest server (MediaMTX in the
//! reference deployment), and exposes that state over a read-only HTTP
//! query API. No polling and no database; the registry is an ephemeral,
//! in-memory reflection of what the ingest server reports.
//!
//! # Example
//!
//! ```no_run
//! use stream_tracker_rs::{ApiServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::default().hls_base_url("http://cdn.example.com/hls");
//!     ApiServer::new(config).run().await
//! }
//! ```

pub mod api;
pub mod registry;
pub mod server;

pub use registry::{QualityLevel, QualityPreset, RegistryConfig, StreamInfo, StreamKey, StreamRegistry};
pub use server::{ApiServer, ServerConfig};

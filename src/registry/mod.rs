//! In-memory registry of currently live streams
//!
//! The registry is kept accurate in real time by ingest-server webhooks:
//! an on-publish event inserts a record, an on-unpublish event removes it.
//! No polling, no backing store; the map is an ephemeral reflection of
//! what the ingest server reports.
//!
//! # Architecture
//!
//! ```text
//!                       Arc<StreamRegistry>
//!                 ┌───────────────────────────┐
//!                 │ streams: RwLock<HashMap<  │
//!                 │   StreamKey, StreamInfo,  │
//!                 │ >>                        │
//!                 │ config: RegistryConfig    │
//!                 └────────────┬──────────────┘
//!            write             │             read
//!                              │
//!     [on-publish webhook] ────┼──── [GET /streams]
//!     [on-unpublish webhook] ──┴──── [GET /streams/:key]
//! ```
//!
//! Records are fully materialized (playlist URLs derived, start timestamp
//! stamped) before the write lock is taken, so readers never observe a
//! partially built entry.

pub mod config;
pub mod info;
pub mod key;
pub mod quality;
pub mod store;

pub use config::RegistryConfig;
pub use info::StreamInfo;
pub use key::StreamKey;
pub use quality::{QualityLevel, QualityPreset};
pub use store::StreamRegistry;

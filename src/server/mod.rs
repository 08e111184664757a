//! API server assembly
//!
//! Ties the registry and the HTTP surface together behind a bind
//! address and a run loop.

pub mod config;
pub mod listener;

pub use config::ServerConfig;
pub use listener::ApiServer;

//! # Faxobs Server
//!
//! Reference faxobs server keeping its state in memory, plus the pieces the
//! `faxobs-server` binary is assembled from:
//!
//! - [`config`]: TOML configuration
//! - [`memory`]: [`MemoryFaxServer`], the [`FaxobsServer`](msrpc_faxobs::FaxobsServer) implementation
//! - [`replay`]: stdin call replay against a registry

pub mod config;
pub mod memory;
pub mod replay;

pub use config::{ConfigError, ServerConfig, ServerSettings};
pub use memory::MemoryFaxServer;
pub use replay::{ReplayCall, ReplayError, ReplayStats};

//! # Faxobs Replay Server
//!
//! Serves the faxobs interface from memory and replays calls read from stdin.
//!
//! ## Usage
//! ```bash
//! # GetVersion, then the reserved opnum
//! printf '1\n30 00\n' | cargo run --package faxobs-server -- --config faxobs.toml
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use msrpc_dispatch::{CancellationHandle, Registry};
use msrpc_faxobs::{FAXOBS_SYNTAX_V4_0, register_faxobs_server_with_codec};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use faxobs_server::{MemoryFaxServer, ServerConfig, replay};

#[derive(Parser, Debug)]
#[command(name = "faxobs-server")]
#[command(about = "In-memory faxobs server replaying calls from stdin")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "faxobs.toml")]
    config: PathBuf,

    /// Log filter, overrides the configured level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let server = Arc::new(MemoryFaxServer::new(&config));
    let mut registry = Registry::new();
    register_faxobs_server_with_codec(&mut registry, server, config.codec())?;
    info!(
        syntax = %FAXOBS_SYNTAX_V4_0,
        version = %config.server.version,
        max_stub_size = config.max_stub_size,
        "faxobs server ready"
    );

    let shutdown = CancellationHandle::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping replay");
            signal.cancel();
        }
    });

    let stats = replay::run(
        &registry,
        FAXOBS_SYNTAX_V4_0,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &shutdown,
    )
    .await?;

    info!(
        calls = stats.calls(),
        replies = stats.replies,
        no_replies = stats.no_replies,
        errors = stats.errors,
        "replay finished"
    );
    Ok(())
}

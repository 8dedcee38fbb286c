//! battery-card: runtime and charge-time estimates for a home battery.
//!
//! Run with:  `RUST_LOG=info battery-card [path/to/card.toml]`

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging on stderr; stdout carries the rendered card.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("battery-card v{} starting", env!("CARGO_PKG_VERSION"));

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => card_host::run_with(path.clone())
            .await
            .with_context(|| format!("running card from '{}'", path.display())),
        None => card_host::run().await.context("running card from default config"),
    }
}

//! NeuroLens Site Host
//!
//! Run with: cargo run --bin neurolens
//!
//! Serves the UI bundle built by `trunk build` in `neurolens-ui/`.
//!
//! # Configuration
//!
//! Loaded from `--config`, or the first of
//! `~/.config/neurolens/config.toml`, `/etc/neurolens/config.toml`,
//! `./config.toml`. Environment variables override file values:
//! - `NEUROLENS_HOST`: Host to bind to (default: 0.0.0.0)
//! - `NEUROLENS_PORT`: Port to listen on (default: 8084)
//! - `NEUROLENS_DIST_DIR`: UI bundle directory (default: neurolens-ui/dist)
//! - `NEUROLENS_LOG_LEVEL` / `NEUROLENS_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Filter directives (overrides the level)

use clap::Parser;
use neurolens::api::{serve, AppState};
use neurolens::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "neurolens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the NeuroLens site")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    neurolens::logging::init(&config.logging)?;

    tracing::info!("Starting NeuroLens site v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("UI bundle directory: {:?}", config.server.dist_dir);

    serve(AppState::new(config.server)).await?;

    tracing::info!("NeuroLens site stopped");
    Ok(())
}

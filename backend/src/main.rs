use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dogtrainr_backend::{rest, Backend};

/// Data directory: `DOGTRAINR_DATA_DIR` if set, otherwise the platform
/// data dir (e.g. `~/.local/share/dogtrainr`).
fn resolve_data_directory() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var("DOGTRAINR_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("could not determine a platform data directory")?;
    Ok(base.join("dogtrainr"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_directory = resolve_data_directory()?;
    info!("Using data directory {}", data_directory.display());
    let backend = Backend::new(&data_directory)?;

    let app = rest::router(Arc::new(backend));

    let addr: SocketAddr = std::env::var("DOGTRAINR_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
        .parse()
        .context("DOGTRAINR_ADDR must be a socket address like 127.0.0.1:3001")?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

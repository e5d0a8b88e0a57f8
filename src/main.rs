mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // Missing .env is fine; real deployments set variables directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = HostConfig::from_env()?;
    if !config.index_path().is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "index.html not found; build the client bundle first");
    }

    let app = routes::app(&config.dist_dir);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, dist_dir = %config.dist_dir.display(), "bus-admin listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}

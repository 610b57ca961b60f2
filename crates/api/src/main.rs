use std::sync::Arc;

use anyhow::Context;

use gatekeeper_api::config::AppConfig;
use gatekeeper_auth::MemoryIdentityStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gatekeeper_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    // The real identity store is wired in by the deployment; dev runs start empty.
    tracing::warn!("using in-memory identity store");
    let store = Arc::new(MemoryIdentityStore::new());

    let app = gatekeeper_api::app::build_app(&config, store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}

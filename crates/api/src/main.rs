use std::sync::Arc;

use itemgate_api::config::GatewayConfig;
use itemgate_store::{EnvKeyProvider, InMemoryItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    itemgate_observability::init();

    if std::env::var("ITEMGATE_API_KEY").is_err() {
        tracing::warn!("ITEMGATE_API_KEY not set; every request will fail until it is configured");
    }

    let config = GatewayConfig::from_env();
    let store = Arc::new(InMemoryItemStore::new());
    let keys = Arc::new(EnvKeyProvider::new("ITEMGATE_API_KEY"));

    let app = itemgate_api::app::build_app(config, store, keys)?;

    let addr = std::env::var("ITEMGATE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

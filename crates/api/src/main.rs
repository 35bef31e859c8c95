use std::sync::Arc;

use anyhow::Context;
use shelflife_api::config::ApiConfig;
use shelflife_core::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelflife_observability::init();

    let config = ApiConfig::from_env()?;
    let app = shelflife_api::app::build_app(Arc::new(SystemClock));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::Arc;

use storefront_discovery::{
    api::{create_router, AppState},
    config::Config,
    db::{self, KeyValueStore, MemoryStore, SearchHistoryStore},
    services::providers::{CatalogProvider, PostgresCatalog, StaticCatalog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog: Arc<dyn CatalogProvider> = match (&config.database_url, &config.catalog_path) {
        (Some(database_url), _) => {
            let pool = db::create_pool(database_url).await?;
            Arc::new(PostgresCatalog::new(pool))
        }
        (None, Some(path)) => Arc::new(StaticCatalog::from_json_file(path).await?),
        (None, None) => {
            tracing::warn!("No DATABASE_URL or CATALOG_PATH configured, serving an empty catalog");
            Arc::new(StaticCatalog::default())
        }
    };

    let history_backend: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(redis_url) => {
            let client = db::create_redis_client(redis_url)?;
            Arc::new(db::RedisStore::connect(client).await?)
        }
        None => {
            tracing::warn!("No REDIS_URL configured, search history is kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    tracing::info!(
        catalog = catalog.name(),
        history = history_backend.name(),
        "Storage initialized"
    );

    let state = AppState::new(
        catalog,
        SearchHistoryStore::new(history_backend),
        config.price_ceiling,
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

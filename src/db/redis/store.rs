use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use redis::Client;

use crate::db::KeyValueStore;
use crate::error::StoreError;

/// Creates a Redis client for search history storage
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed key/value store
///
/// Holds a connection manager that reconnects transparently, so clones share
/// one multiplexed connection.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and wraps the connection in a manager
    pub async fn connect(client: Client) -> Result<Self, StoreError> {
        let manager = ConnectionManager::new(client).await?;
        tracing::info!("Connected to Redis history store");
        Ok(Self { manager })
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis get failed");
            e
        })?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

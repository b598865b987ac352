pub mod history;
pub mod memory;
pub mod postgres;
pub mod redis;
mod store;

pub use history::{HistoryKey, SearchHistoryStore};
pub use memory::MemoryStore;
pub use postgres::create_pool;
pub use self::redis::{create_redis_client, RedisStore};
pub use store::KeyValueStore;

#[cfg(test)]
pub use store::MockKeyValueStore;

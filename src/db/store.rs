use crate::error::StoreError;

/// Raw string key/value storage behind the search history store
///
/// Writes replace the whole value stored under a key. Values never expire.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}

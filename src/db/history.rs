use std::{fmt::Display, sync::Arc};

use crate::{
    db::KeyValueStore,
    error::{HistoryReadError, StoreError},
    models::SearchHistory,
};

/// Fixed namespace under which search histories are stored
pub const HISTORY_NAMESPACE: &str = "searchHistory";

/// Storage key of one session's search history
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryKey {
    session: String,
}

impl HistoryKey {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }
}

impl Display for HistoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", HISTORY_NAMESPACE, self.session)
    }
}

/// Typed access to persisted search histories
///
/// Stored values are JSON arrays of strings. [`read`](Self::read) never fails:
/// an absent, unreadable or malformed value is treated as an empty history.
#[derive(Clone)]
pub struct SearchHistoryStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SearchHistoryStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Reads the history for `key`, recovering any read error as empty
    pub async fn read(&self, key: &HistoryKey) -> SearchHistory {
        match self.try_read(key).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %key,
                    backend = self.backend.name(),
                    "Could not read search history, using empty history"
                );
                SearchHistory::new()
            }
        }
    }

    async fn try_read(&self, key: &HistoryKey) -> Result<SearchHistory, HistoryReadError> {
        let Some(json) = self.backend.get(&key.to_string()).await? else {
            return Ok(SearchHistory::new());
        };

        let terms: Vec<String> = serde_json::from_str(&json).map_err(HistoryReadError::Malformed)?;
        Ok(SearchHistory::from_terms(terms))
    }

    /// Replaces the stored history for `key`
    pub async fn write(&self, key: &HistoryKey, history: &SearchHistory) -> Result<(), StoreError> {
        let json = serde_json::to_string(history)?;
        self.backend.set(&key.to_string(), json).await
    }

    /// Records a submitted search term and persists the updated history
    ///
    /// Blank terms leave the stored history untouched. A malformed stored value
    /// is replaced by a fresh history; when the backend cannot be read, nothing
    /// is written and the error is returned.
    pub async fn record(&self, key: &HistoryKey, term: &str) -> Result<SearchHistory, StoreError> {
        let mut history = match self.try_read(key).await {
            Ok(history) => history,
            Err(HistoryReadError::Malformed(e)) => {
                tracing::warn!(error = %e, key = %key, "Replacing malformed search history");
                SearchHistory::new()
            }
            Err(HistoryReadError::Unavailable(e)) => return Err(e),
        };
        if history.record(term) {
            self.write(key, &history).await?;
            tracing::debug!(key = %key, terms = history.len(), "Search term recorded");
        }
        Ok(history)
    }
}

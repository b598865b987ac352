use serde::Serialize;
use std::sync::Arc;

use crate::{
    db::{HistoryKey, SearchHistoryStore},
    error::{AppError, AppResult},
    models::{FilterSpec, Product, SearchHistory},
    services::{filter, providers::CatalogProvider},
};

/// Result of a submitted search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Session history after recording the query
    pub history: SearchHistory,
    /// Catalog products matching the query
    pub products: Vec<Product>,
}

/// Lists the catalog narrowed by a filter spec
pub async fn list_products(
    provider: Arc<dyn CatalogProvider>,
    spec: &FilterSpec,
) -> AppResult<Vec<Product>> {
    let catalog = provider.get_all_products().await?;
    let products = filter::apply(&catalog, spec);

    tracing::debug!(
        provider = provider.name(),
        catalog_size = catalog.len(),
        matched = products.len(),
        "Catalog filtered"
    );

    Ok(products)
}

/// Records a search in the session history and returns matching products
///
/// A failure to persist the term is logged and does not fail the search.
pub async fn submit_search(
    provider: Arc<dyn CatalogProvider>,
    history_store: &SearchHistoryStore,
    key: &HistoryKey,
    query: &str,
) -> AppResult<SearchOutcome> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query must not be empty".to_string(),
        ));
    }

    let history = match history_store.record(key, query).await {
        Ok(history) => history,
        Err(e) => {
            tracing::error!(error = %e, key = %key, "Could not save search term");
            history_store.read(key).await
        }
    };

    let products = list_products(provider, &FilterSpec::with_query(query)).await?;

    Ok(SearchOutcome { history, products })
}

use std::sync::Arc;

use crate::{
    db::{MemoryStore, SearchHistoryStore},
    models::{PriceRange, Product, DEFAULT_PRICE_CEILING},
    services::providers::{CatalogProvider, StaticCatalog},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub history: SearchHistoryStore,
    /// Upper bound of the price filter slider, always positive
    pub price_ceiling: f64,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        history: SearchHistoryStore,
        price_ceiling: f64,
    ) -> Self {
        Self {
            catalog,
            history,
            price_ceiling: PriceRange::effective_ceiling(price_ceiling),
        }
    }

    /// State backed entirely by process memory
    pub fn in_memory(products: Vec<Product>) -> Self {
        Self::new(
            Arc::new(StaticCatalog::new(products)),
            SearchHistoryStore::new(Arc::new(MemoryStore::new())),
            DEFAULT_PRICE_CEILING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(price_ceiling: f64) -> AppState {
        AppState::new(
            Arc::new(StaticCatalog::new(vec![])),
            SearchHistoryStore::new(Arc::new(MemoryStore::new())),
            price_ceiling,
        )
    }

    #[test]
    fn test_non_positive_ceiling_uses_default() {
        assert_eq!(state(0.0).price_ceiling, DEFAULT_PRICE_CEILING);
        assert_eq!(state(-10.0).price_ceiling, DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn test_positive_ceiling_is_kept() {
        assert_eq!(state(250.0).price_ceiling, 250.0);
    }
}

//! Catalog data provider abstraction
//!
//! The catalog may live in Postgres or be seeded in memory from a JSON file.
//! Both engines consume the already-resolved product list, so providers only
//! need to hand back the whole catalog.

use crate::{error::CatalogError, models::Product};

pub mod postgres;
pub mod static_catalog;

pub use postgres::PostgresCatalog;
pub use static_catalog::StaticCatalog;

/// Trait for catalog providers
///
/// Called at most once per listing or recommendation request. Caching is not
/// the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches every product in catalog order
    async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

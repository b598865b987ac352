use std::path::Path;

use crate::{error::CatalogError, models::Product, services::providers::CatalogProvider};

/// In-memory product catalog
///
/// Used when no database is configured, optionally seeded from a JSON array of
/// products on disk.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads a catalog from a JSON file containing an array of products
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            CatalogError::Unavailable(format!("reading {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            count = catalog.products.len(),
            "Seeded catalog from file"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        if let Some(p) = products.iter().find(|p| p.price.is_nan() || p.price < 0.0) {
            return Err(CatalogError::Malformed(format!(
                "product {}: negative price {}",
                p.id, p.price
            )));
        }

        Ok(Self { products })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StaticCatalog {
    async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

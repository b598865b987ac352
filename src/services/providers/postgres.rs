use sqlx::PgPool;
use std::collections::BTreeSet;

use crate::{
    error::CatalogError,
    models::{Category, Product, Size},
    services::providers::CatalogProvider,
};

/// Row shape of the `products` table
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: Option<String>,
    category: String,
    sizes: Vec<String>,
    price: f64,
}

impl TryFrom<ProductRow> for Product {
    type Error = CatalogError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category: Category = row
            .category
            .parse()
            .map_err(|e| CatalogError::Malformed(format!("product {}: {}", row.id, e)))?;

        let sizes: BTreeSet<Size> = row
            .sizes
            .iter()
            .map(|s| s.parse::<Size>())
            .collect::<Result<_, _>>()
            .map_err(|e| CatalogError::Malformed(format!("product {}: {}", row.id, e)))?;

        if row.price.is_nan() || row.price < 0.0 {
            return Err(CatalogError::Malformed(format!(
                "product {}: negative price {}",
                row.id, row.price
            )));
        }

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            category,
            sizes,
            price: row.price,
        })
    }
}

/// Postgres-backed product catalog
#[derive(Clone)]
pub struct PostgresCatalog {
    db_pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for PostgresCatalog {
    async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, category, sizes, price
            FROM products
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = products.len(), "Loaded catalog from database");

        Ok(products)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, sizes: &[&str], price: f64) -> ProductRow {
        ProductRow {
            id: "p1".to_string(),
            name: "Trail Runner".to_string(),
            description: None,
            category: category.to_string(),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            price,
        }
    }

    #[test]
    fn test_row_to_product() {
        let product = Product::try_from(row("Shoes", &["M", "L"], 89.0)).unwrap();
        assert_eq!(product.category, Category::Shoes);
        assert!(product.sizes.contains(&Size::M));
        assert!(product.sizes.contains(&Size::L));
        assert_eq!(product.price, 89.0);
    }

    #[test]
    fn test_row_with_unknown_category_is_malformed() {
        let err = Product::try_from(row("Hats", &[], 10.0)).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_row_with_unknown_size_is_malformed() {
        let err = Product::try_from(row("Tops", &["XXXL"], 10.0)).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_row_with_negative_price_is_malformed() {
        let err = Product::try_from(row("Tops", &["S"], -1.0)).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}

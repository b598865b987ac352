use crate::models::{FilterSpec, Product};

/// Applies a filter spec to a catalog
///
/// A product passes when it satisfies every constraint of the spec:
/// 1. Its category is one of the selected categories (or none are selected)
/// 2. It is stocked in at least one selected size (or none are selected)
/// 3. Its price lies within the price range, inclusive on both ends
/// 4. The query occurs, case-insensitively, in its name or description
///
/// The result keeps catalog order. An inverted price range matches nothing.
pub fn apply(catalog: &[Product], spec: &FilterSpec) -> Vec<Product> {
    if spec.price_range.is_inverted() {
        tracing::debug!(
            min = spec.price_range.min,
            max = spec.price_range.max,
            "Inverted price range, filter matches nothing"
        );
        return Vec::new();
    }

    let query = spec.normalized_query();

    catalog
        .iter()
        .filter(|product| passes(product, spec, query.as_deref()))
        .cloned()
        .collect()
}

/// `query` must already be lowercased
fn passes(product: &Product, spec: &FilterSpec, query: Option<&str>) -> bool {
    let category_ok = spec.categories.is_empty() || spec.categories.contains(&product.category);
    let size_ok =
        spec.sizes.is_empty() || product.sizes.iter().any(|size| spec.sizes.contains(size));
    let price_ok = spec.price_range.contains(product.price);
    let query_ok = query.map_or(true, |q| product.mentions(q));

    category_ok && size_ok && price_ok && query_ok
}

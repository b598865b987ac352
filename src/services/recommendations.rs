use std::sync::Arc;

use crate::{
    db::{HistoryKey, SearchHistoryStore},
    models::Recommendation,
    services::{providers::CatalogProvider, recommender},
};

/// Generates recommendations for one session
///
/// Fetches the catalog once, reads the session's search history and ranks the
/// catalog against it. A catalog failure is logged and yields an empty
/// recommendation so the caller simply hides the section.
pub async fn get_recommendations(
    provider: Arc<dyn CatalogProvider>,
    history_store: &SearchHistoryStore,
    key: &HistoryKey,
) -> Recommendation {
    let catalog = match provider.get_all_products().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(
                error = %e,
                provider = provider.name(),
                "Catalog fetch failed, skipping recommendations"
            );
            return Recommendation::empty();
        }
    };

    let history = history_store.read(key).await;
    let recommendation = recommender::recommend(&catalog, &history);

    tracing::info!(
        kind = ?recommendation.kind,
        count = recommendation.products.len(),
        catalog_size = catalog.len(),
        history_terms = history.len(),
        "Recommendations computed"
    );

    recommendation
}

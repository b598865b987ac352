use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::{collections::HashSet, hash::Hash, str::FromStr};

use crate::{
    error::{AppError, AppResult},
    middleware::session::SessionId,
    models::{
        Category, FilterSpec, PriceRange, Product, RecommendationKind, SearchHistory, Size,
    },
    services::{catalog, recommendations},
};

use super::AppState;

// Request/Response types

/// Query parameters of the product listing
///
/// `categories` and `sizes` are comma separated lists.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub categories: Option<String>,
    pub sizes: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub q: Option<String>,
}

impl FilterParams {
    /// Validates the parameters and builds the filter spec
    ///
    /// Price bounds follow the filter slider: once either bound is given, the
    /// range is clamped to `[0, price_ceiling]`.
    pub fn into_spec(self, price_ceiling: f64) -> AppResult<FilterSpec> {
        let price_ceiling = PriceRange::effective_ceiling(price_ceiling);
        let categories = parse_list::<Category>(self.categories.as_deref())?;
        let sizes = parse_list::<Size>(self.sizes.as_deref())?;

        if self.min_price.is_some_and(|p| p < 0.0) || self.max_price.is_some_and(|p| p < 0.0) {
            return Err(AppError::InvalidInput(
                "Prices must not be negative".to_string(),
            ));
        }

        let price_range = match (self.min_price, self.max_price) {
            (None, None) => PriceRange::unbounded(),
            (min, max) => {
                let min = min.unwrap_or(0.0);
                let max = max.unwrap_or(price_ceiling);
                if min > max {
                    return Err(AppError::InvalidInput(format!(
                        "min_price {} exceeds max_price {}",
                        min, max
                    )));
                }
                PriceRange::clamped(min, max, price_ceiling)
            }
        };

        Ok(FilterSpec {
            categories,
            sizes,
            price_range,
            query: self.q,
        })
    }
}

fn parse_list<T>(raw: Option<&str>) -> AppResult<HashSet<T>>
where
    T: FromStr<Err = String> + Eq + Hash,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(AppError::InvalidInput))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub price_ceiling: f64,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub kind: RecommendationKind,
    pub title: &'static str,
    pub products: Vec<Product>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// List products narrowed by the filter query parameters
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<Vec<Product>>> {
    let spec = params.into_spec(state.price_ceiling)?;
    let products = catalog::list_products(state.catalog.clone(), &spec).await?;
    Ok(Json(products))
}

/// Selectable filter values
pub async fn filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    Json(FilterOptionsResponse {
        categories: Category::ALL.to_vec(),
        sizes: Size::ALL.to_vec(),
        price_ceiling: state.price_ceiling,
    })
}

/// Submit a search; records the term in the session history
pub async fn submit_search(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<catalog::SearchOutcome>> {
    tracing::info!(session_id = %session_id, "Processing search submission");

    let outcome = catalog::submit_search(
        state.catalog.clone(),
        &state.history,
        &session_id.history_key(),
        &request.query,
    )
    .await?;

    Ok(Json(outcome))
}

/// Get the session's recent search terms
pub async fn get_history(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<SearchHistory> {
    Json(state.history.read(&session_id.history_key()).await)
}

/// Get recommendations for the session; never fails
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<RecommendationResponse> {
    let recommendation = recommendations::get_recommendations(
        state.catalog.clone(),
        &state.history,
        &session_id.history_key(),
    )
    .await;

    Json(RecommendationResponse {
        kind: recommendation.kind,
        title: recommendation.kind.title(),
        products: recommendation.products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_build_cleared_spec() {
        let spec = FilterParams::default().into_spec(500.0).unwrap();
        assert_eq!(spec, FilterSpec::cleared());
    }

    #[test]
    fn test_lists_are_parsed() {
        let params = FilterParams {
            categories: Some("Shoes, tops".to_string()),
            sizes: Some("M,,XL".to_string()),
            ..FilterParams::default()
        };
        let spec = params.into_spec(500.0).unwrap();
        assert_eq!(spec.categories, HashSet::from([Category::Shoes, Category::Tops]));
        assert_eq!(spec.sizes, HashSet::from([Size::M, Size::XL]));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let params = FilterParams {
            categories: Some("Hats".to_string()),
            ..FilterParams::default()
        };
        assert!(matches!(
            params.into_spec(500.0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_inverted_prices_are_rejected() {
        let params = FilterParams {
            min_price: Some(80.0),
            max_price: Some(20.0),
            ..FilterParams::default()
        };
        assert!(params.into_spec(500.0).is_err());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let params = FilterParams {
            min_price: Some(-1.0),
            ..FilterParams::default()
        };
        assert!(params.into_spec(500.0).is_err());
    }

    #[test]
    fn test_prices_are_clamped_to_ceiling() {
        let params = FilterParams {
            min_price: Some(10.0),
            max_price: Some(900.0),
            ..FilterParams::default()
        };
        let spec = params.into_spec(300.0).unwrap();
        assert_eq!(spec.price_range, PriceRange::new(10.0, 300.0));
    }

    #[test]
    fn test_min_only_extends_to_ceiling() {
        let params = FilterParams {
            min_price: Some(50.0),
            ..FilterParams::default()
        };
        let spec = params.into_spec(500.0).unwrap();
        assert_eq!(spec.price_range, PriceRange::new(50.0, 500.0));
    }

    #[test]
    fn test_min_only_with_unset_ceiling() {
        let params = FilterParams {
            min_price: Some(50.0),
            ..FilterParams::default()
        };
        let spec = params.into_spec(0.0).unwrap();
        assert_eq!(spec.price_range, PriceRange::new(50.0, 500.0));
    }
}

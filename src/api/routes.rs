use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::session::{make_span_with_session_id, session_middleware};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(session_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_session_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::list_products))
        .route("/filters", get(handlers::filter_options))
        .route("/search", post(handlers::submit_search))
        .route("/search/history", get(handlers::get_history))
        .route("/recommendations", get(handlers::get_recommendations))
}

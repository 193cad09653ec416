//! HTTP routes

pub mod destinations;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::CacheStats;
use crate::{pricing, AppState};

/// Build the application router
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/destinations", get(destinations::list))
        .route("/destinations/:id", get(destinations::detail))
        .route("/categories", get(destinations::categories))
        .route("/experiences", get(destinations::experiences))
        .route("/cache/stats", get(cache_stats))
        .merge(pricing::router());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

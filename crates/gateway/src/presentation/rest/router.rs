use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::ports::CatalogFetcher;
use crate::infrastructure::GatewayConfig;

/// Application state shared across handlers.
///
/// Everything here is immutable after startup, so any number of requests
/// may read it concurrently without locking.
pub struct AppState {
    pub config: GatewayConfig,
    pub fetcher: Arc<dyn CatalogFetcher>,
}

impl AppState {
    pub fn new(config: GatewayConfig, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        AppState { config, fetcher }
    }
}

/// Create the REST router serving the internal catalog routes.
///
/// Static segments (`/tv/popular`) take priority over the parameterized
/// detail routes (`/tv/{id}`), so both can coexist.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/trending/{media_type}/{window}", get(handlers::trending))
        .route("/movies/popular", get(handlers::popular_movies))
        .route("/movies/top-rated", get(handlers::top_rated_movies))
        .route("/movies/upcoming", get(handlers::upcoming_movies))
        .route("/movies/now-playing", get(handlers::now_playing_movies))
        .route("/movie/{id}", get(handlers::movie_details))
        .route("/tv/{id}", get(handlers::tv_details))
        .route("/tv/popular", get(handlers::popular_tv))
        .route("/tv/top-rated", get(handlers::top_rated_tv))
        .route("/search", get(handlers::search))
        .route("/genres/movie", get(handlers::movie_genres))
        .route("/genres/tv", get(handlers::tv_genres))
        .route("/discover/movie", get(handlers::discover_movies))
        .route("/health", get(handlers::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

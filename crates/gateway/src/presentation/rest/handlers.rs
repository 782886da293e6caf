use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use std::sync::Arc;

use marquee_core::{CallerInput, CatalogQuery, RouteDescriptor, route};

use super::AppState;
use super::dto::{DiscoverParams, HealthResponse, PageParams, SearchParams};
use super::error::ApiError;

/// Run one upstream call and forward the decoded body verbatim.
///
/// Any upstream fault becomes the descriptor's generic failure message;
/// the fault detail was already recorded by the client's diagnostics.
async fn forward(
    state: &AppState,
    descriptor: &RouteDescriptor,
    query: CatalogQuery,
) -> Result<Json<Value>, ApiError> {
    state
        .fetcher
        .fetch(query)
        .await
        .map(Json)
        .map_err(|_| ApiError::upstream(descriptor.failure_message))
}

/// Apply the descriptor's parameter policy and perform the call.
async fn dispatch(
    state: &AppState,
    descriptor: &RouteDescriptor,
    input: CallerInput,
) -> Result<Json<Value>, ApiError> {
    let query = descriptor.build_query(input)?;
    forward(state, descriptor, query).await
}

/// GET /trending/{media_type}/{window}
///
/// Path segments are forwarded verbatim; invalid values surface as an
/// upstream fault, matching the upstream's own validation.
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Path((media_type, window)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let input = CallerInput {
        segments: vec![media_type, window],
        ..Default::default()
    };
    dispatch(&state, &route::TRENDING, input).await
}

/// GET /movies/popular
pub async fn popular_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::MOVIES_POPULAR, params.into()).await
}

/// GET /movies/top-rated
pub async fn top_rated_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::MOVIES_TOP_RATED, params.into()).await
}

/// GET /movies/upcoming
pub async fn upcoming_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::MOVIES_UPCOMING, params.into()).await
}

/// GET /movies/now-playing
pub async fn now_playing_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::MOVIES_NOW_PLAYING, params.into()).await
}

/// GET /movie/{id}
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let input = CallerInput {
        segments: vec![id],
        ..Default::default()
    };
    dispatch(&state, &route::MOVIE_DETAILS, input).await
}

/// GET /tv/{id}
pub async fn tv_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let input = CallerInput {
        segments: vec![id],
        ..Default::default()
    };
    dispatch(&state, &route::TV_DETAILS, input).await
}

/// GET /tv/popular
pub async fn popular_tv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::TV_POPULAR, params.into()).await
}

/// GET /tv/top-rated
pub async fn top_rated_tv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::TV_TOP_RATED, params.into()).await
}

/// GET /search
///
/// Rejected before any upstream call when `query` is absent or empty.
/// `page` is forwarded as received, unvalidated.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let input = CallerInput {
        query: params.query,
        page: params.page,
        ..Default::default()
    };
    dispatch(&state, &route::SEARCH, input).await
}

/// GET /genres/movie
pub async fn movie_genres(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::GENRES_MOVIE, CallerInput::default()).await
}

/// GET /genres/tv
pub async fn tv_genres(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    dispatch(&state, &route::GENRES_TV, CallerInput::default()).await
}

/// GET /discover/movie
pub async fn discover_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DiscoverParams>,
) -> Result<Json<Value>, ApiError> {
    let input = CallerInput {
        with_genres: params.with_genres,
        page: params.page,
        ..Default::default()
    };
    dispatch(&state, &route::DISCOVER_MOVIE, input).await
}

/// GET /health
///
/// Never touches the upstream; reports process readiness and whether the
/// upstream credential is usable.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.config.api_key_configured()))
}

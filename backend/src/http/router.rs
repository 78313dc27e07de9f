//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{
    constellations::GET_CONSTELLATIONS, moon::GET_MOON, sky_data::GET_SKY_DATA,
    stars::GET_STARS, HEALTH, INDEX, STATIC_ASSETS,
};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin, method and header; the API is read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir)
        .not_found_service(handlers::not_found.into_service());

    Router::new()
        .route(HEALTH, get(handlers::health_check))
        .route(GET_STARS, get(handlers::get_stars))
        .route(GET_CONSTELLATIONS, get(handlers::get_constellations))
        .route(GET_MOON, get(handlers::get_moon))
        .route(GET_SKY_DATA, get(handlers::get_sky_data))
        .route_service(INDEX, index)
        .nest_service(STATIC_ASSETS, assets)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

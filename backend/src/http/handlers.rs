//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! [`SkyService`](crate::services::SkyService) held in the application state.
//! The computation is CPU-bound, so it runs on the blocking pool.

use axum::{extract::State, Json};

use super::dto::{ConstellationsResponse, HealthResponse, MoonRecord, SkyData, StarsResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Sky endpoints
// =============================================================================

/// GET /api/stars
///
/// Every catalog star with its horizon position, visible or not.
pub async fn get_stars(State(state): State<AppState>) -> HandlerResult<StarsResponse> {
    let sky = state.sky.clone();

    let stars = tokio::task::spawn_blocking(move || sky.get_stars())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(StarsResponse { stars }))
}

/// GET /api/constellations
///
/// Highlighted constellation figures keyed by name.
pub async fn get_constellations(
    State(state): State<AppState>,
) -> HandlerResult<ConstellationsResponse> {
    let sky = state.sky.clone();

    let constellations = tokio::task::spawn_blocking(move || sky.get_constellations())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(ConstellationsResponse { constellations }))
}

/// GET /api/moon
pub async fn get_moon(State(state): State<AppState>) -> HandlerResult<MoonRecord> {
    let sky = state.sky.clone();

    let moon = tokio::task::spawn_blocking(move || sky.get_moon())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(moon))
}

/// GET /api/sky-data
///
/// Stars, constellations and Moon in one payload, with the observation labels.
pub async fn get_sky_data(State(state): State<AppState>) -> HandlerResult<SkyData> {
    let sky = state.sky.clone();

    let data = tokio::task::spawn_blocking(move || sky.get_sky_data())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(data))
}

/// Fallback for any path without a route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

//! HTTP route handlers

mod analysis;
mod query;
mod shapes;
mod tiling;

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use ndgeo_core::GeometryError;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{ApiError, AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// What the engine can do, as reported by `/api/health`
#[derive(Debug, Serialize)]
pub struct CapabilitiesResponse {
    pub status: String,
    pub geometry_engine: String,
    pub supported_dimensions: String,
    pub supported_shapes: Vec<&'static str>,
    pub supported_tilings: Vec<&'static str>,
    pub features: Vec<&'static str>,
}

async fn capabilities(State(state): State<Arc<AppState>>) -> Json<CapabilitiesResponse> {
    Json(CapabilitiesResponse {
        status: "healthy".to_string(),
        geometry_engine: "operational".to_string(),
        supported_dimensions: format!("1-{}", state.config.max_dimensions),
        supported_shapes: vec!["hypersphere", "hypercube", "ellipsoid", "simplex", "pyramid"],
        supported_tilings: vec!["regular", "hexagonal", "voronoi"],
        features: vec![
            "natural_language_queries",
            "sphere_cube_comparison",
            "dimension_profiles",
            "tiling_analysis",
            "classic_sphere",
        ],
    })
}

/// Rejects dimension counts outside `1..=max_dimensions`
pub(crate) fn check_dimensions(state: &AppState, dimensions: usize) -> Result<(), ApiError> {
    if dimensions == 0 {
        return Err(GeometryError::InvalidDimensions { dimensions }.into());
    }
    let max = state.config.max_dimensions;
    if dimensions > max {
        return Err(GeometryError::DimensionLimitExceeded { dimensions, max }.into());
    }
    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        .route("/health", get(health))
        .route("/api/health", get(capabilities))
        .route("/api/sphere", post(shapes::sphere))
        .route("/api/cube", post(shapes::cube))
        .route("/api/ellipsoid", post(shapes::ellipsoid))
        .route("/api/simplex", post(shapes::simplex))
        .route("/api/pyramid", post(shapes::pyramid))
        .route("/api/classic-sphere", post(shapes::classic_sphere))
        .route("/api/query", post(query::query))
        .route("/api/compare", post(analysis::compare))
        .route("/api/dimensions/:dimensions", get(analysis::dimensions))
        .route("/api/tiling", post(tiling::tiling))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

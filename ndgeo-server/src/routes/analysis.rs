//! Comparison and per-dimension analysis routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use ndgeo_core::compare::{CubeSummary, Insights, Ratios, ShapeSummary};
use ndgeo_core::{compare_sphere_cube, dimension_profile, DimensionProfile};
use serde::{Deserialize, Serialize};

use super::check_dimensions;
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub dimensions: usize,
    /// Sphere radius and cube side length
    pub parameter: f64,
}

#[derive(Debug, Serialize)]
pub struct ComparisonData {
    pub sphere: ShapeSummary,
    pub cube: CubeSummary,
    pub ratios: Ratios,
    pub insights: Insights,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub dimensions: usize,
    pub parameter: f64,
    pub sphere_volume: f64,
    pub sphere_surface: f64,
    pub comparison_data: ComparisonData,
}

/// Sphere of radius p against cube of side p
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ComparisonRequest>,
) -> Result<Json<ComparisonResponse>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let comparison = compare_sphere_cube(req.dimensions, req.parameter)?;

    Ok(Json(ComparisonResponse {
        dimensions: comparison.dimensions,
        parameter: comparison.parameter,
        sphere_volume: comparison.sphere.volume,
        sphere_surface: comparison.sphere.surface_area,
        comparison_data: ComparisonData {
            sphere: comparison.sphere,
            cube: comparison.cube,
            ratios: comparison.ratios,
            insights: comparison.insights,
        },
    }))
}

pub async fn dimensions(
    State(state): State<Arc<AppState>>,
    Path(dimensions): Path<usize>,
) -> Result<Json<DimensionProfile>, ApiError> {
    check_dimensions(&state, dimensions)?;
    Ok(Json(dimension_profile(dimensions)?))
}

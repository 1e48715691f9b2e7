//! Tiling generation route

use std::sync::Arc;

use axum::{extract::State, response::Json};
use ndgeo_core::tiling::PatternProperties;
use ndgeo_core::{GeometryError, PatternAnalysis, Tile, TilingAnalyzer, TilingRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::check_dimensions;
use crate::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct TilingResponse {
    pub tiling_type: String,
    pub dimensions: usize,
    pub tile_count: usize,
    pub coverage_efficiency: f64,
    pub pattern_properties: PatternProperties,
    pub tiles: Vec<Tile>,
    pub analysis: PatternAnalysis,
}

/// Build, generate and analyze one tiling.
///
/// The tile count is estimated first so oversized regions are refused
/// before any tile is allocated.
pub async fn tiling(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TilingRequest>,
) -> Result<Json<TilingResponse>, ApiError> {
    check_dimensions(&state, req.dimensions)?;

    let limit = state.config.max_tiles;
    let estimated = req.estimated_tile_count()?;
    if estimated > limit {
        return Err(GeometryError::TileLimitExceeded { estimated, limit }.into());
    }

    let mut rng = match state.config.rng_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let pattern = req.generate(&mut rng)?;
    let analysis = TilingAnalyzer::new(&pattern).analyze();

    tracing::debug!(
        tiling_type = %req.tiling_type,
        tiles = pattern.tile_count(),
        "Generated tiling"
    );

    Ok(Json(TilingResponse {
        tiling_type: req.tiling_type,
        dimensions: req.dimensions,
        tile_count: pattern.tile_count(),
        coverage_efficiency: pattern.coverage_efficiency(),
        pattern_properties: pattern.pattern_properties(),
        tiles: pattern.tiles().to_vec(),
        analysis,
    }))
}

//! Hexagonal tessellation of the plane

use std::f64::consts::PI;

use rand::RngCore;

use super::{
    axis_points, axis_steps, BaseShape, Bounds, PatternType, Rotation, Tile, TileLayout, TileShape,
    NO_BASE_SHAPE,
};
use crate::error::Result;
use crate::shapes::validate_positive;

/// Flat-topped hexagons in offset rows (2D only)
#[derive(Debug, Clone)]
pub struct HexagonalTiling {
    side_length: f64,
}

impl HexagonalTiling {
    pub fn new(side_length: f64) -> Result<Self> {
        validate_positive("Side length", side_length)?;
        Ok(Self { side_length })
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Horizontal and vertical centre spacing at `density`
    fn steps(&self, density: f64) -> (f64, f64) {
        let width = 2.0 * self.side_length;
        let height = self.side_length * 3f64.sqrt();
        (width * 0.75 / density, height / density)
    }
}

/// Corners at 60° increments starting on the +x axis
fn hexagon_vertices(cx: f64, cy: f64, radius: f64) -> Vec<Vec<f64>> {
    (0..6)
        .map(|i| {
            let angle = i as f64 * PI / 3.0;
            vec![cx + radius * angle.cos(), cy + radius * angle.sin()]
        })
        .collect()
}

impl TileLayout for HexagonalTiling {
    fn pattern_type(&self) -> PatternType {
        PatternType::Hexagonal
    }

    fn dimensions(&self) -> usize {
        2
    }

    fn base_shape(&self) -> &BaseShape {
        NO_BASE_SHAPE
    }

    fn generate(&self, bounds: &Bounds, density: f64, _rng: &mut dyn RngCore) -> Result<Vec<Tile>> {
        let (step_x, step_y) = self.steps(density);
        let side = self.side_length * density;
        let (x_min, x_max) = bounds.axes()[0];
        let (y_min, y_max) = bounds.axes()[1];

        let mut tiles = Vec::new();
        for (row, y) in axis_points(y_min, y_max, step_y).enumerate() {
            let offset = if row % 2 == 1 { step_x / 2.0 } else { 0.0 };
            for x in axis_points(x_min + offset, x_max, step_x) {
                let tile = Tile::new(vec![x, y], TileShape::Hexagon, density)
                    .with_rotation(Rotation::Angle(0.0))
                    .with_side_length(side)
                    .with_vertices(hexagon_vertices(x, y, side));
                tiles.push(tile);
            }
        }
        Ok(tiles)
    }

    fn coverage_efficiency(&self, _tiles: &[Tile], _bounds: &Bounds) -> f64 {
        1.0
    }

    fn estimated_tile_count(&self, bounds: &Bounds, density: f64) -> u64 {
        let (step_x, step_y) = self.steps(density);
        let (x_min, x_max) = bounds.axes()[0];
        let (y_min, y_max) = bounds.axes()[1];
        (axis_steps(x_min, x_max, step_x) as f64 * axis_steps(y_min, y_max, step_y) as f64) as u64
    }
}

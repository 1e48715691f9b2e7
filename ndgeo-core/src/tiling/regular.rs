//! Regular tilings: congruent copies of one base shape on a lattice.
//!
//! | Dimensions | Base | Layout |
//! |------------|------|--------|
//! | 2 | cube | square grid |
//! | 2 | simplex | offset rows, alternate rows rotated 180° |
//! | 2 | sphere | offset rows (hexagonal packing) |
//! | 3 | cube | cubic grid |
//! | 3 | sphere | alternating A/B square layers |
//! | 2, 3 | other | no tiles |
//! | 1, ≥4 | any | Cartesian grid |

use rand::RngCore;

use super::{
    axis_points, axis_steps, BaseShape, Bounds, PatternType, Rotation, Tile, TileLayout, TileShape,
};
use crate::error::{GeometryError, Result};
use crate::shapes::{validate_positive, NdShape};

/// Row pitch of triangular/hexagonal rows relative to the in-row spacing
fn row_pitch() -> f64 {
    3f64.sqrt() / 2.0
}

/// Layer pitch of stacked sphere layers relative to the in-layer spacing
fn layer_pitch() -> f64 {
    (2.0f64 / 3.0).sqrt()
}

#[derive(Debug, Clone)]
pub struct RegularTiling {
    base_shape: BaseShape,
    tag: TileShape,
    dimensions: usize,
    spacing: f64,
}

impl RegularTiling {
    /// Tile `base_shape` at its natural spacing: cube and simplex side, sphere diameter
    pub fn new(base_shape: BaseShape) -> Result<Self> {
        let (tag, dimensions, spacing) = match &base_shape {
            BaseShape::Cube(c) => (TileShape::Cube, c.dimensions(), c.side_length()),
            BaseShape::Sphere(s) => (TileShape::Sphere, s.dimensions(), s.diameter()),
            BaseShape::Simplex(s) => (TileShape::Simplex, s.dimensions(), s.side_length()),
            BaseShape::None => {
                return Err(GeometryError::MissingParameter {
                    pattern: PatternType::Regular.display_name().to_string(),
                    parameter: "a base shape".to_string(),
                })
            }
        };
        Ok(Self {
            base_shape,
            tag,
            dimensions,
            spacing,
        })
    }

    /// Override the base spacing (before density is applied)
    pub fn with_spacing(mut self, spacing: f64) -> Result<Self> {
        validate_positive("Spacing", spacing)?;
        self.spacing = spacing;
        Ok(self)
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    fn tile(&self, position: Vec<f64>, rotation: Rotation, density: f64) -> Tile {
        Tile::new(position, self.tag, density).with_rotation(rotation)
    }

    fn square_grid(&self, bounds: &Bounds, spacing: f64, density: f64) -> Vec<Tile> {
        let [(x_min, x_max), (y_min, y_max)] = axes2(bounds);
        let mut tiles = Vec::new();
        for x in axis_points(x_min, x_max, spacing) {
            for y in axis_points(y_min, y_max, spacing) {
                tiles.push(self.tile(vec![x, y], Rotation::Angle(0.0), density));
            }
        }
        tiles
    }

    /// Rows `spacing·√3/2` apart, odd rows shifted by half a step
    fn offset_rows(&self, bounds: &Bounds, spacing: f64, density: f64, flip_odd: bool) -> Vec<Tile> {
        let [(x_min, x_max), (y_min, y_max)] = axes2(bounds);
        let mut tiles = Vec::new();
        for (row, y) in axis_points(y_min, y_max, spacing * row_pitch()).enumerate() {
            let odd = row % 2 == 1;
            let offset = if odd { spacing / 2.0 } else { 0.0 };
            let angle = if odd && flip_odd { 180.0 } else { 0.0 };
            for x in axis_points(x_min + offset, x_max, spacing) {
                tiles.push(self.tile(vec![x, y], Rotation::Angle(angle), density));
            }
        }
        tiles
    }

    fn cubic_grid(&self, bounds: &Bounds, spacing: f64, density: f64) -> Vec<Tile> {
        let [(x_min, x_max), (y_min, y_max), (z_min, z_max)] = axes3(bounds);
        let mut tiles = Vec::new();
        for x in axis_points(x_min, x_max, spacing) {
            for y in axis_points(y_min, y_max, spacing) {
                for z in axis_points(z_min, z_max, spacing) {
                    tiles.push(self.tile(vec![x, y, z], Rotation::zero(3), density));
                }
            }
        }
        tiles
    }

    /// A layers on the square grid, B layers shifted by half a step in x and y
    fn layered_spheres(&self, bounds: &Bounds, spacing: f64, density: f64) -> Vec<Tile> {
        let [(x_min, x_max), (y_min, y_max), (z_min, z_max)] = axes3(bounds);
        let mut tiles = Vec::new();
        for (layer, z) in axis_points(z_min, z_max, spacing * layer_pitch()).enumerate() {
            let offset = if layer % 2 == 1 { spacing / 2.0 } else { 0.0 };
            for x in axis_points(x_min + offset, x_max, spacing) {
                for y in axis_points(y_min + offset, y_max, spacing) {
                    tiles.push(self.tile(vec![x, y, z], Rotation::zero(3), density));
                }
            }
        }
        tiles
    }

    /// Every lattice point, first axis outermost
    fn cartesian_grid(&self, bounds: &Bounds, spacing: f64, density: f64) -> Vec<Tile> {
        let axes: Vec<Vec<f64>> = bounds
            .axes()
            .iter()
            .map(|&(min, max)| axis_points(min, max, spacing).collect())
            .collect();
        if axes.iter().any(Vec::is_empty) {
            return Vec::new();
        }

        let n = axes.len();
        let mut index = vec![0usize; n];
        let mut tiles = Vec::new();
        loop {
            let position = index.iter().zip(&axes).map(|(&i, a)| a[i]).collect();
            tiles.push(self.tile(position, Rotation::zero(n), density));

            // odometer increment, last axis fastest
            let mut axis = n;
            loop {
                if axis == 0 {
                    return tiles;
                }
                axis -= 1;
                index[axis] += 1;
                if index[axis] < axes[axis].len() {
                    break;
                }
                index[axis] = 0;
            }
        }
    }
}

fn axes2(bounds: &Bounds) -> [(f64, f64); 2] {
    let a = bounds.axes();
    [a[0], a[1]]
}

fn axes3(bounds: &Bounds) -> [(f64, f64); 3] {
    let a = bounds.axes();
    [a[0], a[1], a[2]]
}

impl TileLayout for RegularTiling {
    fn pattern_type(&self) -> PatternType {
        PatternType::Regular
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn base_shape(&self) -> &BaseShape {
        &self.base_shape
    }

    fn generate(&self, bounds: &Bounds, density: f64, _rng: &mut dyn RngCore) -> Result<Vec<Tile>> {
        let spacing = self.spacing / density;
        let tiles = match (self.dimensions, self.tag) {
            (2, TileShape::Cube) => self.square_grid(bounds, spacing, density),
            (2, TileShape::Simplex) => self.offset_rows(bounds, spacing, density, true),
            (2, TileShape::Sphere) => self.offset_rows(bounds, spacing, density, false),
            (3, TileShape::Cube) => self.cubic_grid(bounds, spacing, density),
            (3, TileShape::Sphere) => self.layered_spheres(bounds, spacing, density),
            (2 | 3, _) => Vec::new(),
            _ => self.cartesian_grid(bounds, spacing, density),
        };
        Ok(tiles)
    }

    fn coverage_efficiency(&self, tiles: &[Tile], bounds: &Bounds) -> f64 {
        let total = bounds.hypervolume();
        if tiles.is_empty() || total <= 0.0 {
            return 0.0;
        }
        let covered = self.base_shape.volume().unwrap_or(0.0) * tiles.len() as f64;
        (covered / total).min(1.0)
    }

    fn estimated_tile_count(&self, bounds: &Bounds, density: f64) -> u64 {
        let spacing = self.spacing / density;
        let axes = bounds.axes();
        // the stacked axis of a layered layout uses the tighter pitch
        let stacked_step = match (self.dimensions, self.tag) {
            (2, TileShape::Simplex | TileShape::Sphere) => Some((1, spacing * row_pitch())),
            (3, TileShape::Sphere) => Some((2, spacing * layer_pitch())),
            (2, TileShape::Cube) | (3, TileShape::Cube) => None,
            // no layout rule, generation yields nothing
            (2 | 3, _) => return 0,
            _ => None,
        };
        let product: f64 = axes
            .iter()
            .enumerate()
            .map(|(axis, &(min, max))| {
                let step = match stacked_step {
                    Some((stacked, pitch)) if stacked == axis => pitch,
                    _ => spacing,
                };
                axis_steps(min, max, step) as f64
            })
            .product();
        product as u64
    }
}

//! Tiling patterns over bounded n-dimensional regions.
//!
//! A [`TilingPattern`] pairs a [`TileLayout`] (regular grid, hexagonal
//! tessellation or Voronoi seeds) with the tiles from its most recent
//! generation. Generation is all-or-nothing: on error the previous tiles and
//! bounds are kept.
//!
//! # Example
//!
//! ```rust
//! use ndgeo_core::tiling::{Bounds, RegularTiling, TilingAnalyzer, TilingPattern};
//! use ndgeo_core::{BaseShape, HyperCube};
//!
//! let cube = HyperCube::new(2, 1.0).unwrap();
//! let mut pattern = TilingPattern::new(RegularTiling::new(BaseShape::Cube(cube)).unwrap());
//!
//! let bounds = Bounds::new(vec![(0.0, 5.0), (0.0, 5.0)]).unwrap();
//! pattern.generate_pattern(bounds, 1.0).unwrap();
//! assert_eq!(pattern.tile_count(), 36);
//!
//! let analysis = TilingAnalyzer::new(&pattern).analyze();
//! assert_eq!(analysis.mathematical_properties.vertex_configuration, "4.4.4.4");
//! ```

pub mod analyzer;
pub mod hexagonal;
pub mod regular;
pub mod request;
pub mod voronoi;

use std::fmt;
use std::str::FromStr;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::shapes::{HyperCube, HyperSphere, NdShape, Simplex};

pub use analyzer::{MathematicalProperties, PatternAnalysis, SymmetryProperties, TilingAnalyzer};
pub use hexagonal::HexagonalTiling;
pub use regular::RegularTiling;
pub use request::TilingRequest;
pub use voronoi::VoronoiTiling;

/// Base shape of layouts that don't repeat a closed-form shape
pub(crate) const NO_BASE_SHAPE: &BaseShape = &BaseShape::None;

/// Relative slack for grid counting, so `max` itself is not lost to rounding
pub(crate) const GRID_EPSILON: f64 = 1e-12;

/// Evenly spaced coordinates `start, start + step, ...` that do not pass `max`
pub(crate) fn axis_points(start: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..axis_steps(start, max, step)).map(move |i| start + i as f64 * step)
}

/// Number of points [`axis_points`] yields
pub(crate) fn axis_steps(start: f64, max: f64, step: f64) -> usize {
    let extent = max - start;
    if extent < 0.0 {
        return 0;
    }
    let ratio = extent / step;
    let mut count = (ratio + GRID_EPSILON * ratio.max(1.0)).floor() as usize + 1;
    // the last point may only pass `max` by rounding error
    let tolerance = GRID_EPSILON * start.abs().max(max.abs()).max(step);
    if count > 1 && start + (count - 1) as f64 * step > max + tolerance {
        count -= 1;
    }
    count
}

// ═══════════════════════════════════════════════════════════════════════════
// Bounds
// ═══════════════════════════════════════════════════════════════════════════

/// Axis-aligned region: one `(min, max)` interval per dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Bounds {
    axes: Vec<(f64, f64)>,
}

impl Bounds {
    pub fn new(axes: Vec<(f64, f64)>) -> Result<Self> {
        if axes.is_empty() {
            return Err(GeometryError::InvalidBounds {
                reason: "at least one axis is required".to_string(),
            });
        }
        for (axis, &(min, max)) in axes.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() {
                return Err(GeometryError::InvalidBounds {
                    reason: format!("axis {} has a non-finite limit", axis),
                });
            }
            if min >= max {
                return Err(GeometryError::InvalidBounds {
                    reason: format!("axis {} has min {} not below max {}", axis, min, max),
                });
            }
            if !(max - min).is_finite() {
                return Err(GeometryError::InvalidBounds {
                    reason: format!("axis {} has an extent too large to represent", axis),
                });
            }
        }
        Ok(Self { axes })
    }

    /// Uniform `[min, max]` on every axis
    pub fn uniform(dimensions: usize, min: f64, max: f64) -> Result<Self> {
        Self::new(vec![(min, max); dimensions])
    }

    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    pub fn axes(&self) -> &[(f64, f64)] {
        &self.axes
    }

    /// Product of the axis extents
    pub fn hypervolume(&self) -> f64 {
        self.axes.iter().map(|(min, max)| max - min).product()
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = GeometryError;

    fn try_from(axes: Vec<(f64, f64)>) -> Result<Self> {
        Bounds::new(axes)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.axes
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tiles
// ═══════════════════════════════════════════════════════════════════════════

/// What a tile is a copy of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileShape {
    Cube,
    Sphere,
    Simplex,
    Hexagon,
    VoronoiCell,
}

impl TileShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileShape::Cube => "cube",
            TileShape::Sphere => "sphere",
            TileShape::Simplex => "simplex",
            TileShape::Hexagon => "hexagon",
            TileShape::VoronoiCell => "voronoi_cell",
        }
    }
}

/// Scalar angle in degrees for 2D tiles, one angle per axis otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rotation {
    Angle(f64),
    Axes(Vec<f64>),
}

impl Rotation {
    /// The rotation a fresh tile gets in `dimensions`
    pub fn zero(dimensions: usize) -> Self {
        if dimensions == 2 {
            Rotation::Angle(0.0)
        } else {
            Rotation::Axes(vec![0.0; dimensions])
        }
    }
}

/// One placed tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Vec<f64>,
    pub shape: TileShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_index: Option<usize>,
}

impl Tile {
    pub fn new(position: Vec<f64>, shape: TileShape, scale: f64) -> Self {
        Self {
            position,
            shape,
            rotation: None,
            scale,
            vertices: None,
            side_length: None,
            seed_index: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<Vec<f64>>) -> Self {
        self.vertices = Some(vertices);
        self
    }

    pub fn with_side_length(mut self, side_length: f64) -> Self {
        self.side_length = Some(side_length);
        self
    }

    pub fn with_seed_index(mut self, index: usize) -> Self {
        self.seed_index = Some(index);
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Base shapes and pattern types
// ═══════════════════════════════════════════════════════════════════════════

/// The shape a layout repeats, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaseShape {
    Cube(HyperCube),
    Sphere(HyperSphere),
    Simplex(Simplex),
    None,
}

impl BaseShape {
    /// Build a base shape from its name (`cube`, `sphere`, `simplex`) and
    /// its single parameter (side length or radius)
    pub fn from_name(name: &str, dimensions: usize, parameter: f64) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cube" => Ok(BaseShape::Cube(HyperCube::new(dimensions, parameter)?)),
            "sphere" => Ok(BaseShape::Sphere(HyperSphere::new(dimensions, parameter)?)),
            "simplex" => Ok(BaseShape::Simplex(Simplex::new(dimensions, parameter)?)),
            _ => Err(GeometryError::UnknownShapeType {
                name: name.to_string(),
            }),
        }
    }

    pub fn tag(&self) -> Option<TileShape> {
        match self {
            BaseShape::Cube(_) => Some(TileShape::Cube),
            BaseShape::Sphere(_) => Some(TileShape::Sphere),
            BaseShape::Simplex(_) => Some(TileShape::Simplex),
            BaseShape::None => None,
        }
    }

    pub fn as_shape(&self) -> Option<&dyn NdShape> {
        match self {
            BaseShape::Cube(s) => Some(s),
            BaseShape::Sphere(s) => Some(s),
            BaseShape::Simplex(s) => Some(s),
            BaseShape::None => None,
        }
    }

    pub fn volume(&self) -> Option<f64> {
        self.as_shape().map(|s| s.volume())
    }
}

/// The three layout families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Regular,
    Hexagonal,
    Voronoi,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Regular => "regular",
            PatternType::Hexagonal => "hexagonal",
            PatternType::Voronoi => "voronoi",
        }
    }

    /// Capitalised name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            PatternType::Regular => "Regular",
            PatternType::Hexagonal => "Hexagonal",
            PatternType::Voronoi => "Voronoi",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(PatternType::Regular),
            "hexagonal" => Ok(PatternType::Hexagonal),
            "voronoi" => Ok(PatternType::Voronoi),
            _ => Err(GeometryError::UnknownTilingType {
                name: s.to_string(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Layout trait and pattern
// ═══════════════════════════════════════════════════════════════════════════

/// A rule for placing tiles inside bounds
pub trait TileLayout: Send + Sync {
    fn pattern_type(&self) -> PatternType;

    fn dimensions(&self) -> usize;

    fn base_shape(&self) -> &BaseShape;

    /// Place tiles. `bounds` already matches `dimensions()` and `density` is positive.
    fn generate(&self, bounds: &Bounds, density: f64, rng: &mut dyn RngCore) -> Result<Vec<Tile>>;

    /// Fraction of the bounds the tiles cover, in [0, 1]
    fn coverage_efficiency(&self, tiles: &[Tile], bounds: &Bounds) -> f64;

    /// Upper estimate of how many tiles `generate` would place
    fn estimated_tile_count(&self, bounds: &Bounds, density: f64) -> u64;
}

/// Summary reported alongside every pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternProperties {
    pub dimensions: usize,
    pub pattern_type: PatternType,
    pub base_shape: String,
    pub tile_count: usize,
    pub coverage_efficiency: f64,
}

/// A layout together with the tiles of its last successful generation
pub struct TilingPattern {
    layout: Box<dyn TileLayout>,
    tiles: Vec<Tile>,
    bounds: Option<Bounds>,
}

impl TilingPattern {
    pub fn new(layout: impl TileLayout + 'static) -> Self {
        Self::from_boxed(Box::new(layout))
    }

    pub fn from_boxed(layout: Box<dyn TileLayout>) -> Self {
        Self {
            layout,
            tiles: Vec::new(),
            bounds: None,
        }
    }

    /// Generate with a freshly seeded generator
    pub fn generate_pattern(&mut self, bounds: Bounds, density: f64) -> Result<&[Tile]> {
        let mut rng = ChaCha8Rng::from_entropy();
        self.generate_pattern_with(bounds, density, &mut rng)
    }

    /// Generate using `rng` for any random choices (Voronoi seeds)
    pub fn generate_pattern_with(
        &mut self,
        bounds: Bounds,
        density: f64,
        rng: &mut dyn RngCore,
    ) -> Result<&[Tile]> {
        self.check_inputs(&bounds, density)?;
        let tiles = self.layout.generate(&bounds, density, rng)?;
        debug!(
            pattern = %self.layout.pattern_type(),
            dimensions = self.dimensions(),
            tiles = tiles.len(),
            "Generated tiling pattern"
        );
        self.tiles = tiles;
        self.bounds = Some(bounds);
        Ok(&self.tiles)
    }

    /// How many tiles generating over `bounds` would produce, at most
    pub fn estimated_tile_count(&self, bounds: &Bounds, density: f64) -> Result<u64> {
        self.check_inputs(bounds, density)?;
        Ok(self.layout.estimated_tile_count(bounds, density))
    }

    fn check_inputs(&self, bounds: &Bounds, density: f64) -> Result<()> {
        if !density.is_finite() || density <= 0.0 {
            return Err(GeometryError::InvalidDensity { density });
        }
        if bounds.dimensions() != self.dimensions() {
            return Err(GeometryError::BoundsDimensionMismatch {
                expected: self.dimensions(),
                actual: bounds.dimensions(),
            });
        }
        Ok(())
    }

    pub fn dimensions(&self) -> usize {
        self.layout.dimensions()
    }

    pub fn pattern_type(&self) -> PatternType {
        self.layout.pattern_type()
    }

    pub fn base_shape(&self) -> &BaseShape {
        self.layout.base_shape()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Bounds of the last successful generation
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn coverage_efficiency(&self) -> f64 {
        match &self.bounds {
            Some(bounds) => self.layout.coverage_efficiency(&self.tiles, bounds),
            None => 0.0,
        }
    }

    pub fn pattern_properties(&self) -> PatternProperties {
        let base_shape = match self.base_shape().as_shape() {
            Some(shape) => shape.shape_type(),
            None => self.pattern_type().as_str().to_string(),
        };
        PatternProperties {
            dimensions: self.dimensions(),
            pattern_type: self.pattern_type(),
            base_shape,
            tile_count: self.tile_count(),
            coverage_efficiency: self.coverage_efficiency(),
        }
    }
}

impl fmt::Debug for TilingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TilingPattern")
            .field("pattern_type", &self.pattern_type())
            .field("dimensions", &self.dimensions())
            .field("base_shape", self.base_shape())
            .field("tile_count", &self.tile_count())
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(vec![]).is_err());
        assert!(Bounds::new(vec![(1.0, 1.0)]).is_err());
        assert!(Bounds::new(vec![(0.0, f64::INFINITY)]).is_err());
        let b = Bounds::new(vec![(0.0, 2.0), (1.0, 4.0)]).unwrap();
        assert_eq!(b.dimensions(), 2);
        assert!((b.hypervolume() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_serde_round_trip_validates() {
        let b: Bounds = serde_json::from_str("[[0, 5], [0, 5]]").unwrap();
        assert_eq!(b.axes(), &[(0.0, 5.0), (0.0, 5.0)]);
        assert_eq!(serde_json::to_string(&b).unwrap(), "[[0.0,5.0],[0.0,5.0]]");
        assert!(serde_json::from_str::<Bounds>("[[5, 0]]").is_err());
    }

    #[test]
    fn test_axis_points_include_max() {
        let pts: Vec<f64> = axis_points(0.0, 1.0, 0.1).collect();
        assert_eq!(pts.len(), 11);
        assert!((pts[10] - 1.0).abs() < 1e-12);
        assert_eq!(axis_steps(0.6, 0.5, 1.0), 0);
        assert_eq!(axis_steps(0.5, 0.5, 1.0), 1);
    }

    #[test]
    fn test_axis_points_never_pass_max() {
        let pts: Vec<f64> = axis_points(0.0, 2.9999999995, 1.0).collect();
        assert_eq!(pts, vec![0.0, 1.0, 2.0]);
        assert_eq!(axis_steps(0.0, 3.0, 1.0), 4);
        assert_eq!(axis_steps(0.0, 0.3, 0.1), 4);
        assert!(axis_points(-7.3, 12.9, 0.7).all(|x| x <= 12.9));
    }

    #[test]
    fn test_bounds_reject_overflowing_extent() {
        let err = Bounds::new(vec![(-1e308, 1e308), (0.0, 1.0)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidBounds { .. }));
        let b = Bounds::new(vec![(-1e307, 1e307)]).unwrap();
        assert!(b.hypervolume().is_finite());
    }

    #[test]
    fn test_pattern_type_parsing() {
        assert_eq!("Hexagonal".parse::<PatternType>().unwrap(), PatternType::Hexagonal);
        assert!(matches!(
            "penrose".parse::<PatternType>(),
            Err(GeometryError::UnknownTilingType { .. })
        ));
    }

    #[test]
    fn test_base_shape_from_name() {
        let base = BaseShape::from_name("sphere", 3, 0.5).unwrap();
        assert_eq!(base.tag(), Some(TileShape::Sphere));
        assert!(matches!(
            BaseShape::from_name("torus", 3, 1.0),
            Err(GeometryError::UnknownShapeType { .. })
        ));
        assert!(BaseShape::from_name("cube", 3, -1.0).is_err());
        assert_eq!(BaseShape::None.volume(), None);
    }

    #[test]
    fn test_tile_serialization_omits_absent_fields() {
        let tile = Tile::new(vec![1.0, 2.0], TileShape::VoronoiCell, 1.0).with_seed_index(3);
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(json["shape"], "voronoi_cell");
        assert_eq!(json["seed_index"], 3);
        assert!(json.get("rotation").is_none());

        let rotated = Tile::new(vec![0.0, 0.0], TileShape::Cube, 1.0).with_rotation(Rotation::zero(2));
        assert_eq!(serde_json::to_value(&rotated).unwrap()["rotation"], 0.0);
    }

    #[test]
    fn test_failed_generation_keeps_previous_tiles() {
        let cube = HyperCube::new(2, 1.0).unwrap();
        let mut pattern = TilingPattern::new(RegularTiling::new(BaseShape::Cube(cube)).unwrap());
        pattern
            .generate_pattern(Bounds::uniform(2, 0.0, 2.0).unwrap(), 1.0)
            .unwrap();
        assert_eq!(pattern.tile_count(), 9);

        let err = pattern
            .generate_pattern(Bounds::uniform(3, 0.0, 2.0).unwrap(), 1.0)
            .unwrap_err();
        assert!(matches!(err, GeometryError::BoundsDimensionMismatch { .. }));
        assert!(pattern
            .generate_pattern(Bounds::uniform(2, 0.0, 2.0).unwrap(), 0.0)
            .is_err());
        assert_eq!(pattern.tile_count(), 9);
        assert_eq!(pattern.bounds().unwrap().hypervolume(), 4.0);
    }

    #[test]
    fn test_ungenerated_pattern_reports_zero_coverage() {
        let pattern = TilingPattern::new(HexagonalTiling::new(1.0).unwrap());
        assert_eq!(pattern.coverage_efficiency(), 0.0);
        assert_eq!(pattern.pattern_properties().base_shape, "hexagonal");
    }
}

//! Declarative tiling requests, as accepted by the REST facade and the
//! query dispatcher.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    BaseShape, Bounds, HexagonalTiling, PatternType, RegularTiling, TilingPattern, VoronoiTiling,
};
use crate::error::{GeometryError, Result};

fn default_density() -> f64 {
    1.0
}

/// Everything needed to build and generate one tiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingRequest {
    /// `regular`, `hexagonal` or `voronoi`
    pub tiling_type: String,
    pub dimensions: usize,
    /// `[[min, max], ...]`, one pair per dimension
    pub bounds: Vec<(f64, f64)>,
    #[serde(default = "default_density")]
    pub density: f64,

    /// Regular: `cube`, `sphere` or `simplex`
    #[serde(default)]
    pub shape_type: Option<String>,
    /// Regular: side length or radius of the base shape
    #[serde(default)]
    pub parameter: Option<f64>,

    /// Hexagonal: hexagon side length
    #[serde(default)]
    pub side_length: Option<f64>,

    /// Voronoi: explicit seeds (take precedence over `num_random_seeds`)
    #[serde(default)]
    pub seed_points: Option<Vec<Vec<f64>>>,
    /// Voronoi: number of seeds to draw inside the bounds
    #[serde(default)]
    pub num_random_seeds: Option<usize>,
}

impl TilingRequest {
    pub fn new(tiling_type: impl Into<String>, dimensions: usize, bounds: Vec<(f64, f64)>) -> Self {
        Self {
            tiling_type: tiling_type.into(),
            dimensions,
            bounds,
            density: default_density(),
            shape_type: None,
            parameter: None,
            side_length: None,
            seed_points: None,
            num_random_seeds: None,
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_shape(mut self, shape_type: impl Into<String>, parameter: f64) -> Self {
        self.shape_type = Some(shape_type.into());
        self.parameter = Some(parameter);
        self
    }

    pub fn with_side_length(mut self, side_length: f64) -> Self {
        self.side_length = Some(side_length);
        self
    }

    pub fn with_seed_points(mut self, seeds: Vec<Vec<f64>>) -> Self {
        self.seed_points = Some(seeds);
        self
    }

    pub fn with_random_seeds(mut self, count: usize) -> Self {
        self.num_random_seeds = Some(count);
        self
    }

    /// Validated bounds; the count must match `dimensions`
    pub fn bounds(&self) -> Result<Bounds> {
        if self.dimensions < 1 {
            return Err(GeometryError::InvalidDimensions {
                dimensions: self.dimensions,
            });
        }
        if self.bounds.len() != self.dimensions {
            return Err(GeometryError::BoundsDimensionMismatch {
                expected: self.dimensions,
                actual: self.bounds.len(),
            });
        }
        Bounds::new(self.bounds.clone())
    }

    /// Validate the request and build an ungenerated pattern
    pub fn build(&self) -> Result<TilingPattern> {
        self.bounds()?;
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(GeometryError::InvalidDensity {
                density: self.density,
            });
        }

        let pattern_type: PatternType = self.tiling_type.parse()?;
        if pattern_type != PatternType::Regular && self.dimensions != 2 {
            return Err(GeometryError::UnsupportedDimension {
                pattern: pattern_type.display_name().to_string(),
                dimensions: self.dimensions,
            });
        }

        let pattern = match pattern_type {
            PatternType::Regular => {
                let (shape, parameter) = match (&self.shape_type, self.parameter) {
                    (Some(shape), Some(parameter)) => (shape, parameter),
                    _ => {
                        return Err(GeometryError::MissingParameter {
                            pattern: pattern_type.display_name().to_string(),
                            parameter: "'shape_type' and 'parameter'".to_string(),
                        })
                    }
                };
                let base = BaseShape::from_name(shape, self.dimensions, parameter)?;
                TilingPattern::new(RegularTiling::new(base)?)
            }
            PatternType::Hexagonal => {
                let side = self.side_length.ok_or_else(|| GeometryError::MissingParameter {
                    pattern: pattern_type.display_name().to_string(),
                    parameter: "'side_length'".to_string(),
                })?;
                TilingPattern::new(HexagonalTiling::new(side)?)
            }
            PatternType::Voronoi => {
                let layout = match (&self.seed_points, self.num_random_seeds) {
                    (Some(seeds), _) if !seeds.is_empty() => {
                        VoronoiTiling::new(self.dimensions, seeds.clone())?
                    }
                    (_, Some(count)) if count > 0 => VoronoiTiling::random(self.dimensions, count)?,
                    _ => return Err(GeometryError::MissingSeedSource),
                };
                TilingPattern::new(layout)
            }
        };

        debug!(
            pattern = %pattern_type,
            dimensions = self.dimensions,
            density = self.density,
            "Built tiling request"
        );
        Ok(pattern)
    }

    /// Upper estimate of the tile count, without generating
    pub fn estimated_tile_count(&self) -> Result<u64> {
        self.build()?
            .estimated_tile_count(&self.bounds()?, self.density)
    }

    /// Build and generate in one step
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<TilingPattern> {
        let mut pattern = self.build()?;
        pattern.generate_pattern_with(self.bounds()?, self.density, rng)?;
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let request: TilingRequest = serde_json::from_str(
            r#"{"tiling_type": "hexagonal", "dimensions": 2, "bounds": [[0, 10], [0, 10]], "side_length": 1.0}"#,
        )
        .unwrap();
        assert_eq!(request.density, 1.0);
        assert_eq!(request.bounds, vec![(0.0, 10.0), (0.0, 10.0)]);
        let pattern = request.generate(&mut rng()).unwrap();
        assert_eq!(pattern.pattern_type(), PatternType::Hexagonal);
        assert!(pattern.tile_count() > 0);
    }

    #[test]
    fn test_bounds_count_must_match() {
        let err = TilingRequest::new("regular", 3, vec![(0.0, 1.0); 2])
            .with_shape("cube", 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Number of bounds (2) must match dimensions (3)");
    }

    #[test]
    fn test_regular_requires_shape_and_parameter() {
        let err = TilingRequest::new("regular", 2, vec![(0.0, 1.0); 2])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("requires 'shape_type' and 'parameter'"));

        let err = TilingRequest::new("regular", 2, vec![(0.0, 1.0); 2])
            .with_shape("dodecahedron", 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::UnknownShapeType { .. }));
    }

    #[test]
    fn test_two_dimensional_only_layouts() {
        let err = TilingRequest::new("hexagonal", 3, vec![(0.0, 1.0); 3])
            .with_side_length(1.0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("only supported in 2D"));

        let err = TilingRequest::new("voronoi", 3, vec![(0.0, 1.0); 3])
            .with_random_seeds(4)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("only supported in 2D"));
    }

    #[test]
    fn test_voronoi_seed_sources() {
        let err = TilingRequest::new("voronoi", 2, vec![(0.0, 6.0); 2])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("requires either"));

        // an empty seed list falls through to the random count
        let pattern = TilingRequest::new("voronoi", 2, vec![(0.0, 6.0); 2])
            .with_seed_points(vec![])
            .with_random_seeds(3)
            .generate(&mut rng())
            .unwrap();
        assert_eq!(pattern.tile_count(), 3);

        let err = TilingRequest::new("voronoi", 2, vec![(0.0, 6.0); 2])
            .with_seed_points(vec![vec![1.0, 2.0, 3.0]])
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::SeedDimensionMismatch { .. }));
    }

    #[test]
    fn test_invalid_density_and_type() {
        let err = TilingRequest::new("regular", 2, vec![(0.0, 1.0); 2])
            .with_shape("cube", 1.0)
            .with_density(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDensity { .. }));

        let err = TilingRequest::new("penrose", 2, vec![(0.0, 1.0); 2])
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TILING_TYPE");
    }

    #[test]
    fn test_estimate_before_generating() {
        let request = TilingRequest::new("regular", 3, vec![(0.0, 99.0); 3]).with_shape("cube", 1.0);
        assert_eq!(request.estimated_tile_count().unwrap(), 1_000_000);

        let request = TilingRequest::new("voronoi", 2, vec![(0.0, 1.0); 2]).with_random_seeds(12);
        assert_eq!(request.estimated_tile_count().unwrap(), 12);
    }
}

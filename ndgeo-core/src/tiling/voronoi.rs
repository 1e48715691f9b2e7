//! Seed-based Voronoi layout.
//!
//! Each seed produces one cell. Cells are placeholder squares of half-size
//! [`CELL_HALF_SIZE`] around the seed; true Voronoi boundaries are not computed.

use rand::{Rng, RngCore};

use super::{BaseShape, Bounds, PatternType, Tile, TileLayout, TileShape, NO_BASE_SHAPE};
use crate::error::{GeometryError, Result};

/// Half the side of the placeholder square drawn around each seed
pub const CELL_HALF_SIZE: f64 = 1.0;

/// Where the seeds come from
#[derive(Debug, Clone, PartialEq)]
enum SeedSource {
    /// Fixed seed coordinates, used in order
    Points(Vec<Vec<f64>>),
    /// This many seeds drawn uniformly inside the bounds at generation time
    Random(usize),
}

#[derive(Debug, Clone)]
pub struct VoronoiTiling {
    dimensions: usize,
    seeds: SeedSource,
}

impl VoronoiTiling {
    /// Voronoi layout over explicit seeds; every seed needs one coordinate per dimension
    pub fn new(dimensions: usize, seed_points: Vec<Vec<f64>>) -> Result<Self> {
        check_dimensions(dimensions)?;
        if seed_points.is_empty() {
            return Err(GeometryError::MissingSeedSource);
        }
        for (index, seed) in seed_points.iter().enumerate() {
            if seed.len() != dimensions {
                return Err(GeometryError::SeedDimensionMismatch {
                    index,
                    expected: dimensions,
                    actual: seed.len(),
                });
            }
        }
        Ok(Self {
            dimensions,
            seeds: SeedSource::Points(seed_points),
        })
    }

    /// Voronoi layout over `count` random seeds
    pub fn random(dimensions: usize, count: usize) -> Result<Self> {
        check_dimensions(dimensions)?;
        if count == 0 {
            return Err(GeometryError::MissingSeedSource);
        }
        Ok(Self {
            dimensions,
            seeds: SeedSource::Random(count),
        })
    }

    fn seed_count(&self) -> usize {
        match &self.seeds {
            SeedSource::Points(points) => points.len(),
            SeedSource::Random(count) => *count,
        }
    }
}

fn check_dimensions(dimensions: usize) -> Result<()> {
    if dimensions != 2 {
        return Err(GeometryError::UnsupportedDimension {
            pattern: PatternType::Voronoi.display_name().to_string(),
            dimensions,
        });
    }
    Ok(())
}

/// Uniform point inside `bounds`, one draw per axis
fn random_seed(bounds: &Bounds, rng: &mut dyn RngCore) -> Vec<f64> {
    bounds
        .axes()
        .iter()
        .map(|&(min, max)| rng.gen_range(min..max))
        .collect()
}

fn placeholder_cell(seed: &[f64]) -> Vec<Vec<f64>> {
    let (x, y) = (seed[0], seed[1]);
    let h = CELL_HALF_SIZE;
    vec![
        vec![x - h, y - h],
        vec![x + h, y - h],
        vec![x + h, y + h],
        vec![x - h, y + h],
    ]
}

impl TileLayout for VoronoiTiling {
    fn pattern_type(&self) -> PatternType {
        PatternType::Voronoi
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn base_shape(&self) -> &BaseShape {
        NO_BASE_SHAPE
    }

    fn generate(&self, bounds: &Bounds, density: f64, rng: &mut dyn RngCore) -> Result<Vec<Tile>> {
        let seeds: Vec<Vec<f64>> = match &self.seeds {
            SeedSource::Points(points) => points.clone(),
            SeedSource::Random(count) => (0..*count).map(|_| random_seed(bounds, rng)).collect(),
        };

        let tiles = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| {
                let vertices = placeholder_cell(&seed);
                Tile::new(seed, TileShape::VoronoiCell, density)
                    .with_seed_index(index)
                    .with_vertices(vertices)
            })
            .collect();
        Ok(tiles)
    }

    fn coverage_efficiency(&self, _tiles: &[Tile], _bounds: &Bounds) -> f64 {
        1.0
    }

    fn estimated_tile_count(&self, _bounds: &Bounds, _density: f64) -> u64 {
        self.seed_count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::TilingPattern;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_one_cell_per_seed() {
        let seeds = vec![vec![1.0, 1.0], vec![2.0, 4.0], vec![4.0, 2.0], vec![5.0, 5.0]];
        let mut pattern = TilingPattern::new(VoronoiTiling::new(2, seeds.clone()).unwrap());
        pattern
            .generate_pattern(Bounds::uniform(2, 0.0, 6.0).unwrap(), 1.0)
            .unwrap();

        assert_eq!(pattern.tile_count(), 4);
        for (i, tile) in pattern.tiles().iter().enumerate() {
            assert_eq!(tile.seed_index, Some(i));
            assert_eq!(tile.position, seeds[i]);
            assert!(tile.rotation.is_none());
            assert_eq!(tile.vertices.as_ref().unwrap()[0], vec![seeds[i][0] - 1.0, seeds[i][1] - 1.0]);
        }
        assert_eq!(pattern.coverage_efficiency(), 1.0);
    }

    #[test]
    fn test_random_seeds_stay_in_bounds_and_repeat_per_seed() {
        let bounds = Bounds::new(vec![(0.0, 10.0), (5.0, 6.0)]).unwrap();
        let draw = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut pattern = TilingPattern::new(VoronoiTiling::random(2, 25).unwrap());
            pattern
                .generate_pattern_with(bounds.clone(), 1.0, &mut rng)
                .unwrap();
            pattern.tiles().to_vec()
        };

        let tiles = draw(7);
        assert_eq!(tiles.len(), 25);
        for tile in &tiles {
            assert!((0.0..10.0).contains(&tile.position[0]));
            assert!((5.0..6.0).contains(&tile.position[1]));
        }
        assert_eq!(tiles, draw(7));
        assert_ne!(tiles, draw(8));
    }

    #[test]
    fn test_seed_validation() {
        assert!(matches!(
            VoronoiTiling::new(2, vec![vec![1.0, 1.0], vec![1.0]]),
            Err(GeometryError::SeedDimensionMismatch { index: 1, expected: 2, actual: 1 })
        ));
        assert!(matches!(
            VoronoiTiling::new(2, vec![]),
            Err(GeometryError::MissingSeedSource)
        ));
        assert!(matches!(
            VoronoiTiling::random(3, 4),
            Err(GeometryError::UnsupportedDimension { dimensions: 3, .. })
        ));
    }
}

//! Tiling pattern analysis.
//!
//! Symmetry and coordination data are not measured from the tiles. They come
//! from a fixed table keyed by the pattern type and the base-shape tag:
//!
//! | Pattern | Base | Rotation | Point | Coordination | Vertex config |
//! |---------|------|----------|-------|--------------|---------------|
//! | hexagonal | - | yes | yes | 6 | 6.6.6 |
//! | regular | cube | yes | yes | 2n | 4.4.4.4 |
//! | regular | simplex | no | yes | n+1 | 3.3.3.3.3.3 |
//! | regular | sphere | no | yes | 4 | unknown |
//! | voronoi | - | no | no | 4 | unknown |
//!
//! Translation and reflection symmetry are reported for every pattern.

use serde::{Deserialize, Serialize};

use super::{PatternProperties, PatternType, TileShape, TilingPattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetryProperties {
    pub translation_symmetry: bool,
    pub rotation_symmetry: bool,
    pub reflection_symmetry: bool,
    pub point_symmetry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathematicalProperties {
    pub is_periodic: bool,
    pub is_regular: bool,
    pub is_uniform: bool,
    pub coordination_number: usize,
    pub vertex_configuration: String,
}

/// Full analysis of one generated pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub basic_properties: PatternProperties,
    pub tile_count: usize,
    pub coverage_efficiency: f64,
    /// Tiles per unit hypervolume of the bounds
    pub tile_density: f64,
    pub symmetry_properties: SymmetryProperties,
    pub mathematical_properties: MathematicalProperties,
}

#[derive(Debug, Clone, Copy)]
enum Coordination {
    Fixed(usize),
    TwiceDimensions,
    DimensionsPlusOne,
}

impl Coordination {
    fn resolve(self, dimensions: usize) -> usize {
        match self {
            Coordination::Fixed(n) => n,
            Coordination::TwiceDimensions => 2 * dimensions,
            Coordination::DimensionsPlusOne => dimensions + 1,
        }
    }
}

/// One row of the heuristic table
#[derive(Debug, Clone, Copy)]
struct Heuristics {
    rotation: bool,
    coordination: Coordination,
    vertex_configuration: &'static str,
}

fn heuristics(pattern: PatternType, base: Option<TileShape>) -> Heuristics {
    match (pattern, base) {
        (PatternType::Hexagonal, _) => Heuristics {
            rotation: true,
            coordination: Coordination::Fixed(6),
            vertex_configuration: "6.6.6",
        },
        (_, Some(TileShape::Cube)) => Heuristics {
            rotation: true,
            coordination: Coordination::TwiceDimensions,
            vertex_configuration: "4.4.4.4",
        },
        (_, Some(TileShape::Simplex)) => Heuristics {
            rotation: false,
            coordination: Coordination::DimensionsPlusOne,
            vertex_configuration: "3.3.3.3.3.3",
        },
        _ => Heuristics {
            rotation: false,
            coordination: Coordination::Fixed(4),
            vertex_configuration: "unknown",
        },
    }
}

/// Read-only view over a [`TilingPattern`] that derives its analysis
pub struct TilingAnalyzer<'a> {
    pattern: &'a TilingPattern,
}

impl<'a> TilingAnalyzer<'a> {
    pub fn new(pattern: &'a TilingPattern) -> Self {
        Self { pattern }
    }

    pub fn analyze(&self) -> PatternAnalysis {
        PatternAnalysis {
            basic_properties: self.pattern.pattern_properties(),
            tile_count: self.pattern.tile_count(),
            coverage_efficiency: self.pattern.coverage_efficiency(),
            tile_density: self.tile_density(),
            symmetry_properties: self.symmetry(),
            mathematical_properties: self.mathematical_properties(),
        }
    }

    /// Tiles per unit hypervolume; 0 before the first generation
    pub fn tile_density(&self) -> f64 {
        match self.pattern.bounds() {
            Some(bounds) => {
                let total = bounds.hypervolume();
                if total > 0.0 {
                    self.pattern.tile_count() as f64 / total
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    fn row(&self) -> Heuristics {
        heuristics(self.pattern.pattern_type(), self.pattern.base_shape().tag())
    }

    pub fn symmetry(&self) -> SymmetryProperties {
        let pattern_type = self.pattern.pattern_type();
        SymmetryProperties {
            translation_symmetry: true,
            rotation_symmetry: self.row().rotation,
            reflection_symmetry: true,
            point_symmetry: matches!(pattern_type, PatternType::Regular | PatternType::Hexagonal),
        }
    }

    pub fn mathematical_properties(&self) -> MathematicalProperties {
        let pattern_type = self.pattern.pattern_type();
        let row = self.row();
        MathematicalProperties {
            is_periodic: true,
            is_regular: pattern_type == PatternType::Regular,
            is_uniform: matches!(pattern_type, PatternType::Regular | PatternType::Hexagonal),
            coordination_number: row.coordination.resolve(self.pattern.dimensions()),
            vertex_configuration: row.vertex_configuration.to_string(),
        }
    }
}

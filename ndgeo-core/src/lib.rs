//! # ndgeo Core - N-Dimensional Geometry Engine
//!
//! ndgeo computes closed-form properties of shapes in any number of
//! dimensions and lays those shapes out as tiling patterns:
//!
//! - **Shapes**: hyperspheres, hypercubes, hyperellipsoids, simplices and
//!   hyperpyramids, each with volume, surface area, formulas and
//!   point containment
//! - **Tiling**: regular grids of a base shape, hexagonal tessellations and
//!   seed-based Voronoi layouts, plus an analyzer for the generated pattern
//! - **Query**: a keyword dispatcher that answers short English requests
//!
//! ## Example
//!
//! ```rust
//! use ndgeo_core::{compare_sphere_cube, HyperSphere, NdShape, TilingAnalyzer, TilingRequest};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // The unit ball in 5D
//! let ball = HyperSphere::new(5, 1.0).unwrap();
//! assert!((ball.volume() - 5.263789).abs() < 1e-6);
//!
//! // Past 12 dimensions the unit cube holds more volume than the unit ball
//! let comparison = compare_sphere_cube(13, 1.0).unwrap();
//! assert!(comparison.ratios.volume_ratio_sphere_cube < 1.0);
//!
//! // A hexagonal tiling over a 10x10 square
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let pattern = TilingRequest::new("hexagonal", 2, vec![(0.0, 10.0), (0.0, 10.0)])
//!     .with_side_length(1.0)
//!     .generate(&mut rng)
//!     .unwrap();
//! let analysis = TilingAnalyzer::new(&pattern).analyze();
//! assert_eq!(analysis.mathematical_properties.coordination_number, 6);
//! ```

pub mod compare;
pub mod error;
pub mod query;
pub mod shapes;
pub mod tiling;

// Re-export main types
pub use compare::{compare_sphere_cube, dimension_profile, DimensionProfile, SphereCubeComparison};
pub use error::{ErrorCategory, ErrorDetail, ErrorResponse, GeometryError, Result};
pub use query::{GeometryAgent, Intent, DEFAULT_MAX_DIMENSIONS, DEFAULT_MAX_TILES};
pub use shapes::{
    classic_sphere_report, unit_ball_volume, ClassicSphere, HyperCube, HyperEllipsoid,
    HyperPyramid, HyperSphere, NdShape, Shape, Simplex,
};
pub use tiling::{
    BaseShape, Bounds, HexagonalTiling, PatternAnalysis, PatternType, RegularTiling, Tile,
    TileLayout, TilingAnalyzer, TilingPattern, TilingRequest, VoronoiTiling,
};

/// Crate version, reported by the health endpoints
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

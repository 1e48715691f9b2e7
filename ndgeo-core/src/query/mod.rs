//! Natural-language query dispatch.
//!
//! [`GeometryAgent`] turns short English requests such as
//! `"create a 4D sphere with radius 2"` or `"hexagonal tiling area 10x10"`
//! into shape and tiling calls and renders the answer as text.
//!
//! Queries are lowercased and trimmed, then routed by keyword to the first
//! matching [`Intent`]:
//!
//! | Order | Intent | Keywords |
//! |-------|--------|----------|
//! | 1 | ClassicSphere | classic |
//! | 2 | Tiling | tiling, tessellation, tile, pattern |
//! | 3 | Ellipsoid | ellipse, ellipsoid, oval |
//! | 4 | Simplex | simplex, triangle, tetrahedron |
//! | 5 | Pyramid | pyramid, cone |
//! | 6 | Create | create, make |
//! | 7 | Property | volume, area, surface |
//! | 8 | Compare | compare, vs, versus |
//! | 9 | Help | anything else |
//!
//! # Example
//!
//! ```rust
//! use ndgeo_core::GeometryAgent;
//!
//! let mut agent = GeometryAgent::with_seed(7).unwrap();
//! let reply = agent.process_query("Create a 4D sphere with radius 2");
//! assert!(reply.starts_with("Created 4D HyperSphere 'shape1'"));
//! assert_eq!(agent.saved_shapes().len(), 1);
//! ```

pub mod extract;

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::compare::compare_sphere_cube;
use crate::error::{GeometryError, Result};
use crate::shapes::{
    classic_sphere_report, format_count, HyperCube, HyperEllipsoid, HyperPyramid, HyperSphere,
    NdShape, Shape, Simplex,
};
use crate::tiling::{
    RegularTiling, SymmetryProperties, TilingAnalyzer, TilingPattern, TilingRequest,
};

pub use extract::QueryExtractor;

/// Default cap on the dimension count a query may ask for
pub const DEFAULT_MAX_DIMENSIONS: usize = 100;

/// Default cap on the tiles one tiling query may generate
pub const DEFAULT_MAX_TILES: u64 = 100_000;

const DEFAULT_SHAPE_DIMENSIONS: usize = 3;
const DEFAULT_TILING_DIMENSIONS: usize = 2;
const DEFAULT_TILING_BOUNDS: (f64, f64) = (0.0, 10.0);
const DEFAULT_VORONOI_SEEDS: usize = 10;
const DEFAULT_CLASSIC_DIAMETER: f64 = 2.0;

/// What a query is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ClassicSphere,
    Tiling,
    Ellipsoid,
    Simplex,
    Pyramid,
    Create,
    Property,
    Compare,
    Help,
}

impl Intent {
    /// Route an already lowercased query
    pub fn classify(query: &str) -> Self {
        let has = |words: &[&str]| words.iter().any(|w| query.contains(w));

        if has(&["classic"]) {
            Intent::ClassicSphere
        } else if has(&["tiling", "tessellation", "tile", "pattern"]) {
            Intent::Tiling
        } else if has(&["ellipse", "ellipsoid", "oval"]) {
            Intent::Ellipsoid
        } else if has(&["simplex", "triangle", "tetrahedron"]) {
            Intent::Simplex
        } else if has(&["pyramid", "cone"]) {
            Intent::Pyramid
        } else if has(&["create", "make"]) {
            Intent::Create
        } else if has(&["volume", "area", "surface"]) {
            Intent::Property
        } else if has(&["compare", "vs", "versus"]) {
            Intent::Compare
        } else {
            Intent::Help
        }
    }
}

fn wants_create(query: &str) -> bool {
    query.contains("create") || query.contains("make")
}

/// Base shape named by a regular-tiling query
fn tiling_base_name(query: &str) -> Option<&'static str> {
    let has = |words: &[&str]| words.iter().any(|w| query.contains(w));
    if has(&["cube", "square"]) {
        Some("cube")
    } else if has(&["sphere", "circle"]) {
        Some("sphere")
    } else if has(&["simplex", "simplic", "triang"]) {
        Some("simplex")
    } else {
        None
    }
}

fn format_bounds(bounds: &[(f64, f64)]) -> String {
    let pairs: Vec<String> = bounds
        .iter()
        .map(|(min, max)| format!("({}, {})", min, max))
        .collect();
    format!("[{}]", pairs.join(", "))
}

fn format_symmetry(symmetry: &SymmetryProperties) -> String {
    let names: Vec<&str> = [
        (symmetry.translation_symmetry, "translation"),
        (symmetry.rotation_symmetry, "rotation"),
        (symmetry.reflection_symmetry, "reflection"),
        (symmetry.point_symmetry, "point"),
    ]
    .into_iter()
    .filter_map(|(present, name)| present.then_some(name))
    .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn formulas(shape: &dyn NdShape) -> String {
    format!(
        "Formulas:\n• {}\n• {}\n",
        shape.volume_formula(),
        shape.surface_area_formula()
    )
}

fn face_counts(dimensions: usize, count: impl Fn(usize) -> Option<u128>) -> String {
    let mut out = String::from("Face counts:\n");
    for k in 0..=dimensions {
        match count(k) {
            Some(0) => {}
            faces => out.push_str(&format!("• {}-faces: {}\n", k, format_count(faces))),
        }
    }
    out
}

const HELP_TEXT: &str = "N-Dimensional Geometry Engine Commands:

CLASSIC SPHERE:
• 'classic sphere diameter 4' - the single-sphere calculator report

CREATING SHAPES:
• 'create a 4D sphere with radius 2'
• 'make a 5-dimensional cube with side 1.5'
• 'create a 6D hypercube side length 2'
• 'create a 3D ellipsoid with axes 1.5 2.0 3.0'
• 'make a 2D ellipse with semi-axes 2 3'
• 'create a 3D tetrahedron with side 2'
• 'make a 4D simplex side length 1.5'
• 'create a 3D pyramid base 2 height 3'
• 'make a 4D hyperpyramid base 2.5 height 4'

CALCULATING PROPERTIES:
• 'volume of 3D sphere radius 2'
• 'surface area of 5D cube side 1'
• 'ellipsoid with axes 1 2 3'
• 'triangle with side 3'
• 'pyramid base 2 height 3'

TILING PATTERNS:
• 'hexagonal tiling side 1.0 area 10x10'
• 'square tiling with cubes area 5x5'
• 'triangular tiling with simplices bounds 0 8'
• 'voronoi tiling seeds 15 area 12x8'
• 'regular tiling with circles density 1.5'

COMPARISONS:
• 'compare sphere vs cube in 4 dimensions'
• 'compare 6D sphere and cube parameter 2'

Supports spheres, cubes, ellipsoids, simplices, pyramids and tiling patterns in any dimension.
";

/// Stateful query dispatcher.
///
/// Keeps the shapes created by `create`/`make` queries under generated names
/// (`shape1`, `shape2`, ...) and owns the random generator used for random
/// Voronoi seeds.
pub struct GeometryAgent {
    extractor: QueryExtractor,
    saved_shapes: BTreeMap<String, Shape>,
    shape_counter: usize,
    rng: ChaCha8Rng,
    max_dimensions: usize,
    max_tiles: u64,
}

impl GeometryAgent {
    /// Agent with an entropy-seeded generator
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Agent whose random Voronoi seeds repeat for the same `seed`
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::build(Some(seed))
    }

    fn build(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            extractor: QueryExtractor::new()?,
            saved_shapes: BTreeMap::new(),
            shape_counter: 1,
            rng,
            max_dimensions: DEFAULT_MAX_DIMENSIONS,
            max_tiles: DEFAULT_MAX_TILES,
        })
    }

    /// Replace the dimension and tile caps
    pub fn with_limits(mut self, max_dimensions: usize, max_tiles: u64) -> Self {
        self.max_dimensions = max_dimensions;
        self.max_tiles = max_tiles;
        self
    }

    pub fn saved_shapes(&self) -> &BTreeMap<String, Shape> {
        &self.saved_shapes
    }

    pub fn saved_shape(&self, name: &str) -> Option<&Shape> {
        self.saved_shapes.get(name)
    }

    /// Answer a query. Failures are folded into the reply text.
    pub fn process_query(&mut self, query: &str) -> String {
        match self.try_process_query(query) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Query failed");
                format!("Sorry, I encountered an error: {}", e)
            }
        }
    }

    /// Answer a query, returning shape and limit errors to the caller
    pub fn try_process_query(&mut self, query: &str) -> Result<String> {
        let query = query.trim().to_lowercase();
        let intent = Intent::classify(&query);
        debug!(?intent, query = %query, "Dispatching query");

        match intent {
            Intent::ClassicSphere => self.classic_sphere(&query),
            Intent::Tiling => Ok(self.tiling(&query)),
            Intent::Ellipsoid => self.ellipsoid(&query),
            Intent::Simplex => self.simplex(&query),
            Intent::Pyramid => self.pyramid(&query),
            Intent::Create => self.create(&query),
            Intent::Property => self.property(&query),
            Intent::Compare => self.compare(&query),
            Intent::Help => Ok(HELP_TEXT.to_string()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn dimensions_or(&self, query: &str, default: usize) -> Result<usize> {
        let dimensions = self.extractor.dimensions(query).unwrap_or(default);
        if dimensions > self.max_dimensions {
            return Err(GeometryError::DimensionLimitExceeded {
                dimensions,
                max: self.max_dimensions,
            });
        }
        Ok(dimensions)
    }

    fn save(&mut self, shape: Shape) -> String {
        let name = format!("shape{}", self.shape_counter);
        self.shape_counter += 1;
        debug!(name = %name, shape = %shape.shape_type(), "Saved shape");
        self.saved_shapes.insert(name.clone(), shape);
        name
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Shapes
    // ═══════════════════════════════════════════════════════════════════════

    fn classic_sphere(&self, query: &str) -> Result<String> {
        let diameter = self
            .extractor
            .parameter(query)
            .unwrap_or(DEFAULT_CLASSIC_DIAMETER);
        classic_sphere_report(diameter)
    }

    fn create(&mut self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let Some(parameter) = self.extractor.parameter(query) else {
            return Ok("Please specify a parameter (radius or side length)".to_string());
        };

        if query.contains("cube") {
            let cube = HyperCube::new(dimensions, parameter)?;
            let name = self.save(Shape::Cube(cube.clone()));
            Ok(format!(
                "Created {} '{}':\n{}\nSide length = {}\n{}Geometric Properties:\n• Vertices: {}\n• Edges: {}\n• Diagonal: {:.6}",
                cube.shape_type(),
                name,
                cube,
                parameter,
                formulas(&cube),
                format_count(cube.vertex_count()),
                format_count(cube.edge_count()),
                cube.diagonal_length()
            ))
        } else if ["simplex", "triangle", "tetrahedron"]
            .iter()
            .any(|w| query.contains(w))
        {
            let simplex = Simplex::new(dimensions, parameter)?;
            let name = self.save(Shape::Simplex(simplex.clone()));
            Ok(format!(
                "Created {} '{}':\n{}\nSide length = {}\n{}{}",
                simplex.shape_type(),
                name,
                simplex,
                parameter,
                formulas(&simplex),
                simplex_properties(&simplex)
            ))
        } else {
            let sphere = HyperSphere::new(dimensions, parameter)?;
            let name = self.save(Shape::Sphere(sphere.clone()));
            let mut reply = format!(
                "Created {} '{}':\n{}\nRadius = {}\n{}",
                sphere.shape_type(),
                name,
                sphere,
                parameter,
                formulas(&sphere)
            );
            reply.truncate(reply.trim_end().len());
            Ok(reply)
        }
    }

    fn property(&self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let Some(parameter) = self.extractor.parameter(query) else {
            return Ok("Please specify a parameter (radius or side length)".to_string());
        };

        let (shape, noun) = if query.contains("cube") {
            (Shape::Cube(HyperCube::new(dimensions, parameter)?), "cube")
        } else {
            (Shape::Sphere(HyperSphere::new(dimensions, parameter)?), "sphere")
        };

        let mut lines = Vec::new();
        if query.contains("volume") {
            lines.push(format!(
                "Volume of {}D {}: {:.6}\nFormula: {}",
                dimensions,
                noun,
                shape.volume(),
                shape.volume_formula()
            ));
        }
        if query.contains("area") || query.contains("surface") {
            lines.push(format!(
                "Surface area of {}D {}: {:.6}\nFormula: {}",
                dimensions,
                noun,
                shape.surface_area(),
                shape.surface_area_formula()
            ));
        }

        if lines.is_empty() {
            Ok(shape.to_string())
        } else {
            Ok(lines.join("\n"))
        }
    }

    fn compare(&self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let parameter = self.extractor.parameter(query).unwrap_or(1.0);
        Ok(compare_sphere_cube(dimensions, parameter)?.to_string())
    }

    fn ellipsoid(&mut self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let axes = self.extractor.semi_axes(query);
        if axes.len() != dimensions {
            return Ok(format!(
                "Please specify {n} semi-axes for {n}D ellipsoid (e.g., 'axes 1 2 3')",
                n = dimensions
            ));
        }

        let ellipsoid = HyperEllipsoid::new(dimensions, axes.clone())?;
        let mut special = String::new();
        if ellipsoid.is_sphere() {
            special.push_str("Special Properties:\n• This is actually a sphere (all axes equal)\n");
        } else {
            special.push_str(&format!(
                "Special Properties:\n• Axis ratio: {:.6}\n",
                ellipsoid.axis_ratio()
            ));
            if dimensions == 2 {
                special.push_str(&format!("• Eccentricity: {:.6}\n", ellipsoid.eccentricity()?));
            }
        }

        if wants_create(query) {
            let name = self.save(Shape::Ellipsoid(ellipsoid.clone()));
            Ok(format!(
                "Created {} '{}':\n{}\nSemi-axes = {:?}\n{}{}",
                ellipsoid.shape_type(),
                name,
                ellipsoid,
                axes,
                formulas(&ellipsoid),
                special
            ))
        } else {
            Ok(format!(
                "HyperEllipsoid properties:\n{}\n{}{}",
                ellipsoid,
                formulas(&ellipsoid),
                special
            ))
        }
    }

    fn simplex(&mut self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let Some(side) = self.extractor.parameter(query) else {
            return Ok("Please specify a side length for the simplex".to_string());
        };
        if wants_create(query) {
            return self.create(query);
        }

        let simplex = Simplex::new(dimensions, side)?;
        Ok(format!(
            "Simplex properties:\n{}\n{}{}\n{}",
            simplex,
            formulas(&simplex),
            simplex_properties(&simplex),
            face_counts(dimensions, |k| simplex.face_count(k))
        ))
    }

    fn pyramid(&mut self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_SHAPE_DIMENSIONS)?;
        let Some((base, height)) = self.extractor.pyramid(query) else {
            return Ok(
                "Please specify base side length and height for pyramid (e.g., 'base 2 height 3')"
                    .to_string(),
            );
        };

        let pyramid = HyperPyramid::new(dimensions, base, height)?;
        let properties = format!(
            "Geometric Properties:\n• Vertices: {}\n• Edges: {}\n• Slant height: {:.6}\n• Lateral edge: {:.6}\n• Base volume: {:.6}",
            format_count(pyramid.vertex_count()),
            format_count(pyramid.edge_count()),
            pyramid.slant_height(),
            pyramid.lateral_edge_length(),
            pyramid.base_volume()
        );

        if wants_create(query) {
            let name = self.save(Shape::Pyramid(pyramid.clone()));
            Ok(format!(
                "Created {} '{}':\n{}\nBase side = {}, Height = {}\n{}{}",
                pyramid.shape_type(),
                name,
                pyramid,
                base,
                height,
                formulas(&pyramid),
                properties
            ))
        } else {
            Ok(format!(
                "HyperPyramid properties:\n{}\n{}{}\n{}",
                pyramid,
                formulas(&pyramid),
                properties,
                face_counts(dimensions, |k| pyramid.face_count(k))
            ))
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tiling
    // ═══════════════════════════════════════════════════════════════════════

    fn tiling(&mut self, query: &str) -> String {
        match self.tiling_report(query) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Tiling query failed");
                format!("Error generating tiling pattern: {}", e)
            }
        }
    }

    /// Generate after checking the estimate against the tile cap
    fn generate(&mut self, request: &TilingRequest) -> Result<TilingPattern> {
        let estimated = request.estimated_tile_count()?;
        if estimated > self.max_tiles {
            return Err(GeometryError::TileLimitExceeded {
                estimated,
                limit: self.max_tiles,
            });
        }
        request.generate(&mut self.rng)
    }

    fn tiling_report(&mut self, query: &str) -> Result<String> {
        let dimensions = self.dimensions_or(query, DEFAULT_TILING_DIMENSIONS)?;
        let bounds = self
            .extractor
            .bounds(query, dimensions)
            .unwrap_or_else(|| vec![DEFAULT_TILING_BOUNDS; dimensions]);
        let density = self.extractor.density(query).unwrap_or(1.0);

        if query.contains("hexagon") {
            let side = self.extractor.parameter(query).unwrap_or(1.0);
            let request = TilingRequest::new("hexagonal", dimensions, bounds.clone())
                .with_density(density)
                .with_side_length(side);
            let pattern = self.generate(&request)?;
            let analysis = TilingAnalyzer::new(&pattern).analyze();

            Ok(format!(
                "Hexagonal Tiling Pattern:\n• Dimensions: {}D\n• Side length: {:.3}\n• Bounds: {}\n• Tile count: {}\n• Coverage efficiency: {:.3}\n• Tile density: {:.3} tiles/unit²\n• Symmetry: {}\n• Coordination number: {}\n• Vertex configuration: {}\n",
                dimensions,
                side,
                format_bounds(&bounds),
                analysis.tile_count,
                analysis.coverage_efficiency,
                analysis.tile_density,
                format_symmetry(&analysis.symmetry_properties),
                analysis.mathematical_properties.coordination_number,
                analysis.mathematical_properties.vertex_configuration
            ))
        } else if query.contains("voronoi") {
            let seeds = self
                .extractor
                .seed_count(query)
                .unwrap_or(DEFAULT_VORONOI_SEEDS);
            let request = TilingRequest::new("voronoi", dimensions, bounds.clone())
                .with_density(density)
                .with_random_seeds(seeds);
            let pattern = self.generate(&request)?;
            let analysis = TilingAnalyzer::new(&pattern).analyze();

            Ok(format!(
                "Voronoi Tiling Pattern:\n• Dimensions: {}D\n• Seed points: {}\n• Bounds: {}\n• Tile count: {}\n• Coverage efficiency: {:.3}\n• Tile density: {:.3} tiles/unit\n• Pattern type: Irregular (Voronoi)\n",
                dimensions,
                seeds,
                format_bounds(&bounds),
                analysis.tile_count,
                analysis.coverage_efficiency,
                analysis.tile_density
            ))
        } else {
            let Some(base_name) = tiling_base_name(query) else {
                return Ok(
                    "Please specify a base shape for regular tiling (sphere, cube, simplex, etc.)"
                        .to_string(),
                );
            };
            let parameter = self.extractor.parameter(query).unwrap_or(1.0);
            let request = TilingRequest::new("regular", dimensions, bounds.clone())
                .with_density(density)
                .with_shape(base_name, parameter);
            let pattern = self.generate(&request)?;
            let spacing = RegularTiling::new(pattern.base_shape().clone())?.spacing();
            let base_type = pattern
                .base_shape()
                .as_shape()
                .map_or_else(|| base_name.to_string(), |s| s.shape_type());
            let analysis = TilingAnalyzer::new(&pattern).analyze();
            let math = &analysis.mathematical_properties;

            Ok(format!(
                "Regular Tiling Pattern:\n• Base shape: {}\n• Dimensions: {}D\n• Bounds: {}\n• Tile count: {}\n• Coverage efficiency: {:.3}\n• Tile density: {:.3} tiles/unit\n• Spacing: {:.3}\n• Symmetry: {}\n• Periodic: {}, Regular: {}, Uniform: {}\n• Coordination number: {}\n• Vertex configuration: {}\n",
                base_type,
                dimensions,
                format_bounds(&bounds),
                analysis.tile_count,
                analysis.coverage_efficiency,
                analysis.tile_density,
                spacing,
                format_symmetry(&analysis.symmetry_properties),
                yes_no(math.is_periodic),
                yes_no(math.is_regular),
                yes_no(math.is_uniform),
                math.coordination_number,
                math.vertex_configuration
            ))
        }
    }
}

fn simplex_properties(simplex: &Simplex) -> String {
    format!(
        "Geometric Properties:\n• Vertices: {}\n• Edges: {}\n• Circumradius: {:.6}\n• Inradius: {:.6}\n• Height: {:.6}",
        simplex.vertex_count(),
        format_count(simplex.edge_count()),
        simplex.circumradius(),
        simplex.inradius(),
        simplex.height()
    )
}

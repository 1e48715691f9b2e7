//! Sphere/cube comparisons and per-dimension unit-sphere profiles

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shapes::{format_count, HyperCube, HyperSphere, NdShape};

/// Volume, surface and formulas of one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub volume: f64,
    pub surface_area: f64,
    pub volume_formula: String,
    pub surface_formula: String,
}

impl ShapeSummary {
    pub fn of(shape: &dyn NdShape) -> Self {
        Self {
            volume: shape.volume(),
            surface_area: shape.surface_area(),
            volume_formula: shape.volume_formula(),
            surface_formula: shape.surface_area_formula(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeSummary {
    #[serde(flatten)]
    pub summary: ShapeSummary,
    /// `None` when the count does not fit in 128 bits
    pub vertices: Option<u128>,
    pub edges: Option<u128>,
    pub diagonal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    pub volume_ratio_sphere_cube: f64,
    pub surface_ratio_sphere_cube: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Larger {
    Sphere,
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub volume_comparison: Larger,
    pub surface_comparison: Larger,
}

/// Sphere of radius `parameter` against cube of side `parameter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereCubeComparison {
    pub dimensions: usize,
    pub parameter: f64,
    pub sphere: ShapeSummary,
    pub cube: CubeSummary,
    pub ratios: Ratios,
    pub insights: Insights,
}

fn larger(sphere: f64, cube: f64) -> Larger {
    if sphere > cube {
        Larger::Sphere
    } else {
        Larger::Cube
    }
}

pub fn compare_sphere_cube(dimensions: usize, parameter: f64) -> Result<SphereCubeComparison> {
    let sphere = HyperSphere::new(dimensions, parameter)?;
    let cube = HyperCube::new(dimensions, parameter)?;
    let sphere_summary = ShapeSummary::of(&sphere);
    let cube_summary = ShapeSummary::of(&cube);

    let ratios = Ratios {
        volume_ratio_sphere_cube: sphere_summary.volume / cube_summary.volume,
        surface_ratio_sphere_cube: sphere_summary.surface_area / cube_summary.surface_area,
    };
    let insights = Insights {
        volume_comparison: larger(sphere_summary.volume, cube_summary.volume),
        surface_comparison: larger(sphere_summary.surface_area, cube_summary.surface_area),
    };

    Ok(SphereCubeComparison {
        dimensions,
        parameter,
        sphere: sphere_summary,
        cube: CubeSummary {
            summary: cube_summary,
            vertices: cube.vertex_count(),
            edges: cube.edge_count(),
            diagonal: cube.diagonal_length(),
        },
        ratios,
        insights,
    })
}

impl fmt::Display for SphereCubeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.parameter;
        writeln!(f, "Comparison in {}D (parameter = {}):\n", self.dimensions, p)?;

        writeln!(f, "SPHERE (radius = {}):", p)?;
        writeln!(f, "• Volume: {:.6}", self.sphere.volume)?;
        writeln!(f, "• Surface Area: {:.6}", self.sphere.surface_area)?;
        writeln!(f, "• Formula: {}\n", self.sphere.volume_formula)?;

        writeln!(f, "CUBE (side = {}):", p)?;
        writeln!(f, "• Volume: {:.6}", self.cube.summary.volume)?;
        writeln!(f, "• Surface Area: {:.6}", self.cube.summary.surface_area)?;
        writeln!(f, "• Formula: {}", self.cube.summary.volume_formula)?;
        writeln!(f, "• Vertices: {}", format_count(self.cube.vertices))?;
        writeln!(f, "• Edges: {}\n", format_count(self.cube.edges))?;

        writeln!(f, "RATIOS:")?;
        writeln!(f, "• Volume ratio (sphere/cube): {:.6}", self.ratios.volume_ratio_sphere_cube)?;
        writeln!(f, "• Surface ratio (sphere/cube): {:.6}\n", self.ratios.surface_ratio_sphere_cube)?;

        let more = match self.insights.volume_comparison {
            Larger::Sphere => "more",
            Larger::Cube => "less",
        };
        writeln!(f, "INSIGHTS:")?;
        writeln!(f, "• Sphere has {} volume than cube", more)?;
        write!(
            f,
            "• Cube has {} vertices vs sphere's continuous surface",
            format_count(self.cube.vertices)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInsights {
    pub volume_peaks_at: String,
    /// `None` once the unit volume underflows to zero
    pub surface_to_volume_ratio: Option<f64>,
    pub mathematical_note: String,
}

/// Unit-sphere facts for one dimension count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionProfile {
    pub dimensions: usize,
    pub unit_sphere: ShapeSummary,
    pub insights: DimensionInsights,
}

pub fn dimension_profile(dimensions: usize) -> Result<DimensionProfile> {
    let unit = HyperSphere::new(dimensions, 1.0)?;
    let summary = ShapeSummary::of(&unit);
    let ratio = (summary.volume > 0.0).then(|| summary.surface_area / summary.volume);
    Ok(DimensionProfile {
        dimensions,
        unit_sphere: summary,
        insights: DimensionInsights {
            volume_peaks_at: "5-6 dimensions for unit spheres".to_string(),
            surface_to_volume_ratio: ratio,
            mathematical_note: format!(
                "In {}D, most volume is concentrated near the surface",
                dimensions
            ),
        },
    })
}

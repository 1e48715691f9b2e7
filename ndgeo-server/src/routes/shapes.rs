//! Shape evaluation routes

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use ndgeo_core::{
    classic_sphere_report, HyperCube, HyperEllipsoid, HyperPyramid, HyperSphere, NdShape, Simplex,
};
use serde::{Deserialize, Serialize};

use super::check_dimensions;
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct SphereRequest {
    pub dimensions: usize,
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
pub struct SideRequest {
    pub dimensions: usize,
    pub side_length: f64,
}

#[derive(Debug, Deserialize)]
pub struct EllipsoidRequest {
    pub dimensions: usize,
    /// One per dimension
    pub semi_axes: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PyramidRequest {
    pub dimensions: usize,
    pub base_side_length: f64,
    pub height: f64,
}

/// Common payload of every shape endpoint
#[derive(Debug, Serialize)]
pub struct ShapeResponse<A> {
    pub dimensions: usize,
    pub parameter: f64,
    pub parameter_name: &'static str,
    pub volume: f64,
    pub surface_area: f64,
    pub volume_formula: String,
    pub surface_area_formula: String,
    pub shape_type: String,
    pub additional_properties: A,
}

impl<A> ShapeResponse<A> {
    fn new(
        shape: &dyn NdShape,
        parameter: f64,
        parameter_name: &'static str,
        additional_properties: A,
    ) -> Self {
        Self {
            dimensions: shape.dimensions(),
            parameter,
            parameter_name,
            volume: shape.volume(),
            surface_area: shape.surface_area(),
            volume_formula: shape.volume_formula(),
            surface_area_formula: shape.surface_area_formula(),
            shape_type: shape.shape_type(),
            additional_properties,
        }
    }
}

// Combinatorial counts are `None` (JSON null) once they overflow 128 bits.

#[derive(Debug, Serialize)]
pub struct SphereProperties {
    pub diameter: f64,
}

#[derive(Debug, Serialize)]
pub struct CubeProperties {
    pub vertices: Option<u128>,
    pub edges: Option<u128>,
    pub diagonal: f64,
    /// Cross-section at half the side length from the center
    pub cross_section_volume: f64,
}

#[derive(Debug, Serialize)]
pub struct EllipsoidProperties {
    pub semi_axes: Vec<f64>,
    pub axis_ratio: f64,
    pub is_sphere: bool,
    /// Only defined in 2D
    pub eccentricity: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SimplexProperties {
    pub vertices: usize,
    pub edges: Option<u128>,
    pub circumradius: f64,
    pub inradius: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct PyramidProperties {
    pub height: f64,
    pub vertices: Option<u128>,
    pub edges: Option<u128>,
    pub slant_height: f64,
    pub lateral_edge_length: f64,
    pub base_volume: f64,
    pub base_surface_area: f64,
}

pub async fn sphere(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SphereRequest>,
) -> Result<Json<ShapeResponse<SphereProperties>>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let sphere = HyperSphere::new(req.dimensions, req.radius)?;
    let extra = SphereProperties {
        diameter: sphere.diameter(),
    };
    Ok(Json(ShapeResponse::new(&sphere, req.radius, "radius", extra)))
}

pub async fn cube(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SideRequest>,
) -> Result<Json<ShapeResponse<CubeProperties>>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let cube = HyperCube::new(req.dimensions, req.side_length)?;
    let extra = CubeProperties {
        vertices: cube.vertex_count(),
        edges: cube.edge_count(),
        diagonal: cube.diagonal_length(),
        cross_section_volume: cube.cross_section(req.side_length / 2.0),
    };
    Ok(Json(ShapeResponse::new(
        &cube,
        req.side_length,
        "side_length",
        extra,
    )))
}

pub async fn ellipsoid(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EllipsoidRequest>,
) -> Result<Json<ShapeResponse<EllipsoidProperties>>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let ellipsoid = HyperEllipsoid::new(req.dimensions, req.semi_axes)?;
    let max_axis = ellipsoid
        .semi_axes()
        .iter()
        .copied()
        .fold(f64::MIN, f64::max);
    let extra = EllipsoidProperties {
        semi_axes: ellipsoid.semi_axes().to_vec(),
        axis_ratio: ellipsoid.axis_ratio(),
        is_sphere: ellipsoid.is_sphere(),
        eccentricity: ellipsoid.eccentricity().ok(),
    };
    Ok(Json(ShapeResponse::new(
        &ellipsoid,
        max_axis,
        "max_semi_axis",
        extra,
    )))
}

pub async fn simplex(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SideRequest>,
) -> Result<Json<ShapeResponse<SimplexProperties>>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let simplex = Simplex::new(req.dimensions, req.side_length)?;
    let extra = SimplexProperties {
        vertices: simplex.vertex_count(),
        edges: simplex.edge_count(),
        circumradius: simplex.circumradius(),
        inradius: simplex.inradius(),
        height: simplex.height(),
    };
    Ok(Json(ShapeResponse::new(
        &simplex,
        req.side_length,
        "side_length",
        extra,
    )))
}

pub async fn pyramid(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PyramidRequest>,
) -> Result<Json<ShapeResponse<PyramidProperties>>, ApiError> {
    check_dimensions(&state, req.dimensions)?;
    let pyramid = HyperPyramid::new(req.dimensions, req.base_side_length, req.height)?;
    let extra = PyramidProperties {
        height: pyramid.height(),
        vertices: pyramid.vertex_count(),
        edges: pyramid.edge_count(),
        slant_height: pyramid.slant_height(),
        lateral_edge_length: pyramid.lateral_edge_length(),
        base_volume: pyramid.base_volume(),
        base_surface_area: pyramid.base_surface_area(),
    };
    Ok(Json(ShapeResponse::new(
        &pyramid,
        req.base_side_length,
        "base_side_length",
        extra,
    )))
}

#[derive(Debug, Deserialize)]
pub struct ClassicSphereParams {
    pub diameter: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassicSphereResponse {
    pub diameter: f64,
    pub result: String,
    pub success: bool,
}

/// Plain 3D sphere report for a given diameter
pub async fn classic_sphere(
    Query(params): Query<ClassicSphereParams>,
) -> Result<Json<ClassicSphereResponse>, ApiError> {
    let result = classic_sphere_report(params.diameter)?;
    Ok(Json(ClassicSphereResponse {
        diameter: params.diameter,
        result,
        success: true,
    }))
}

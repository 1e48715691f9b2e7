//! Closed-form n-dimensional shapes.
//!
//! | Shape | Parameters | Volume |
//! |-------|------------|--------|
//! | HyperSphere | radius r | V_n(1)·rⁿ |
//! | HyperCube | side s | sⁿ |
//! | HyperEllipsoid | semi-axes a₁..aₙ | V_n(1)·∏aᵢ |
//! | Simplex | side s | √(n+1)/(2ⁿ·n!)·sⁿ |
//! | HyperPyramid | base b, height h | bⁿ⁻¹·h/n |
//!
//! `V_n(1)` is the volume of the unit n-ball, see [`unit_ball_volume`].

pub mod classic;
pub mod ellipsoid;
pub mod hypercube;
pub mod hypersphere;
pub mod pyramid;
pub mod simplex;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

pub use classic::{classic_sphere_report, ClassicSphere};
pub use ellipsoid::HyperEllipsoid;
pub use hypercube::HyperCube;
pub use hypersphere::HyperSphere;
pub use pyramid::HyperPyramid;
pub use simplex::Simplex;

/// Common interface for every n-dimensional shape
pub trait NdShape {
    /// Number of dimensions the shape lives in
    fn dimensions(&self) -> usize;

    /// n-dimensional volume (hypervolume)
    fn volume(&self) -> f64;

    /// (n-1)-dimensional surface measure
    fn surface_area(&self) -> f64;

    /// Human-readable name, e.g. "Circle" or "7D HyperCube"
    fn shape_type(&self) -> String;

    /// Volume formula in mathematical notation
    fn volume_formula(&self) -> String;

    /// Surface area formula in mathematical notation
    fn surface_area_formula(&self) -> String;

    /// Whether `point` lies inside the shape
    fn contains_point(&self, point: &[f64]) -> Result<bool>;
}

/// Any of the supported shapes, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Sphere(HyperSphere),
    Cube(HyperCube),
    Ellipsoid(HyperEllipsoid),
    Simplex(Simplex),
    Pyramid(HyperPyramid),
}

impl Shape {
    fn inner(&self) -> &dyn NdShape {
        match self {
            Shape::Sphere(s) => s,
            Shape::Cube(s) => s,
            Shape::Ellipsoid(s) => s,
            Shape::Simplex(s) => s,
            Shape::Pyramid(s) => s,
        }
    }
}

impl NdShape for Shape {
    fn dimensions(&self) -> usize {
        self.inner().dimensions()
    }

    fn volume(&self) -> f64 {
        self.inner().volume()
    }

    fn surface_area(&self) -> f64 {
        self.inner().surface_area()
    }

    fn shape_type(&self) -> String {
        self.inner().shape_type()
    }

    fn volume_formula(&self) -> String {
        self.inner().volume_formula()
    }

    fn surface_area_formula(&self) -> String {
        self.inner().surface_area_formula()
    }

    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        self.inner().contains_point(point)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sphere(s) => s.fmt(f),
            Shape::Cube(s) => s.fmt(f),
            Shape::Ellipsoid(s) => s.fmt(f),
            Shape::Simplex(s) => s.fmt(f),
            Shape::Pyramid(s) => s.fmt(f),
        }
    }
}

/// Volume of the unit n-ball.
///
/// Even n: π^(n/2) / (n/2)!. Odd n: 2^((n+1)/2)·π^((n-1)/2) / n!!.
/// Evaluated as running products so no gamma function is needed.
pub fn unit_ball_volume(n: usize) -> f64 {
    use std::f64::consts::PI;

    if n % 2 == 0 {
        let mut result = PI.powf(n as f64 / 2.0);
        for i in 1..=n / 2 {
            result /= i as f64;
        }
        result
    } else {
        let mut result = 2f64.powf((n + 1) as f64 / 2.0) * PI.powf((n - 1) as f64 / 2.0);
        let mut i = n;
        while i > 0 {
            result /= i as f64;
            i = i.saturating_sub(2);
        }
        result
    }
}

/// Binomial coefficient C(n, k), `None` on overflow
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k {
        // exact at every step: result = C(n - k + i, i)
        result = result.checked_mul((n - k + i) as u128)? / i as u128;
    }
    Some(result)
}

/// n! as a float
pub(crate) fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// 2^exp, `None` on overflow
pub(crate) fn pow2(exp: usize) -> Option<u128> {
    u32::try_from(exp).ok().and_then(|e| 2u128.checked_pow(e))
}

/// Count for display; counts past 128 bits read as such
pub fn format_count(count: Option<u128>) -> String {
    count.map_or_else(|| "more than 2^128".to_string(), |c| c.to_string())
}

pub(crate) fn validate_dimensions(dimensions: usize) -> Result<()> {
    if dimensions < 1 {
        return Err(GeometryError::InvalidDimensions { dimensions });
    }
    Ok(())
}

pub(crate) fn validate_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::invalid_parameter(name, value));
    }
    Ok(())
}

pub(crate) fn check_point(expected: usize, point: &[f64]) -> Result<()> {
    if point.len() != expected {
        return Err(GeometryError::PointDimensionMismatch {
            expected,
            actual: point.len(),
        });
    }
    Ok(())
}

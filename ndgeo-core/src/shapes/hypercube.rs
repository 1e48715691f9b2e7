//! N-dimensional hypercube (measure polytope)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{binomial, check_point, pow2, validate_dimensions, validate_positive, NdShape};
use crate::error::Result;

/// An axis-aligned hypercube spanning `[0, side]` on every axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperCube {
    dimensions: usize,
    side_length: f64,
}

impl HyperCube {
    pub fn new(dimensions: usize, side_length: f64) -> Result<Self> {
        validate_dimensions(dimensions)?;
        validate_positive("Side length", side_length)?;
        Ok(Self {
            dimensions,
            side_length,
        })
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// 2ⁿ vertices
    pub fn vertex_count(&self) -> Option<u128> {
        pow2(self.dimensions)
    }

    /// n·2ⁿ⁻¹ edges
    pub fn edge_count(&self) -> Option<u128> {
        pow2(self.dimensions - 1)?.checked_mul(self.dimensions as u128)
    }

    /// Number of k-dimensional faces: C(n,k)·2ⁿ⁻ᵏ
    pub fn face_count(&self, k: usize) -> Option<u128> {
        if k > self.dimensions {
            return Some(0);
        }
        binomial(self.dimensions, k)?.checked_mul(pow2(self.dimensions - k)?)
    }

    /// Length of the main diagonal, s·√n
    pub fn diagonal_length(&self) -> f64 {
        self.side_length * (self.dimensions as f64).sqrt()
    }

    /// Volume of the (n-1)-dimensional slice at `distance` along one axis
    pub fn cross_section(&self, distance: f64) -> f64 {
        if distance <= 0.0 || distance >= self.side_length {
            return 0.0;
        }
        if self.dimensions == 1 {
            return 1.0;
        }
        self.side_length.powi(self.dimensions as i32 - 1)
    }
}

impl NdShape for HyperCube {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn volume(&self) -> f64 {
        self.side_length.powi(self.dimensions as i32)
    }

    fn surface_area(&self) -> f64 {
        if self.dimensions == 1 {
            return 2.0;
        }
        let n = self.dimensions;
        2.0 * n as f64 * self.side_length.powi(n as i32 - 1)
    }

    fn shape_type(&self) -> String {
        match self.dimensions {
            2 => "Square".to_string(),
            3 => "Cube".to_string(),
            n => format!("{}D HyperCube", n),
        }
    }

    fn volume_formula(&self) -> String {
        format!("V_{} = s^{}", self.dimensions, self.dimensions)
    }

    fn surface_area_formula(&self) -> String {
        match self.dimensions {
            1 => "S₁ = 2".to_string(),
            n => format!("S_{} = 2 × {} × s^{}", n, n, n - 1),
        }
    }

    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        check_point(self.dimensions, point)?;
        Ok(point.iter().all(|&c| (0.0..=self.side_length).contains(&c)))
    }
}

impl fmt::Display for HyperCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (dim={}, side={:.3}): Volume={:.6}, Surface Area={:.6}",
            self.shape_type(),
            self.dimensions,
            self.side_length,
            self.volume(),
            self.surface_area()
        )?;
        if let Some(v) = self.vertex_count() {
            write!(f, ", Vertices={}", v)?;
        }
        Ok(())
    }
}

//! Regular n-simplex (generalized triangle)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{binomial, check_point, factorial, validate_dimensions, validate_positive, NdShape};
use crate::error::Result;

/// A regular simplex with every edge of length `side_length`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simplex {
    dimensions: usize,
    side_length: f64,
}

impl Simplex {
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

    pub fn vertex_count(&self) -> usize {
        self.dimensions + 1
    }

    /// C(n+1, 2)
    pub fn edge_count(&self) -> Option<u128> {
        binomial(self.dimensions + 1, 2)
    }

    /// Number of k-dimensional faces: C(n+1, k+1)
    pub fn face_count(&self, k: usize) -> Option<u128> {
        match k {
            k if k > self.dimensions => Some(0),
            k if k == self.dimensions => Some(1),
            k => binomial(self.dimensions + 1, k + 1),
        }
    }

    /// Radius of the circumscribed sphere
    pub fn circumradius(&self) -> f64 {
        let s = self.side_length;
        match self.dimensions {
            2 => s / 3f64.sqrt(),
            3 => s * 6f64.sqrt() / 4.0,
            n => {
                let n = n as f64;
                s * (n / (2.0 * (n + 1.0))).sqrt()
            }
        }
    }

    /// Radius of the inscribed sphere
    pub fn inradius(&self) -> f64 {
        let s = self.side_length;
        match self.dimensions {
            2 => s / (2.0 * 3f64.sqrt()),
            3 => s / (2.0 * 6f64.sqrt()),
            n => {
                let n = n as f64;
                s * (1.0 / (2.0 * n * (n + 1.0))).sqrt()
            }
        }
    }

    pub fn height(&self) -> f64 {
        let s = self.side_length;
        match self.dimensions {
            2 => s * 3f64.sqrt() / 2.0,
            3 => s * (2.0f64 / 3.0).sqrt(),
            n => {
                let n = n as f64;
                s * (2.0 * (n + 1.0) / n).sqrt()
            }
        }
    }
}

impl NdShape for Simplex {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn volume(&self) -> f64 {
        let s = self.side_length;
        match self.dimensions {
            1 => s,
            2 => 3f64.sqrt() / 4.0 * s * s,
            3 => 2f64.sqrt() / 12.0 * s.powi(3),
            n => {
                let numerator = ((n + 1) as f64).sqrt();
                let denominator = 2f64.powi(n as i32) * factorial(n);
                numerator / denominator * s.powi(n as i32)
            }
        }
    }

    fn surface_area(&self) -> f64 {
        let s = self.side_length;
        match self.dimensions {
            1 => 2.0,
            2 => 3.0 * s,
            3 => 3f64.sqrt() * s * s,
            n => {
                let facet = Simplex {
                    dimensions: n - 1,
                    side_length: s,
                };
                (n + 1) as f64 * facet.volume()
            }
        }
    }

    fn shape_type(&self) -> String {
        match self.dimensions {
            1 => "Line Segment".to_string(),
            2 => "Triangle".to_string(),
            3 => "Tetrahedron".to_string(),
            n => format!("{}D Simplex", n),
        }
    }

    fn volume_formula(&self) -> String {
        match self.dimensions {
            1 => "V₁ = s".to_string(),
            2 => "V₂ = (√3/4) × s²".to_string(),
            3 => "V₃ = (√2/12) × s³".to_string(),
            n => format!("V_{} = (√{} / (2^{} × {}!)) × s^{}", n, n + 1, n, n, n),
        }
    }

    fn surface_area_formula(&self) -> String {
        match self.dimensions {
            1 => "S₁ = 2".to_string(),
            2 => "S₂ = 3s".to_string(),
            3 => "S₃ = √3 × s²".to_string(),
            n => format!("S_{} = ({}) × V_{}", n, n + 1, n - 1),
        }
    }

    /// Bounding-box test in 2D/3D, circumsphere test above that
    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        check_point(self.dimensions, point)?;
        let half_side = self.side_length / 2.0;
        let half_height = self.height() / 2.0;
        let inside = match *point {
            [x] => x.abs() <= half_side,
            [x, y] => x.abs() <= half_side && y.abs() <= half_height,
            [x, y, z] => x.abs() <= half_side && y.abs() <= half_side && z.abs() <= half_height,
            _ => point.iter().map(|c| c * c).sum::<f64>().sqrt() <= self.circumradius(),
        };
        Ok(inside)
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (dim={}, side={:.3}): Volume={:.6}, Surface Area={:.6}, Vertices={}",
            self.shape_type(),
            self.dimensions,
            self.side_length,
            self.volume(),
            self.surface_area(),
            self.vertex_count()
        )
    }
}

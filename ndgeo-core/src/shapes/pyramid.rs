//! N-dimensional right pyramid over a hypercube base

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{binomial, check_point, pow2, validate_dimensions, validate_positive, NdShape};
use crate::error::Result;

/// Apex at `height` above the centre of an (n-1)-cube of side `base_side_length`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperPyramid {
    dimensions: usize,
    base_side_length: f64,
    height: f64,
}

impl HyperPyramid {
    pub fn new(dimensions: usize, base_side_length: f64, height: f64) -> Result<Self> {
        validate_dimensions(dimensions)?;
        validate_positive("Base side length", base_side_length)?;
        validate_positive("Height", height)?;
        Ok(Self {
            dimensions,
            base_side_length,
            height,
        })
    }

    pub fn base_side_length(&self) -> f64 {
        self.base_side_length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// bⁿ⁻¹
    pub fn base_volume(&self) -> f64 {
        self.base_side_length.powi(self.dimensions as i32 - 1)
    }

    /// Boundary measure of the base cube
    pub fn base_surface_area(&self) -> f64 {
        if self.dimensions <= 1 {
            return 0.0;
        }
        let n = self.dimensions;
        2.0 * (n - 1) as f64 * self.base_side_length.powi(n as i32 - 2)
    }

    /// Distance from the middle of a base edge to the apex
    pub fn slant_height(&self) -> f64 {
        (self.height.powi(2) + (self.base_side_length / 2.0).powi(2)).sqrt()
    }

    /// Distance from a base corner to the apex
    pub fn lateral_edge_length(&self) -> f64 {
        let corner = self.base_side_length * ((self.dimensions - 1) as f64).sqrt() / 2.0;
        (self.height.powi(2) + corner.powi(2)).sqrt()
    }

    /// Base vertices plus the apex
    pub fn vertex_count(&self) -> Option<u128> {
        if self.dimensions == 1 {
            return Some(2);
        }
        pow2(self.dimensions - 1)?.checked_add(1)
    }

    /// Base cube edges plus one edge per base vertex to the apex
    pub fn edge_count(&self) -> Option<u128> {
        match self.dimensions {
            1 => Some(1),
            2 => Some(3),
            n => {
                let base = pow2(n - 2)?.checked_mul((n - 1) as u128)?;
                base.checked_add(pow2(n - 1)?)
            }
        }
    }

    /// Number of k-dimensional faces
    pub fn face_count(&self, k: usize) -> Option<u128> {
        let n = self.dimensions;
        if k > n {
            return Some(0);
        }
        if k == n {
            return Some(1);
        }
        if k + 1 == n {
            // base + one lateral facet per base facet
            return Some(1 + 2 * (n as u128 - 1));
        }
        match k {
            0 => self.vertex_count(),
            1 => self.edge_count(),
            k => {
                let base = binomial(n - 1, k)?.checked_mul(pow2(n - 1 - k)?)?;
                let lateral = binomial(n - 1, k - 1)?.checked_mul((n - 1) as u128)?;
                base.checked_add(lateral)
            }
        }
    }

    /// Volume of the (n-1)-cube slice at `height_level` above the base
    pub fn cross_section(&self, height_level: f64) -> f64 {
        if height_level < 0.0 || height_level > self.height {
            return 0.0;
        }
        if self.dimensions == 1 {
            return 1.0;
        }
        let scaled = self.base_side_length * (self.height - height_level) / self.height;
        scaled.powi(self.dimensions as i32 - 1)
    }
}

impl NdShape for HyperPyramid {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn volume(&self) -> f64 {
        let (b, h) = (self.base_side_length, self.height);
        match self.dimensions {
            1 => b,
            2 => 0.5 * b * h,
            3 => b * b * h / 3.0,
            n => self.base_volume() * h / n as f64,
        }
    }

    fn surface_area(&self) -> f64 {
        let b = self.base_side_length;
        let slant = self.slant_height();
        match self.dimensions {
            1 => 2.0,
            2 => b + 2.0 * slant,
            3 => b * b + 4.0 * 0.5 * b * slant,
            n => {
                // lateral facets approximated as base-edge face times slant height
                let lateral = b.powi(n as i32 - 2) * slant;
                self.base_volume() + 2.0 * (n - 1) as f64 * lateral
            }
        }
    }

    fn shape_type(&self) -> String {
        match self.dimensions {
            1 => "Line Segment".to_string(),
            2 => "Triangle".to_string(),
            3 => "Square Pyramid".to_string(),
            n => format!("{}D HyperPyramid", n),
        }
    }

    fn volume_formula(&self) -> String {
        match self.dimensions {
            1 => "V₁ = s".to_string(),
            2 => "V₂ = (1/2) × base × height".to_string(),
            3 => "V₃ = (1/3) × base² × height".to_string(),
            n => format!("V_{} = (1/{}) × base^{} × height", n, n, n - 1),
        }
    }

    fn surface_area_formula(&self) -> String {
        match self.dimensions {
            1 => "S₁ = 2".to_string(),
            2 => "S₂ = base + 2 × √(h² + (base/2)²)".to_string(),
            3 => "S₃ = base² + 4 × (1/2) × base × √(h² + (base/2)²)".to_string(),
            n => format!(
                "S_{} = base^{} + {} × lateral_face_area",
                n,
                n - 1,
                2 * (n - 1)
            ),
        }
    }

    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        check_point(self.dimensions, point)?;
        let (b, h) = (self.base_side_length, self.height);
        let inside = match *point {
            [x] => (0.0..=b).contains(&x),
            // right triangle with legs on the axes
            [x, y] => x >= 0.0 && y >= 0.0 && x / b + y / h <= 1.0,
            [x, y, z] => {
                let half = b / 2.0;
                (0.0..=h).contains(&z) && x.abs().max(y.abs()) <= half * (h - z) / h
            }
            _ => {
                let (base, last) = point.split_at(point.len() - 1);
                let z = last[0];
                if !(0.0..=h).contains(&z) {
                    return Ok(false);
                }
                let max_coord = base.iter().fold(0.0f64, |acc, c| acc.max(c.abs()));
                max_coord <= b / 2.0 * (h - z) / h
            }
        };
        Ok(inside)
    }
}

impl fmt::Display for HyperPyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (dim={}, base={:.3}, height={:.3}): Volume={:.6}, Surface Area={:.6}",
            self.shape_type(),
            self.dimensions,
            self.base_side_length,
            self.height,
            self.volume(),
            self.surface_area()
        )?;
        if let Some(v) = self.vertex_count() {
            write!(f, ", Vertices={}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_pyramid() {
        let p = HyperPyramid::new(3, 2.0, 3.0).unwrap();
        assert!((p.volume() - 4.0).abs() < 1e-12);
        let slant = 10f64.sqrt();
        assert!((p.slant_height() - slant).abs() < 1e-12);
        assert!((p.surface_area() - (4.0 + 4.0 * slant)).abs() < 1e-12);
        assert!((p.lateral_edge_length() - 11f64.sqrt()).abs() < 1e-12);
        assert_eq!(p.vertex_count(), Some(5));
        assert_eq!(p.edge_count(), Some(8));
        assert_eq!(p.face_count(2), Some(5));
        assert_eq!(p.shape_type(), "Square Pyramid");
    }

    #[test]
    fn test_triangle_case() {
        let p = HyperPyramid::new(2, 2.0, 1.0).unwrap();
        assert!((p.volume() - 1.0).abs() < 1e-12);
        assert!((p.surface_area() - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
        assert_eq!(p.edge_count(), Some(3));
        assert!(p.contains_point(&[0.5, 0.2]).unwrap());
        assert!(!p.contains_point(&[1.8, 0.5]).unwrap());
    }

    #[test]
    fn test_four_dimensional_counts() {
        let p = HyperPyramid::new(4, 1.0, 1.0).unwrap();
        // cube base (8 vertices) + apex
        assert_eq!(p.vertex_count(), Some(9));
        // 12 cube edges + 8 lateral edges
        assert_eq!(p.edge_count(), Some(20));
        // 6 base squares plus the lateral estimate (n-1)·C(n-1, k-1)
        assert_eq!(p.face_count(2), Some(15));
        // cube base + 6 square pyramids
        assert_eq!(p.face_count(3), Some(7));
        assert_eq!(p.face_count(4), Some(1));
        assert!((p.volume() - 0.25).abs() < 1e-12);
        assert!((p.base_surface_area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_section_shrinks_linearly() {
        let p = HyperPyramid::new(3, 2.0, 4.0).unwrap();
        assert!((p.cross_section(0.0) - 4.0).abs() < 1e-12);
        assert!((p.cross_section(2.0) - 1.0).abs() < 1e-12);
        assert!(p.cross_section(4.0).abs() < 1e-12);
        assert_eq!(p.cross_section(5.0), 0.0);
    }

    #[test]
    fn test_contains_point_higher_dimensions() {
        let p = HyperPyramid::new(5, 2.0, 2.0).unwrap();
        assert!(p.contains_point(&[0.1, 0.1, 0.1, 0.1, 1.0]).unwrap());
        assert!(!p.contains_point(&[0.9, 0.0, 0.0, 0.0, 1.5]).unwrap());
        assert!(!p.contains_point(&[0.0, 0.0, 0.0, 0.0, -0.1]).unwrap());
    }

    #[test]
    fn test_requires_positive_height() {
        assert!(HyperPyramid::new(3, 1.0, 0.0).is_err());
        assert!(HyperPyramid::new(3, -1.0, 1.0).is_err());
    }
}

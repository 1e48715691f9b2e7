//! N-dimensional hyperellipsoid

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{check_point, unit_ball_volume, validate_dimensions, validate_positive, NdShape};
use crate::error::{GeometryError, Result};

/// Axes closer than this are treated as equal
const SPHERE_TOLERANCE: f64 = 1e-10;

/// Knud Thomsen exponent for the 3D surface approximation
const THOMSEN_P: f64 = 1.6075;

/// An axis-aligned ellipsoid centred at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperEllipsoid {
    dimensions: usize,
    semi_axes: Vec<f64>,
}

impl HyperEllipsoid {
    /// Create an ellipsoid with exactly one semi-axis per dimension
    pub fn new(dimensions: usize, semi_axes: Vec<f64>) -> Result<Self> {
        validate_dimensions(dimensions)?;
        if semi_axes.len() != dimensions {
            return Err(GeometryError::ParameterCount {
                shape: "HyperEllipsoid".to_string(),
                parameter: "semi-axes".to_string(),
                expected: dimensions,
                actual: semi_axes.len(),
            });
        }
        for &axis in &semi_axes {
            validate_positive("Semi-axis", axis)?;
        }
        Ok(Self {
            dimensions,
            semi_axes,
        })
    }

    pub fn semi_axes(&self) -> &[f64] {
        &self.semi_axes
    }

    fn max_axis(&self) -> f64 {
        self.semi_axes.iter().copied().fold(f64::MIN, f64::max)
    }

    fn min_axis(&self) -> f64 {
        self.semi_axes.iter().copied().fold(f64::MAX, f64::min)
    }

    /// Eccentricity √(1 - (b/a)²); only defined for ellipses
    pub fn eccentricity(&self) -> Result<f64> {
        if self.dimensions != 2 {
            return Err(GeometryError::UndefinedProperty {
                property: "Eccentricity".to_string(),
                reason: format!("only defined for 2D ellipses, got {}D", self.dimensions),
            });
        }
        let ratio = self.min_axis() / self.max_axis();
        Ok((1.0 - ratio * ratio).sqrt())
    }

    /// Ratio of the largest to the smallest semi-axis
    pub fn axis_ratio(&self) -> f64 {
        self.max_axis() / self.min_axis()
    }

    pub fn is_sphere(&self) -> bool {
        self.max_axis() - self.min_axis() < SPHERE_TOLERANCE
    }

    /// Volume of the (n-1)-dimensional slice perpendicular to `axis` at `distance`
    pub fn cross_section(&self, axis: usize, distance: f64) -> Result<f64> {
        if axis >= self.dimensions {
            return Err(GeometryError::UndefinedProperty {
                property: "Cross-section".to_string(),
                reason: format!("axis {} out of range for {}D ellipsoid", axis, self.dimensions),
            });
        }
        let along = self.semi_axes[axis];
        if distance.abs() > along {
            return Ok(0.0);
        }
        if self.dimensions == 1 {
            return Ok(1.0);
        }

        let scale = (1.0 - (distance / along).powi(2)).sqrt();
        let axes: Vec<f64> = self
            .semi_axes
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != axis)
            .map(|(_, a)| a * scale)
            .collect();

        // A slice at the very tip degenerates to a point
        if axes.iter().any(|&a| a <= 0.0) {
            return Ok(0.0);
        }
        Ok(HyperEllipsoid::new(self.dimensions - 1, axes)?.volume())
    }
}

impl NdShape for HyperEllipsoid {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn volume(&self) -> f64 {
        unit_ball_volume(self.dimensions) * self.semi_axes.iter().product::<f64>()
    }

    fn surface_area(&self) -> f64 {
        match self.semi_axes.as_slice() {
            [_] => 2.0,
            &[a, b] => {
                // Ramanujan's second approximation
                let h = ((a - b) / (a + b)).powi(2);
                PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
            }
            &[a, b, c] => {
                if self.is_sphere() {
                    return 4.0 * PI * a * a;
                }
                let p = THOMSEN_P;
                let mean = (a.powf(p) * b.powf(p) + a.powf(p) * c.powf(p) + b.powf(p) * c.powf(p)) / 3.0;
                4.0 * PI * mean.powf(1.0 / p)
            }
            axes => {
                let n = axes.len() as f64;
                let geometric_mean = axes.iter().product::<f64>().powf(1.0 / n);
                n * self.volume() / geometric_mean
            }
        }
    }

    fn shape_type(&self) -> String {
        let name = match (self.is_sphere(), self.dimensions) {
            (true, 2) => "Circle",
            (true, 3) => "Sphere",
            (true, _) => "HyperSphere",
            (false, 2) => "Ellipse",
            (false, 3) => "Ellipsoid",
            (false, _) => "HyperEllipsoid",
        };
        name.to_string()
    }

    fn volume_formula(&self) -> String {
        match self.dimensions {
            1 => "V₁ = 2a".to_string(),
            2 => "V₂ = π × a × b".to_string(),
            3 => "V₃ = (4/3)π × a × b × c".to_string(),
            n => {
                let half = n as f64 / 2.0;
                format!("V_{} = (π^{} / Γ({} + 1)) × ∏aᵢ", n, half, half)
            }
        }
    }

    fn surface_area_formula(&self) -> String {
        match self.dimensions {
            1 => "S₁ = 2".to_string(),
            2 => "S₂ ≈ π(a + b)(1 + 3h/(10 + √(4-3h))), h = ((a-b)/(a+b))²".to_string(),
            3 => "S₃ ≈ 4π((aᵖbᵖ + aᵖcᵖ + bᵖcᵖ)/3)^(1/p), p ≈ 1.6075".to_string(),
            n => format!("S_{} ≈ n × Volume / (geometric mean of semi-axes)", n),
        }
    }

    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        check_point(self.dimensions, point)?;
        let sum: f64 = point
            .iter()
            .zip(&self.semi_axes)
            .map(|(x, a)| (x / a).powi(2))
            .sum();
        Ok(sum <= 1.0)
    }
}

impl fmt::Display for HyperEllipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axes: Vec<String> = self.semi_axes.iter().map(|a| format!("{:.3}", a)).collect();
        write!(
            f,
            "{} (dim={}, axes=[{}]): Volume={:.6}, Surface Area={:.6}",
            self.shape_type(),
            self.dimensions,
            axes.join(", "),
            self.volume(),
            self.surface_area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::HyperSphere;

    #[test]
    fn test_axis_count_must_match() {
        let err = HyperEllipsoid::new(3, vec![1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("exactly 3 semi-axes"));
        assert!(HyperEllipsoid::new(2, vec![1.0, -2.0]).is_err());
    }

    #[test]
    fn test_equal_axes_match_sphere() {
        for n in 1..8 {
            let e = HyperEllipsoid::new(n, vec![1.5; n]).unwrap();
            let s = HyperSphere::new(n, 1.5).unwrap();
            assert!((e.volume() - s.volume()).abs() < 1e-10);
            assert!(e.is_sphere());
        }
        let circle = HyperEllipsoid::new(2, vec![2.0, 2.0]).unwrap();
        assert!((circle.surface_area() - 4.0 * PI).abs() < 1e-10);
        assert_eq!(circle.shape_type(), "Circle");
    }

    #[test]
    fn test_ellipse() {
        let e = HyperEllipsoid::new(2, vec![3.0, 2.0]).unwrap();
        assert!((e.volume() - 6.0 * PI).abs() < 1e-10);
        assert_eq!(e.shape_type(), "Ellipse");
        assert!((e.eccentricity().unwrap() - (5f64 / 9.0).sqrt()).abs() < 1e-12);
        assert!((e.axis_ratio() - 1.5).abs() < 1e-12);
        // Ramanujan is accurate to ~1e-9 relative here
        assert!((e.surface_area() - 15.865_439_589_290_6).abs() < 1e-6);
    }

    #[test]
    fn test_eccentricity_only_in_2d() {
        let e = HyperEllipsoid::new(3, vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            e.eccentricity(),
            Err(GeometryError::UndefinedProperty { .. })
        ));
        assert_eq!(e.shape_type(), "Ellipsoid");
    }

    #[test]
    fn test_cross_section() {
        let e = HyperEllipsoid::new(3, vec![1.0, 2.0, 3.0]).unwrap();
        // centre slice along axis 0 is the ellipse with axes 2 and 3
        assert!((e.cross_section(0, 0.0).unwrap() - 6.0 * PI).abs() < 1e-10);
        assert_eq!(e.cross_section(0, 1.5).unwrap(), 0.0);
        assert!(e.cross_section(3, 0.0).is_err());
    }

    #[test]
    fn test_contains_point() {
        let e = HyperEllipsoid::new(2, vec![2.0, 1.0]).unwrap();
        assert!(e.contains_point(&[1.9, 0.0]).unwrap());
        assert!(!e.contains_point(&[1.9, 0.9]).unwrap());
    }
}

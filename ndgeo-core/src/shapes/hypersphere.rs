//! N-dimensional hypersphere (n-ball)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{check_point, unit_ball_volume, validate_dimensions, validate_positive, NdShape};
use crate::error::Result;

/// An n-ball of the given radius centred at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperSphere {
    dimensions: usize,
    radius: f64,
}

impl HyperSphere {
    pub fn new(dimensions: usize, radius: f64) -> Result<Self> {
        validate_dimensions(dimensions)?;
        validate_positive("Radius", radius)?;
        Ok(Self { dimensions, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

impl NdShape for HyperSphere {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn volume(&self) -> f64 {
        unit_ball_volume(self.dimensions) * self.radius.powi(self.dimensions as i32)
    }

    fn surface_area(&self) -> f64 {
        if self.dimensions == 1 {
            // two end points
            return 2.0;
        }
        let n = self.dimensions;
        n as f64 * unit_ball_volume(n) * self.radius.powi(n as i32 - 1)
    }

    fn shape_type(&self) -> String {
        match self.dimensions {
            2 => "Circle".to_string(),
            3 => "Sphere".to_string(),
            n => format!("{}D HyperSphere", n),
        }
    }

    fn volume_formula(&self) -> String {
        let n = self.dimensions;
        match n {
            1 => "V₁ = 2r".to_string(),
            2 => "V₂ = πr²".to_string(),
            3 => "V₃ = (4/3)πr³".to_string(),
            4 => "V₄ = (π²/2)r⁴".to_string(),
            _ if n % 2 == 0 => {
                let half = n / 2;
                format!("V_{} = (π^{}/{}!) × r^{}", n, half, half, n)
            }
            _ => format!(
                "V_{} = (2^{} × π^{})/{}!! × r^{}",
                n,
                (n + 1) / 2,
                (n - 1) / 2,
                n,
                n
            ),
        }
    }

    fn surface_area_formula(&self) -> String {
        match self.dimensions {
            1 => "S₁ = 2".to_string(),
            2 => "S₂ = 2πr".to_string(),
            3 => "S₃ = 4πr²".to_string(),
            4 => "S₄ = 2π²r³".to_string(),
            n => format!("S_{} = {} × V_{} / r", n, n, n),
        }
    }

    fn contains_point(&self, point: &[f64]) -> Result<bool> {
        check_point(self.dimensions, point)?;
        let distance = point.iter().map(|c| c * c).sum::<f64>().sqrt();
        Ok(distance <= self.radius)
    }
}

impl fmt::Display for HyperSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (dim={}): Volume={:.6}, Surface Area={:.6}",
            self.shape_type(),
            self.dimensions,
            self.volume(),
            self.surface_area()
        )
    }
}

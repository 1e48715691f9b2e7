//! Diameter-parameterised 3D sphere calculator.
//!
//! Unlike [`HyperSphere`](super::HyperSphere), a zero diameter is accepted;
//! only negative (or non-finite) diameters are rejected.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassicSphere {
    diameter: f64,
}

impl ClassicSphere {
    pub fn new(diameter: f64) -> Result<Self> {
        let mut sphere = Self { diameter: 0.0 };
        sphere.set_diameter(diameter)?;
        Ok(sphere)
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<()> {
        if !diameter.is_finite() || diameter < 0.0 {
            return Err(GeometryError::invalid_parameter("Diameter", diameter));
        }
        self.diameter = diameter;
        Ok(())
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        0.5 * self.diameter
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius().powi(3)
    }

    pub fn area(&self) -> f64 {
        4.0 * PI * self.radius().powi(2)
    }
}

impl fmt::Display for ClassicSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a volume of {:.3}, and an area of {:.3}.",
            self.volume(),
            self.area()
        )
    }
}

/// Unit-diameter sphere first, then the requested one
pub fn classic_sphere_report(diameter: f64) -> Result<String> {
    let unit = ClassicSphere::new(1.0)?;
    let sphere = ClassicSphere::new(diameter)?;
    Ok(format!(
        "A sphere with a diameter of 1 has {}\n\n\
         The surface area of a sphere with diameter of {:.3} is {:.3}.\n\n\
         The volume of a sphere with diameter of {:.3} is {:.3}.\n",
        unit,
        sphere.diameter(),
        sphere.area(),
        sphere.diameter(),
        sphere.volume()
    ))
}

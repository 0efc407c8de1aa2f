//! Right circular cylinder.

use crate::{FigureError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// A right circular cylinder defined by base radius and height.
///
/// A solid, so it exposes volume and surface area rather than the 2D
/// `Figure` measures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder.
    ///
    /// Fails with `InvalidGeometry` when radius or height is negative.
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        if radius < 0.0 || height < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "radius and height cannot be negative".into(),
            ));
        }
        Ok(Self { radius, height })
    }

    /// Returns the base radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the volume, pi * r² * h.
    #[inline]
    pub fn volume(&self) -> f64 {
        PI * self.radius * self.radius * self.height
    }

    /// Returns the total surface area, 2 * pi * r * (r + h).
    #[inline]
    pub fn surface_area(&self) -> f64 {
        2.0 * PI * self.radius * (self.radius + self.height)
    }
}

//! Circle.

use crate::figure::Figure;
use crate::{FigureError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// A circle defined by its radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle with the given radius.
    ///
    /// Fails with `InvalidGeometry` when the radius is negative.
    pub fn new(radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "radius cannot be negative".into(),
            ));
        }
        Ok(Self { radius })
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the area, pi * r².
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Returns the circumference, 2 * pi * r.
    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Returns the diameter, 2 * r.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

impl Figure for Circle {
    fn area(&self) -> Result<f64> {
        Ok(Circle::area(self))
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(self.circumference())
    }
}

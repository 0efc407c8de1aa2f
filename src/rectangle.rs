//! Rectangle and its square specialization.

use crate::figure::Figure;
use crate::{FigureError, Result};
use nalgebra::Vector2;
use serde::Serialize;

/// A rectangle defined by width and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle with the given width and height.
    ///
    /// Fails with `InvalidGeometry` when either dimension is negative.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width < 0.0 || height < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "width and height cannot be negative".into(),
            ));
        }
        Ok(Self { width, height })
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the area, w * h.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the perimeter, 2 * (w + h).
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Returns the diagonal, sqrt(w² + h²).
    #[inline]
    pub fn diagonal(&self) -> f64 {
        Vector2::new(self.width, self.height).norm()
    }
}

impl Figure for Rectangle {
    fn area(&self) -> Result<f64> {
        Ok(Rectangle::area(self))
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(Rectangle::perimeter(self))
    }
}

/// A square: a rectangle constrained to width == height.
///
/// Modeled as a composed `Rectangle` rather than a subtype so no code
/// path can adjust width and height independently and break the square
/// invariant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Creates a square with the given side length.
    ///
    /// Fails with `InvalidGeometry` when the side is negative.
    pub fn new(side: f64) -> Result<Self> {
        if side < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "side cannot be negative".into(),
            ));
        }
        Ok(Self {
            rect: Rectangle { width: side, height: side },
        })
    }

    /// Returns the side length.
    #[inline]
    pub const fn side(&self) -> f64 {
        self.rect.width
    }

    /// Returns the underlying rectangle.
    #[inline]
    pub const fn as_rectangle(&self) -> Rectangle {
        self.rect
    }

    /// Returns the area, side².
    #[inline]
    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Returns the perimeter, 4 * side.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.rect.perimeter()
    }

    /// Returns the diagonal, side * sqrt(2).
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.rect.diagonal()
    }
}

impl Figure for Square {
    fn area(&self) -> Result<f64> {
        Ok(Square::area(self))
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(Square::perimeter(self))
    }
}

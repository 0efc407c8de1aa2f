//! Rhombus.

use crate::figure::Figure;
use crate::{FigureError, Result};
use serde::Serialize;

/// A rhombus: all four sides equal. The side alone fixes the
/// perimeter; area additionally needs either both diagonals or the
/// height relative to a side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rhombus {
    side: f64,
    height: Option<f64>,
    diagonal1: Option<f64>,
    diagonal2: Option<f64>,
}

impl Rhombus {
    /// Creates a rhombus from the side plus any combination of height
    /// and diagonals.
    ///
    /// Fails with `InvalidGeometry` when any provided length is
    /// negative. A rhombus without height or diagonals is still valid;
    /// only its `area` query will fail.
    pub fn new(
        side: f64,
        height: Option<f64>,
        diagonal1: Option<f64>,
        diagonal2: Option<f64>,
    ) -> Result<Self> {
        if side < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "side cannot be negative".into(),
            ));
        }
        for (name, value) in [
            ("height", height),
            ("diagonal1", diagonal1),
            ("diagonal2", diagonal2),
        ] {
            if let Some(v) = value {
                if v < 0.0 {
                    return Err(FigureError::InvalidGeometry(format!(
                        "{name} cannot be negative"
                    )));
                }
            }
        }
        Ok(Self { side, height, diagonal1, diagonal2 })
    }

    /// Creates a rhombus from its side alone.
    #[inline]
    pub fn from_side(side: f64) -> Result<Self> {
        Self::new(side, None, None, None)
    }

    /// Creates a rhombus from its side and both diagonals.
    #[inline]
    pub fn from_diagonals(side: f64, diagonal1: f64, diagonal2: f64) -> Result<Self> {
        Self::new(side, None, Some(diagonal1), Some(diagonal2))
    }

    /// Creates a rhombus from its side and height.
    #[inline]
    pub fn from_height(side: f64, height: f64) -> Result<Self> {
        Self::new(side, Some(height), None, None)
    }

    /// Returns the side length.
    #[inline]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Returns the height, if supplied.
    #[inline]
    pub const fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the first diagonal, if supplied.
    #[inline]
    pub const fn diagonal1(&self) -> Option<f64> {
        self.diagonal1
    }

    /// Returns the second diagonal, if supplied.
    #[inline]
    pub const fn diagonal2(&self) -> Option<f64> {
        self.diagonal2
    }

    /// Computes the area.
    ///
    /// Prefers the diagonal product 0.5 * d1 * d2 when both diagonals
    /// are present, falls back to side * height, and fails with
    /// `InsufficientData` when neither combination is available.
    pub fn area(&self) -> Result<f64> {
        if let (Some(d1), Some(d2)) = (self.diagonal1, self.diagonal2) {
            return Ok(0.5 * d1 * d2);
        }
        if let Some(h) = self.height {
            return Ok(self.side * h);
        }
        Err(FigureError::InsufficientData(
            "area needs both diagonals or a height".into(),
        ))
    }

    /// Returns the perimeter, 4 * side. Always computable.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
}

impl Figure for Rhombus {
    fn area(&self) -> Result<f64> {
        Rhombus::area(self)
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(Rhombus::perimeter(self))
    }
}

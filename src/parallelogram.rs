//! Parallelogram.

use crate::figure::Figure;
use crate::{FigureError, Result};
use serde::Serialize;

/// A parallelogram defined by base, side, and the perpendicular height
/// between the parallel sides, with an optional angle between base and
/// side in degrees.
///
/// The angle is validated at construction but takes no part in the
/// area or perimeter formulas; it is carried for callers that want it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Parallelogram {
    base: f64,
    side: f64,
    height: f64,
    angle: Option<f64>,
}

impl Parallelogram {
    /// Creates a parallelogram.
    ///
    /// Fails with `InvalidGeometry` when base, side, or height is
    /// negative, or when a supplied angle lies outside the open
    /// interval (0, 180) degrees.
    pub fn new(base: f64, side: f64, height: f64, angle: Option<f64>) -> Result<Self> {
        if base < 0.0 || side < 0.0 || height < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "base, side, and height cannot be negative".into(),
            ));
        }
        if let Some(a) = angle {
            if a <= 0.0 || a >= 180.0 {
                return Err(FigureError::InvalidGeometry(
                    "angle must be strictly between 0 and 180 degrees".into(),
                ));
            }
        }
        Ok(Self { base, side, height, angle })
    }

    /// Returns the base.
    #[inline]
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Returns the side.
    #[inline]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the angle in degrees, if supplied.
    #[inline]
    pub const fn angle(&self) -> Option<f64> {
        self.angle
    }

    /// Returns the area, base * height.
    #[inline]
    pub fn area(&self) -> f64 {
        self.base * self.height
    }

    /// Returns the perimeter, 2 * (base + side).
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.base + self.side)
    }
}

impl Figure for Parallelogram {
    fn area(&self) -> Result<f64> {
        Ok(Parallelogram::area(self))
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(Parallelogram::perimeter(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallelogram_new() {
        let p = Parallelogram::new(6.0, 4.0, 3.0, None).unwrap();
        assert_eq!(p.base(), 6.0);
        assert_eq!(p.side(), 4.0);
        assert_eq!(p.height(), 3.0);
        assert_eq!(p.angle(), None);
    }

    #[test]
    fn test_parallelogram_area_perimeter() {
        let p = Parallelogram::new(6.0, 4.0, 3.0, None).unwrap();
        assert_eq!(p.area(), 18.0);
        assert_eq!(p.perimeter(), 20.0);
    }

    #[test]
    fn test_parallelogram_negative_rejected() {
        assert!(matches!(
            Parallelogram::new(-6.0, 4.0, 3.0, None),
            Err(FigureError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Parallelogram::new(6.0, -4.0, 3.0, None),
            Err(FigureError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Parallelogram::new(6.0, 4.0, -3.0, None),
            Err(FigureError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_parallelogram_angle_validated() {
        assert!(Parallelogram::new(6.0, 4.0, 3.0, Some(60.0)).is_ok());
        assert!(matches!(
            Parallelogram::new(6.0, 4.0, 3.0, Some(0.0)),
            Err(FigureError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Parallelogram::new(6.0, 4.0, 3.0, Some(180.0)),
            Err(FigureError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Parallelogram::new(6.0, 4.0, 3.0, Some(-30.0)),
            Err(FigureError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_parallelogram_angle_does_not_change_measures() {
        let without = Parallelogram::new(6.0, 4.0, 3.0, None).unwrap();
        let with = Parallelogram::new(6.0, 4.0, 3.0, Some(75.0)).unwrap();
        assert_eq!(without.area(), with.area());
        assert_eq!(without.perimeter(), with.perimeter());
        assert_eq!(with.angle(), Some(75.0));
    }
}

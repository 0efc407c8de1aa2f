//! Line segment through two distinct points.

use crate::point::Point;
use crate::{FigureError, Result};
use serde::Serialize;
use std::fmt;

/// A line defined by two distinct points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    point1: Point,
    point2: Point,
}

impl Line {
    /// Creates a line through two points.
    ///
    /// Fails with `InvalidGeometry` when both points are
    /// coordinate-identical: two coincident points determine no
    /// direction.
    pub fn new(point1: Point, point2: Point) -> Result<Self> {
        if point1.x() == point2.x() && point1.y() == point2.y() {
            return Err(FigureError::InvalidGeometry(
                "cannot create a line from two identical points".into(),
            ));
        }
        Ok(Self { point1, point2 })
    }

    /// Returns the first defining point.
    #[inline]
    pub const fn point1(&self) -> Point {
        self.point1
    }

    /// Returns the second defining point.
    #[inline]
    pub const fn point2(&self) -> Point {
        self.point2
    }

    /// Returns the length of the segment between the two points.
    #[inline]
    pub fn length(&self) -> f64 {
        self.point1.distance_to_point(&self.point2)
    }

    /// Computes the slope (y2 - y1) / (x2 - x1).
    ///
    /// Fails with `UndefinedSlope` for a vertical line; callers must
    /// treat that as a distinct case from a numeric zero slope.
    pub fn slope(&self) -> Result<f64> {
        if self.point2.x() == self.point1.x() {
            return Err(FigureError::UndefinedSlope);
        }
        Ok((self.point2.y() - self.point1.y()) / (self.point2.x() - self.point1.x()))
    }

    /// Computes the perpendicular distance from a point to this line.
    ///
    /// Converts the two-point form to the general form
    /// a*x + b*y + c = 0 and evaluates |a*px + b*py + c| / sqrt(a² + b²).
    /// Construction forbids identical points, so a² + b² is strictly
    /// positive and the division is always defined.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let (x1, y1) = self.point1.coords();
        let (x2, y2) = self.point2.coords();

        let a = y2 - y1;
        let b = x1 - x2;
        let c = x2 * y1 - x1 * y2;

        let numerator = (a * point.x() + b * point.y() + c).abs();
        let denominator = (a * a + b * b).sqrt();

        numerator / denominator
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.point1, self.point2)
    }
}

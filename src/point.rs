//! 2D point.

use crate::line::Line;
use nalgebra::Point2;
use serde::Serialize;
use std::fmt;

/// A point in 2D cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point with given coordinates. Any finite reals are
    /// valid; there is nothing to reject.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the point as an nalgebra `Point2`.
    #[inline]
    pub fn as_point2(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance_to_point(&self, other: &Point) -> f64 {
        nalgebra::distance(&self.as_point2(), &other.as_point2())
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn square_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns the perpendicular distance to a line.
    #[inline]
    pub fn distance_to_line(&self, line: &Line) -> f64 {
        line.distance_to_point(self)
    }

    /// Checks if this point coincides with another within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_to_point(other) <= tolerance
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

//! The `Figure` abstraction shared by 2D shapes.

use crate::Result;

/// A 2D shape with a measurable area and perimeter.
///
/// Implemented by every flat figure (circle, rectangle, square,
/// triangle, parallelogram, rhombus). Point, Line, and Cylinder do not
/// implement it: area and perimeter are not the natural measures for a
/// 0/1-dimensional object or a solid.
///
/// Both methods return `Result` because some figures accept optional
/// measurements at construction and can only answer when enough of them
/// were supplied (e.g. a rhombus built without diagonals or height has
/// no computable area).
pub trait Figure {
    /// Computes the area of the figure.
    fn area(&self) -> Result<f64>;

    /// Computes the perimeter of the figure.
    fn perimeter(&self) -> Result<f64>;
}

//! planar: closed-form geometry for basic 2D/3D figures
//!
//! Each figure is an immutable value type with a validating constructor
//! and pure computed properties. Construction is the only validation
//! gate: once a figure exists, its measurements are fixed.

pub mod figure;

pub mod point;
pub mod line;

pub mod circle;
pub mod rectangle;
pub mod triangle;
pub mod parallelogram;
pub mod rhombus;

pub mod cylinder;

// Re-exports for convenience
pub use figure::Figure;
pub use point::Point;
pub use line::Line;
pub use circle::Circle;
pub use rectangle::{Rectangle, Square};
pub use triangle::Triangle;
pub use parallelogram::Parallelogram;
pub use rhombus::Rhombus;
pub use cylinder::Cylinder;

/// Tolerance for floating-point comparisons of computed measures
pub const TOLERANCE: f64 = 1e-9;

/// Result type for figure operations
pub type Result<T> = std::result::Result<T, FigureError>;

#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    /// A constructor was given measurements that cannot form the figure:
    /// a negative length, a violated triangle inequality, two identical
    /// line endpoints, or an out-of-range angle.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The queried measure needs data that was not supplied at
    /// construction. The figure itself is still valid and other
    /// queries on it may succeed.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Slope was queried on a vertical line. Distinct from a numeric
    /// zero slope; callers must branch on it.
    #[error("Undefined slope: line is vertical")]
    UndefinedSlope,
}

//! Triangle with flexible measurement combinations.

use crate::figure::Figure;
use crate::{FigureError, Result};
use serde::Serialize;

/// A triangle described by its base plus a combination of optional
/// measurements.
///
/// Two shapes of input are accepted:
/// - all three sides (`base`, `side2`, `side3`), checked against the
///   strict triangle inequality;
/// - a height relative to the base, together with at least one of the
///   other two sides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Triangle {
    base: f64,
    height: Option<f64>,
    side2: Option<f64>,
    side3: Option<f64>,
}

impl Triangle {
    /// Creates a triangle from the base and any combination of height
    /// and the two remaining sides.
    ///
    /// Fails with `InvalidGeometry` when any provided length is
    /// negative, when three sides violate the strict triangle
    /// inequality, or when the combination matches neither accepted
    /// shape of input.
    pub fn new(
        base: f64,
        height: Option<f64>,
        side2: Option<f64>,
        side3: Option<f64>,
    ) -> Result<Self> {
        if base < 0.0 {
            return Err(FigureError::InvalidGeometry(
                "base cannot be negative".into(),
            ));
        }
        for (name, value) in [("height", height), ("side2", side2), ("side3", side3)] {
            if let Some(v) = value {
                if v < 0.0 {
                    return Err(FigureError::InvalidGeometry(format!(
                        "{name} cannot be negative"
                    )));
                }
            }
        }

        match (height, side2, side3) {
            (_, Some(b), Some(c)) => {
                // Strict inequality: degenerate (collinear) triangles
                // are rejected too.
                if base + b <= c || base + c <= b || b + c <= base {
                    return Err(FigureError::InvalidGeometry(
                        "triangle inequality violated: the sum of any two sides \
                         must exceed the third"
                            .into(),
                    ));
                }
            }
            (Some(_), Some(_), None) | (Some(_), None, Some(_)) => {}
            _ => {
                return Err(FigureError::InvalidGeometry(
                    "provide all three sides, or a height with at least one \
                     other side"
                        .into(),
                ));
            }
        }

        Ok(Self { base, height, side2, side3 })
    }

    /// Creates a triangle from its three side lengths.
    #[inline]
    pub fn from_sides(base: f64, side2: f64, side3: f64) -> Result<Self> {
        Self::new(base, None, Some(side2), Some(side3))
    }

    /// Creates a triangle from its base, the height relative to that
    /// base, and one other side.
    #[inline]
    pub fn from_base_height(base: f64, height: f64, side2: f64) -> Result<Self> {
        Self::new(base, Some(height), Some(side2), None)
    }

    /// Returns the base.
    #[inline]
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Returns the height relative to the base, if supplied.
    #[inline]
    pub const fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the second side, if supplied.
    #[inline]
    pub const fn side2(&self) -> Option<f64> {
        self.side2
    }

    /// Returns the third side, if supplied.
    #[inline]
    pub const fn side3(&self) -> Option<f64> {
        self.side3
    }

    /// Computes the area.
    ///
    /// Uses 0.5 * base * height when the height is known, otherwise
    /// Heron's formula on the three sides. The preconditions are
    /// re-checked here rather than assumed from construction; if
    /// neither input shape is available the call fails with
    /// `InsufficientData`.
    pub fn area(&self) -> Result<f64> {
        if let Some(h) = self.height {
            return Ok(0.5 * self.base * h);
        }
        if let (Some(b), Some(c)) = (self.side2, self.side3) {
            let s = (self.base + b + c) / 2.0;
            return Ok((s * (s - self.base) * (s - b) * (s - c)).sqrt());
        }
        Err(FigureError::InsufficientData(
            "area needs a height or all three sides".into(),
        ))
    }

    /// Computes the perimeter.
    ///
    /// With all three sides known this is their sum. With a height and
    /// exactly one side, the missing side is inferred under a
    /// right-triangle assumption: sqrt(side² - height²) when the known
    /// side exceeds the height, else sqrt(height² + base²). That
    /// inference is only exact when the height meets the base
    /// perpendicular at its endpoint; for a general triangle the result
    /// is an approximation. Fails with `InsufficientData` when no
    /// recognized combination is present.
    pub fn perimeter(&self) -> Result<f64> {
        match (self.height, self.side2, self.side3) {
            (_, Some(b), Some(c)) => Ok(self.base + b + c),
            (Some(h), Some(b), None) => {
                let third = Self::inferred_side(self.base, h, b);
                Ok(self.base + b + third)
            }
            (Some(h), None, Some(c)) => {
                let second = Self::inferred_side(self.base, h, c);
                Ok(self.base + second + c)
            }
            _ => Err(FigureError::InsufficientData(
                "perimeter needs all three sides, or a height with one side".into(),
            )),
        }
    }

    // Right-triangle reconstruction of the one missing side.
    fn inferred_side(base: f64, height: f64, known_side: f64) -> f64 {
        if known_side > height {
            (known_side * known_side - height * height).sqrt()
        } else {
            (height * height + base * base).sqrt()
        }
    }
}

impl Figure for Triangle {
    fn area(&self) -> Result<f64> {
        Triangle::area(self)
    }

    fn perimeter(&self) -> Result<f64> {
        Triangle::perimeter(self)
    }
}

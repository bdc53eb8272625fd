use serde::{Deserialize, Serialize};

use crate::TOL_ZERO;

/// Width and height of a rectangle, without a position.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RectSize {
    pub width: f64,
    pub height: f64,
}

impl RectSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Squared length of the diagonal, `width² + height²`
    pub fn sq_magnitude(&self) -> f64 {
        self.width.powi(2) + self.height.powi(2)
    }

    /// Grows both dimensions by `2 * buffer`, keeping a margin of `buffer` on every side.
    pub fn inflate(self, buffer: f64) -> Self {
        Self::new(self.width + 2.0 * buffer, self.height + 2.0 * buffer)
    }

    /// Inverse of [`RectSize::inflate`].
    pub fn deflate(self, buffer: f64) -> Self {
        Self::new(self.width - 2.0 * buffer, self.height - 2.0 * buffer)
    }

    /// Leftover margin along both axes when `other` is placed inside `self`.
    /// Negative values indicate `other` sticks out.
    pub fn margins(&self, other: &RectSize) -> (f64, f64) {
        (self.width - other.width, self.height - other.height)
    }

    /// Whether `other` fits inside `self`, with a tolerance for floating point precision
    /// scaled to the largest dimension of `self`.
    pub fn fits(&self, other: &RectSize) -> bool {
        let tol = TOL_ZERO * self.width.max(self.height).max(1.0);
        let (dx, dy) = self.margins(other);
        dx >= -tol && dy >= -tol
    }

    /// Both dimensions strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl From<(f64, f64)> for RectSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<RectSize> for (f64, f64) {
    fn from(s: RectSize) -> Self {
        (s.width, s.height)
    }
}

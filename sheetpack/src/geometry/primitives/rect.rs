use anyhow::Result;
use anyhow::ensure;

use crate::TOL_ZERO;
use crate::geometry::geo_enums::Cut;
use crate::geometry::primitives::{Point, RectSize};

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its bottom left corner at `origin`, spanning `size`.
    pub fn from_origin_size(origin: Point, size: RectSize) -> Self {
        let Point(x, y) = origin;
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + size.width,
            y_max: y + size.height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn size(&self) -> RectSize {
        RectSize::new(self.width(), self.height())
    }

    pub fn origin(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the four corners of `self`, counterclockwise starting from the bottom left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    /// Largest absolute coordinate of `self`
    pub fn magnitude(&self) -> f64 {
        [self.x_min, self.y_min, self.x_max, self.y_max]
            .into_iter()
            .fold(0.0, |acc, c| acc.max(c.abs()))
    }

    /// [`TOL_ZERO`] scaled to the coordinates of `self`, so rounding of large coordinates stays within it.
    pub fn tolerance(&self) -> f64 {
        TOL_ZERO * self.magnitude().max(1.0)
    }

    /// Splits `self` with a guillotine cut at distance `length` from its origin corner.
    /// The first rectangle is the part adjacent to the origin, the second one the remainder.
    pub fn split(&self, cut: Cut, length: f64) -> [Rect; 2] {
        match cut {
            Cut::Vertical => {
                let x_cut = self.x_min + length;
                [
                    Rect {
                        x_max: x_cut,
                        ..*self
                    },
                    Rect {
                        x_min: x_cut,
                        ..*self
                    },
                ]
            }
            Cut::Horizontal => {
                let y_cut = self.y_min + length;
                [
                    Rect {
                        y_max: y_cut,
                        ..*self
                    },
                    Rect {
                        y_min: y_cut,
                        ..*self
                    },
                ]
            }
        }
    }

    /// Whether the interiors of `self` and `other` overlap. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let tol = f64::max(self.tolerance(), other.tolerance());
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max) - tol
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max) - tol
    }

    /// Whether `other` lies entirely within `self`, with a tolerance for floating point precision.
    pub fn contains(&self, other: &Rect) -> bool {
        let tol = f64::max(self.tolerance(), other.tolerance());
        other.x_min >= self.x_min - tol
            && other.y_min >= self.y_min - tol
            && other.x_max <= self.x_max + tol
            && other.y_max <= self.y_max + tol
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }
}

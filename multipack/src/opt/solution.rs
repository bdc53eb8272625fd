use sheetpack::geometry::Transformation;
use sheetpack::geometry::primitives::{Point, RectSize};

/// Best packing found by the [`MultiPacker`](crate::opt::MultiPacker).
#[derive(Clone, Debug, PartialEq)]
pub struct PackSolution {
    /// Final transformation of every item, mapping the original shape onto the sheet. `None` if not placed.
    pub placements: Vec<Option<Transformation>>,
    /// Transformations aligning each original shape to its bounding box
    pub obb_transforms: Vec<Transformation>,
    /// Bounding box size of each item, without the buffer
    pub sizes: Vec<RectSize>,
    /// Bottom left corner of each buffered rectangle on the sheet
    pub offsets: Vec<Option<Point>>,
    /// Sheet used for packing
    pub sheet_size: RectSize,
    /// Smallest box anchored at the origin containing all buffered rectangles
    pub consumed: RectSize,
    /// Buffered rectangle area divided by the consumed area
    pub rect_density: f64,
    /// Original shape area divided by the consumed area. Informational only.
    pub poly_density: f64,
    pub buffer_distance: f64,
    /// Number of trials performed before returning
    pub n_trials: usize,
    /// Every replacement of the best trial, in the order they happened
    pub improvements: Vec<TrialImprovement>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialImprovement {
    pub trial: usize,
    pub density: f64,
}

impl PackSolution {
    /// One flag per item, in input order
    pub fn inserted(&self) -> Vec<bool> {
        self.placements.iter().map(Option::is_some).collect()
    }

    pub fn n_inserted(&self) -> usize {
        self.placements.iter().flatten().count()
    }
}

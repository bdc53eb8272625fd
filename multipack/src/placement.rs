//! Applying packing results to the original geometry.

use itertools::Itertools;

use sheetpack::PackError;
use sheetpack::geometry::Transformation;
use sheetpack::geometry::geo_traits::Transformable;
use sheetpack::geometry::primitives::{Point, SPolygon};

use crate::opt::PackSolution;

pub fn apply_transform(points: &[Point], transform: &Transformation) -> Vec<Point> {
    points.iter().map(|p| p.transform_clone(transform)).collect()
}

/// Moves every shape to its packed position. Unplaced shapes are returned as `None`.
pub fn transform_polygons(
    shapes: &[SPolygon],
    solution: &PackSolution,
) -> Result<Vec<Option<SPolygon>>, PackError> {
    if shapes.len() != solution.placements.len() {
        return Err(PackError::InvalidInput(format!(
            "{} shapes given for a solution of {} items",
            shapes.len(),
            solution.placements.len()
        )));
    }
    let placed = shapes
        .iter()
        .zip(&solution.placements)
        .map(|(shape, placement)| placement.as_ref().map(|t| shape.transform_clone(t)))
        .collect_vec();
    Ok(placed)
}

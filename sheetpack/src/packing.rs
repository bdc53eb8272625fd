//! A single packing trial: one partition tree, one insertion order.

use std::cmp::Reverse;

use itertools::Itertools;
use log::trace;
use ordered_float::OrderedFloat;

use crate::PackError;
use crate::geometry::primitives::{Point, RectSize};
use crate::partition::PartitionTree;
use crate::util::assertions;

/// Outcome of packing an ordered list of rectangles onto a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialResult {
    /// Placed rectangle area divided by the area of [`TrialResult::consumed`]
    pub density: f64,
    /// Bottom left corner of every rectangle, indexed as the input. `None` if it could not be placed.
    pub offsets: Vec<Option<Point>>,
    /// Smallest box anchored at the origin which contains all placed rectangles
    pub consumed: RectSize,
    pub n_inserted: usize,
}

impl TrialResult {
    /// One flag per input rectangle, in input order
    pub fn inserted(&self) -> Vec<bool> {
        self.offsets.iter().map(Option::is_some).collect()
    }
}

/// Packs `rects` onto a sheet of size `sheet`, inserting them in the sequence given by `order`.
///
/// Rectangles which do not fit anymore are skipped. Fails with [`PackError::EmptyResult`]
/// if not a single rectangle could be placed.
pub fn pack_rectangles(
    rects: &[RectSize],
    sheet: RectSize,
    order: &[usize],
) -> Result<TrialResult, PackError> {
    validate_sheet(sheet)?;
    validate_rectangles(rects)?;
    if let Some(i) = order.iter().find(|&&i| i >= rects.len()) {
        return Err(PackError::InvalidInput(format!(
            "insertion order refers to rectangle {i}, but only {} were given",
            rects.len()
        )));
    }
    if !order.iter().all_unique() {
        return Err(PackError::InvalidInput(format!(
            "insertion order contains duplicate indices: {order:?}"
        )));
    }

    let mut tree = PartitionTree::new(sheet);
    let mut offsets = vec![None; rects.len()];
    let mut placed_area = 0.0;

    for &i in order {
        match tree.insert(rects[i]) {
            Some(offset) => {
                placed_area += rects[i].area();
                offsets[i] = Some(offset);
            }
            None => trace!("rectangle {i} ({:?}) could not be placed", rects[i]),
        }
    }

    debug_assert!(assertions::tree_is_consistent(&tree));
    debug_assert!(assertions::leaves_match_placements(&tree, rects, &offsets));
    debug_assert!(assertions::placements_are_disjoint(rects, &offsets));
    debug_assert!(assertions::placements_within_sheet(rects, &offsets, sheet));

    let consumed = offsets
        .iter()
        .zip(rects)
        .filter_map(|(offset, r)| offset.map(|Point(x, y)| RectSize::new(x + r.width, y + r.height)))
        .reduce(|a, b| RectSize::new(a.width.max(b.width), a.height.max(b.height)))
        .ok_or(PackError::EmptyResult {
            n_items: rects.len(),
        })?;

    Ok(TrialResult {
        density: placed_area / consumed.area(),
        n_inserted: offsets.iter().flatten().count(),
        offsets,
        consumed,
    })
}

/// Indices of `rects` sorted by descending `width² + height²`, largest first.
/// Rectangles of equal magnitude keep their relative input order.
pub fn size_descending_order(rects: &[RectSize]) -> Vec<usize> {
    (0..rects.len())
        .sorted_by_cached_key(|&i| Reverse(OrderedFloat(rects[i].sq_magnitude())))
        .collect_vec()
}

pub fn validate_rectangles(rects: &[RectSize]) -> Result<(), PackError> {
    match rects.iter().find_position(|r| !r.is_valid()) {
        Some((i, r)) => Err(PackError::InvalidInput(format!(
            "rectangle {i} must have a strictly positive, finite width and height, got {r:?}"
        ))),
        None => Ok(()),
    }
}

pub fn validate_sheet(sheet: RectSize) -> Result<(), PackError> {
    match sheet.is_valid() {
        true => Ok(()),
        false => Err(PackError::InvalidInput(format!(
            "sheet must have a strictly positive, finite width and height, got {sheet:?}"
        ))),
    }
}

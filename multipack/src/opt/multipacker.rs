use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use rand::prelude::SmallRng;
use thousands::Separable;

use sheetpack::PackError;
use sheetpack::geometry::primitives::{Point, RectSize, SPolygon};
use sheetpack::packing::{
    TrialResult, pack_rectangles, size_descending_order, validate_rectangles, validate_sheet,
};

use crate::config::MultipackConfig;
use crate::opt::order::partially_shuffled;
use crate::opt::{PackItem, PackSolution, TrialImprovement};

/// Repeatedly packs the bounding boxes of a set of items onto a sheet, each time in a
/// different insertion order, and keeps the densest packing.
pub struct MultiPacker {
    pub config: MultipackConfig,
    pub rng: SmallRng,
}

impl MultiPacker {
    pub fn new(config: MultipackConfig, rng: SmallRng) -> Self {
        Self { config, rng }
    }

    /// Reduces every polygon to its minimum-area bounding box before packing.
    pub fn optimize_polygons(&mut self, shapes: &[SPolygon]) -> Result<PackSolution, PackError> {
        let items = shapes
            .iter()
            .map(PackItem::from_polygon)
            .collect::<Result<Vec<_>, _>>()?;
        self.optimize(&items)
    }

    pub fn optimize(&mut self, items: &[PackItem]) -> Result<PackSolution, PackError> {
        self.config.validate()?;
        validate_items(items)?;

        let start = Instant::now();
        let buffer = self.config.buffer_distance;
        let sizes = items.iter().map(|item| item.size()).collect_vec();
        let inflated = sizes.iter().map(|s| s.inflate(buffer)).collect_vec();

        let sheet = match self.config.sheet_size {
            Some(sheet) => {
                validate_sheet(sheet)?;
                sheet
            }
            None => default_sheet_size(&inflated),
        };
        info!(
            "[MP] packing {} items onto a {:.3}x{:.3} sheet",
            items.len(),
            sheet.width,
            sheet.height
        );

        for (i, s) in inflated.iter().enumerate().filter(|(_, s)| !sheet.fits(s)) {
            warn!(
                "[MP] item {i} measures {:.3}x{:.3} including buffer, it will never fit the sheet",
                s.width, s.height
            );
        }

        let base_order = size_descending_order(&inflated);
        let mut best: Option<TrialResult> = None;
        let mut improvements = vec![];
        let mut n_trials = 0;

        for trial in 0..self.config.iterations {
            let order = match trial {
                0 => base_order.clone(),
                _ => partially_shuffled(&base_order, &mut self.rng),
            };
            n_trials += 1;

            match pack_rectangles(&inflated, sheet, &order) {
                Ok(result) => {
                    debug!(
                        "[MP] trial {trial}: {}/{} placed, density: {:.3}%",
                        result.n_inserted,
                        items.len(),
                        result.density * 100.0
                    );
                    if best.as_ref().is_none_or(|b| result.density > b.density) {
                        info!(
                            "[MP] trial {trial} improved density to {:.3}% ({}/{} placed)",
                            result.density * 100.0,
                            result.n_inserted,
                            items.len()
                        );
                        improvements.push(TrialImprovement {
                            trial,
                            density: result.density,
                        });
                        best = Some(result);
                    }
                }
                Err(PackError::EmptyResult { .. }) => {
                    debug!("[MP] trial {trial}: no items placed");
                }
                Err(e) => return Err(e),
            }

            if best
                .as_ref()
                .is_some_and(|b| b.density > self.config.density_escape)
            {
                info!(
                    "[MP] density escape of {:.3}% exceeded after {n_trials} trials",
                    self.config.density_escape * 100.0
                );
                break;
            }
        }

        let best = best.ok_or(PackError::EmptyResult {
            n_items: items.len(),
        })?;

        let placements = best
            .offsets
            .iter()
            .zip(items)
            .map(|(offset, item)| {
                offset.map(|Point(x, y)| item.obb.transform.clone().translate((x + buffer, y + buffer)))
            })
            .collect_vec();

        let placed_item_area: f64 = items
            .iter()
            .zip(&best.offsets)
            .filter(|(_, offset)| offset.is_some())
            .map(|(item, _)| item.area)
            .sum();

        let solution = PackSolution {
            placements,
            obb_transforms: items.iter().map(|item| item.obb.transform.clone()).collect(),
            sizes,
            offsets: best.offsets.clone(),
            sheet_size: sheet,
            consumed: best.consumed,
            rect_density: best.density,
            poly_density: placed_item_area / best.consumed.area(),
            buffer_distance: buffer,
            n_trials,
            improvements,
        };

        info!(
            "[MP] finished in {:.3}ms, {} trials, {} insertion attempts",
            start.elapsed().as_secs_f64() * 1000.0,
            n_trials,
            (n_trials * items.len()).separate_with_commas()
        );
        info!(
            "[MP] {}/{} items placed, consumed {:.3}x{:.3}, rect density: {:.3}%, polygon density: {:.3}%",
            solution.n_inserted(),
            items.len(),
            solution.consumed.width,
            solution.consumed.height,
            solution.rect_density * 100.0,
            solution.poly_density * 100.0
        );

        Ok(solution)
    }
}

/// Sheet used when none is configured: all rectangles side by side horizontally,
/// with twice the height of the tallest one.
pub fn default_sheet_size(rects: &[RectSize]) -> RectSize {
    let width = rects.iter().map(|r| r.width).sum();
    let height = rects
        .iter()
        .map(|r| OrderedFloat(r.height))
        .max()
        .map_or(0.0, |h| 2.0 * h.0);
    RectSize::new(width, height)
}

fn validate_items(items: &[PackItem]) -> Result<(), PackError> {
    if items.is_empty() {
        return Err(PackError::InvalidInput("no items to pack".into()));
    }
    let sizes = items.iter().map(|item| item.size()).collect_vec();
    validate_rectangles(&sizes)?;

    let invalid_area = items.iter().find_position(|item| {
        let max_area = item.size().area() * (1.0 + 1e-9);
        !item.area.is_finite() || item.area < 0.0 || item.area > max_area
    });
    match invalid_area {
        Some((i, item)) => Err(PackError::InvalidInput(format!(
            "item {i} has an area of {}, which does not fit within its bounding box of {:?}",
            item.area,
            item.size()
        ))),
        None => Ok(()),
    }
}

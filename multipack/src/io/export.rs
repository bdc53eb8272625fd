use itertools::Itertools;

use crate::io::ext_repr::{ExtPlacedItem, ExtSolution};
use crate::io::import::Instance;
use crate::opt::PackSolution;

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &PackSolution) -> ExtSolution {
    let (placed, unplaced): (Vec<_>, Vec<_>) = instance
        .copies
        .iter()
        .zip(&solution.placements)
        .partition(|(_, placement)| placement.is_some());

    ExtSolution {
        placed_items: placed
            .into_iter()
            .filter_map(|(&item, placement)| {
                placement.as_ref().map(|t| ExtPlacedItem {
                    item,
                    transformation: t.to_array(),
                })
            })
            .collect_vec(),
        unplaced_items: unplaced.into_iter().map(|(&item, _)| item).collect_vec(),
        sheet: solution.sheet_size,
        consumed: solution.consumed,
        rect_density: solution.rect_density,
        poly_density: solution.poly_density,
        n_trials: solution.n_trials,
    }
}

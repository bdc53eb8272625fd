//! Fitting packed shapes into a viewport.

use sheetpack::PackError;
use sheetpack::geometry::Transformation;
use sheetpack::geometry::primitives::RectSize;

use crate::opt::PackSolution;

/// Transformations to draw a packed solution within a fixed resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayLayout {
    /// Every placement, with the whole consumed region scaled and centered in the viewport
    pub packed: Vec<Option<Transformation>>,
    /// Every placed item on its own, aligned and scaled to fill the viewport
    pub focus: Vec<Option<Transformation>>,
}

/// Scales and centers a solution within a viewport of `target_resolution`.
///
/// `target_fill` is the fraction of the viewport along the limiting axis which should be covered.
pub fn rescale_for_display(
    solution: &PackSolution,
    target_resolution: (f64, f64),
    target_fill: f64,
) -> Result<DisplayLayout, PackError> {
    let viewport = RectSize::from(target_resolution);
    if !viewport.is_valid() {
        return Err(PackError::InvalidInput(format!(
            "display resolution must be strictly positive and finite, got {viewport:?}"
        )));
    }
    if !target_fill.is_finite() || target_fill <= 0.0 {
        return Err(PackError::InvalidInput(format!(
            "display fill must be strictly positive and finite, got {target_fill}"
        )));
    }

    let packed_fit = fit_in_viewport(solution.consumed, viewport, target_fill);
    let packed = solution
        .placements
        .iter()
        .map(|placement| placement.as_ref().map(|t| t.clone().transform(&packed_fit)))
        .collect();

    let focus = solution
        .placements
        .iter()
        .zip(solution.obb_transforms.iter().zip(&solution.sizes))
        .map(|(placement, (obb_transform, size))| {
            placement.as_ref().map(|_| {
                let item_fit = fit_in_viewport(*size, viewport, target_fill);
                obb_transform.clone().transform(&item_fit)
            })
        })
        .collect();

    Ok(DisplayLayout { packed, focus })
}

/// Uniform scale followed by a translation, centering a `[0, w] x [0, h]` region in the viewport.
fn fit_in_viewport(region: RectSize, viewport: RectSize, fill: f64) -> Transformation {
    let scale = f64::min(
        viewport.width / region.width,
        viewport.height / region.height,
    ) * fill;
    let offset = (
        (viewport.width - region.width * scale) / 2.0,
        (viewport.height - region.height * scale) / 2.0,
    );
    Transformation::empty().scale(scale).translate(offset)
}

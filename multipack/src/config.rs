use serde::{Deserialize, Serialize};

use sheetpack::PackError;
use sheetpack::geometry::primitives::RectSize;

use crate::io::svg_export::SvgDrawOptions;

/// Configuration for the multi-trial optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MultipackConfig {
    /// Size of the sheet to pack onto. If undefined, a sheet wide enough to hold all rectangles side by side is used
    pub sheet_size: Option<RectSize>,
    /// Maximum number of packing trials, the first one uses the size-sorted insertion order
    pub iterations: usize,
    /// Stop searching once a trial exceeds this density. Values of 1.0 or more disable the early exit
    pub density_escape: f64,
    /// Half of the minimum gap between any two packed shapes
    pub buffer_distance: f64,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for MultipackConfig {
    fn default() -> Self {
        Self {
            sheet_size: None,
            iterations: 50,
            density_escape: 0.985,
            buffer_distance: 0.09,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl MultipackConfig {
    pub fn validate(&self) -> Result<(), PackError> {
        if self.iterations == 0 {
            return Err(PackError::Configuration(
                "at least one iteration is required".into(),
            ));
        }
        if !self.buffer_distance.is_finite() || self.buffer_distance < 0.0 {
            return Err(PackError::Configuration(format!(
                "buffer distance must be a non-negative number, got {}",
                self.buffer_distance
            )));
        }
        if self.density_escape.is_nan() || self.density_escape <= 0.0 {
            return Err(PackError::Configuration(format!(
                "density escape must be strictly positive, got {}",
                self.density_escape
            )));
        }
        Ok(())
    }
}

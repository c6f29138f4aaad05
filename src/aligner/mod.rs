//! Overlap geometry and the alignment crop transform
//!
//! Everything in this module is a pure function of its inputs. Callers own
//! the per-run settings and pass them on every call.

pub mod errors;
mod settings;
mod overlap;
mod crop;
mod preview;
#[cfg(test)]
mod tests;

pub use errors::{AlignError, AlignResult};
pub use settings::{check_offset, AlignmentSettings, Role, DEFAULT_TRANSPARENCY, MAX_OFFSET};
pub use overlap::compute_overlap;
pub use crop::{align_and_crop_to_overlap, ScratchLayout, BACKGROUND};
pub use preview::render_preview;

use image::{DynamicImage, RgbImage};

use crate::geometry::{OutputSize, OverlapRegion, PlacedImage};

/// Overlap aligner bound to one output size
///
/// Holds only configuration, so one instance can serve every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapAligner {
    output_size: OutputSize,
}

impl OverlapAligner {
    pub fn new(output_size: OutputSize) -> Self {
        OverlapAligner { output_size }
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    /// See [`compute_overlap`]
    pub fn compute_overlap(&self, reference: &PlacedImage, series: &PlacedImage) -> Option<OverlapRegion> {
        compute_overlap(reference, series, self.output_size)
    }

    /// See [`align_and_crop_to_overlap`]
    pub fn align_and_crop(&self,
                          image: &DynamicImage,
                          offset_x: i64,
                          offset_y: i64,
                          region: &OverlapRegion) -> AlignResult<RgbImage> {
        align_and_crop_to_overlap(image, offset_x, offset_y, region, self.output_size)
    }
}

//! Per-run alignment parameters

use crate::aligner::errors::{AlignError, AlignResult};
use crate::geometry::PlacedImage;

/// Default preview transparency for the series image
pub const DEFAULT_TRANSPARENCY: f64 = 0.5;

/// Largest offset magnitude accepted from settings files and the command line
pub const MAX_OFFSET: i64 = i32::MAX as i64;

/// Reject offsets no image plane could ever be placed at
pub fn check_offset(offset: i64) -> AlignResult<i64> {
    if (-MAX_OFFSET..=MAX_OFFSET).contains(&offset) {
        Ok(offset)
    } else {
        Err(AlignError::OffsetOutOfRange(offset))
    }
}

/// Which of the two alignment roles an image plays in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The fixed reference photograph
    Reference,
    /// Every other photograph of the run
    Series,
}

/// Offsets chosen by the operator for one run
///
/// The aligner never stores these; callers pass them on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentSettings {
    pub reference_x: i64,
    pub reference_y: i64,
    pub series_x: i64,
    pub series_y: i64,
    /// Opacity of the series image in previews, in [0, 1]
    pub transparency: f64,
}

impl AlignmentSettings {
    pub fn new(reference_x: i64, reference_y: i64, series_x: i64, series_y: i64) -> Self {
        AlignmentSettings {
            reference_x,
            reference_y,
            series_x,
            series_y,
            transparency: DEFAULT_TRANSPARENCY,
        }
    }

    /// Builder-style transparency setter
    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    /// Offset applied to images of the given role
    pub fn offset_for(&self, role: Role) -> (i64, i64) {
        match role {
            Role::Reference => (self.reference_x, self.reference_y),
            Role::Series => (self.series_x, self.series_y),
        }
    }

    /// Place an image of the given size and role
    pub fn place(&self, role: Role, width: u32, height: u32) -> PlacedImage {
        let (x, y) = self.offset_for(role);
        PlacedImage::new(width, height, x, y)
    }
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        AlignmentSettings::new(0, 0, 0, 0)
    }
}

//! Overlap region structure
//!
//! An overlap region is the fixed-size crop window placed on the center of
//! the intersection of two placed images. It lives in virtual-plane
//! coordinates, so its corner may be negative and it may extend past
//! either image.

use std::fmt;

use super::point::Point;
use super::size::OutputSize;

/// Crop window in virtual-plane coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapRegion {
    /// X-coordinate of the top-left corner
    pub left: i64,

    /// Y-coordinate of the top-left corner
    pub top: i64,

    /// Width of the window in pixels
    pub width: u32,

    /// Height of the window in pixels
    pub height: u32,
}

impl OverlapRegion {
    /// Create a new region
    ///
    /// # Arguments
    /// * `left` - X-coordinate of the top-left corner
    /// * `top` - Y-coordinate of the top-left corner
    /// * `width` - Width of the window in pixels
    /// * `height` - Height of the window in pixels
    pub fn new(left: i64, top: i64, width: u32, height: u32) -> Self {
        OverlapRegion { left, top, width, height }
    }

    /// Place a window of `size` so that its center is `center`
    ///
    /// The corner is `center - size / 2` with the halves rounded down.
    /// Returns `None` when the corner falls below `i64::MIN`.
    pub fn centered_on(center: Point, size: OutputSize) -> Option<Self> {
        Some(OverlapRegion::new(
            center.x.checked_sub(size.half_width())?,
            center.y.checked_sub(size.half_height())?,
            size.width,
            size.height,
        ))
    }

    /// Whether the window covers at least one pixel
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for OverlapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left={}, top={}, width={}, height={}",
               self.left, self.top, self.width, self.height)
    }
}

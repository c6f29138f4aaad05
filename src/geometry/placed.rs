//! An image's footprint in the shared virtual plane

use super::bbox::BoundingBox;
use super::point::Point;

/// Image dimensions together with a placement offset
///
/// The image occupies `[offset_x, offset_x + width) × [offset_y, offset_y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedImage {
    /// Image width in pixels (at least 1)
    pub width: u32,
    /// Image height in pixels (at least 1)
    pub height: u32,
    /// Horizontal placement offset
    pub offset_x: i64,
    /// Vertical placement offset
    pub offset_y: i64,
}

impl PlacedImage {
    pub fn new(width: u32, height: u32, offset_x: i64, offset_y: i64) -> Self {
        PlacedImage { width, height, offset_x, offset_y }
    }

    /// Top-left corner in the virtual plane
    pub fn origin(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Bounding box in the virtual plane, or `None` if its far edge
    /// overflows the coordinate range
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_origin(self.origin(), self.width, self.height)
    }
}

//! Bounding box structure for placed images and their intersections

use super::point::Point;

/// A half-open axis-aligned box `[min_x, max_x) × [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum X coordinate (inclusive)
    pub min_x: i64,
    /// Minimum Y coordinate (inclusive)
    pub min_y: i64,
    /// Maximum X coordinate (exclusive)
    pub max_x: i64,
    /// Maximum Y coordinate (exclusive)
    pub max_y: i64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        BoundingBox { min_x, min_y, max_x, max_y }
    }

    /// Create a box from its top-left corner and size
    ///
    /// # Returns
    /// `None` when the far edge does not fit in an `i64`
    pub fn from_origin(origin: Point, width: u32, height: u32) -> Option<Self> {
        Some(BoundingBox::new(
            origin.x,
            origin.y,
            origin.x.checked_add(i64::from(width))?,
            origin.y.checked_add(i64::from(height))?,
        ))
    }

    /// Get the width of the bounding box, saturating at `i64::MAX`
    pub fn width(&self) -> i64 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Get the height of the bounding box, saturating at `i64::MAX`
    pub fn height(&self) -> i64 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Check whether the box covers no pixels
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Get the center point of the bounding box
    ///
    /// Uses floor division, so boxes straddling negative coordinates round
    /// toward negative infinity rather than toward zero.
    pub fn center(&self) -> Point {
        Point::new(midpoint(self.min_x, self.max_x), midpoint(self.min_y, self.max_y))
    }

    /// Intersect two boxes
    ///
    /// # Returns
    /// The shared area, or `None` when the boxes do not overlap on
    /// either axis (touching edges do not count as overlap)
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let shared = BoundingBox::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        );

        if shared.is_empty() {
            None
        } else {
            Some(shared)
        }
    }

    /// Smallest box covering both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Floor of the mean, computed wide so edges near the `i64` limits cannot overflow
fn midpoint(a: i64, b: i64) -> i64 {
    // The mean of two i64 values always fits back into an i64
    (i128::from(a) + i128::from(b)).div_euclid(2) as i64
}

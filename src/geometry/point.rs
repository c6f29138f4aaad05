//! Point structure for positions in the virtual plane

/// A point in the shared virtual plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// X coordinate (pixels, grows to the right)
    pub x: i64,
    /// Y coordinate (pixels, grows downward)
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

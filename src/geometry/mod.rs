//! Geometry primitives for placing images in a shared virtual plane
//!
//! All coordinates are integer pixels. The virtual plane is unbounded in
//! every direction, so positions are signed while image and window sizes
//! are unsigned.

mod point;
mod bbox;
mod placed;
mod region;
mod size;

// Re-export key types
pub use self::point::Point;
pub use self::bbox::BoundingBox;
pub use self::placed::PlacedImage;
pub use self::region::OverlapRegion;
pub use self::size::OutputSize;

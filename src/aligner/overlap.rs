//! Overlap window computation

use log::{debug, warn};

use crate::geometry::{OutputSize, OverlapRegion, PlacedImage};

/// Compute the output window for two placed images
///
/// Intersects the two bounding boxes and centers a window of exactly
/// `output_size` on the intersection's center. The window is not clamped to
/// the intersection or to either image, so it can be larger than the true
/// overlap and reach past both images.
///
/// # Arguments
/// * `reference` - The reference image placement
/// * `series` - The series image placement
/// * `output_size` - Size of the window to produce
///
/// # Returns
/// The crop window, or `None` if the images do not overlap. Placements
/// whose far edge or window corner leaves the `i64` range are rejected
/// with `None` as well.
pub fn compute_overlap(reference: &PlacedImage,
                       series: &PlacedImage,
                       output_size: OutputSize) -> Option<OverlapRegion> {
    let (Some(reference_box), Some(series_box)) = (reference.bounds(), series.bounds()) else {
        warn!("Placement out of coordinate range: reference {:?}, series {:?}", reference, series);
        return None;
    };
    let shared = reference_box.intersection(&series_box)?;
    debug!("Intersection: x [{}, {}), y [{}, {}) ({}x{})",
           shared.min_x, shared.max_x, shared.min_y, shared.max_y,
           shared.width(), shared.height());

    let region = OverlapRegion::centered_on(shared.center(), output_size);
    if region.is_none() {
        warn!("Overlap window corner out of coordinate range");
    }
    region
}

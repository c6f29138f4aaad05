//! Offset-to-crop transform
//!
//! An image is laid out on a white scratch plane with a half-window margin,
//! then the overlap window is cut out of that plane. The plane layout and the
//! clamping of the cut are part of the output contract: for extreme offsets
//! the clamp shifts the window back inside the plane. The plane itself is
//! never allocated; only the window is.

use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbImage, RgbaImage};
use log::debug;

use crate::aligner::errors::{AlignError, AlignResult};
use crate::geometry::{OutputSize, OverlapRegion};

/// Padding color for every pixel not covered by the image
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Layout of an image on its scratch plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchLayout {
    /// Plane width
    pub width: i64,
    /// Plane height
    pub height: i64,
    /// Column the image's left edge is pasted at
    pub paste_x: i64,
    /// Row the image's top edge is pasted at
    pub paste_y: i64,
}

impl ScratchLayout {
    /// Compute the plane for an image of the given size and offset
    ///
    /// Fails with `AlignError::DimensionOverflow` when the plane does not
    /// fit the `i64` coordinate range.
    pub fn new(image_width: u32, image_height: u32,
               offset_x: i64, offset_y: i64,
               output_size: OutputSize) -> AlignResult<Self> {
        let width = plane_extent(image_width, offset_x, output_size.width);
        let height = plane_extent(image_height, offset_y, output_size.height);
        let paste_x = paste_position(offset_x, output_size.half_width());
        let paste_y = paste_position(offset_y, output_size.half_height());

        match (i64::try_from(width), i64::try_from(height),
               i64::try_from(paste_x), i64::try_from(paste_y)) {
            (Ok(width), Ok(height), Ok(paste_x), Ok(paste_y)) =>
                Ok(ScratchLayout { width, height, paste_x, paste_y }),
            _ => Err(AlignError::DimensionOverflow(width, height)),
        }
    }

    /// Top-left corner of the window's cut on this plane, after clamping
    pub fn crop_origin(&self, offset_x: i64, offset_y: i64, region: &OverlapRegion) -> (i64, i64) {
        (
            clamp_cut(self.paste_x, offset_x, region.left, self.width, region.width),
            clamp_cut(self.paste_y, offset_y, region.top, self.height, region.height),
        )
    }
}

/// `image + |offset| + output` along one axis
fn plane_extent(image_len: u32, offset: i64, output_len: u32) -> i128 {
    i128::from(image_len) + i128::from(offset).abs() + i128::from(output_len)
}

/// `max(0, -offset) + half_output` along one axis
fn paste_position(offset: i64, half_output: i64) -> i128 {
    (-i128::from(offset)).max(0) + i128::from(half_output)
}

/// Cut start `paste + offset + window_start`, clamped into `[0, plane - window]`
fn clamp_cut(paste: i64, offset: i64, window_start: i64, plane_len: i64, window_len: u32) -> i64 {
    let start = i128::from(paste) + i128::from(offset) + i128::from(window_start);
    let max_start = i128::from(plane_len) - i128::from(window_len);

    // max-after-min keeps the origin at 0 when the window is wider than the plane
    let clamped = start.min(max_start).max(0);
    // clamped lies in [0, plane_len]
    clamped as i64
}

/// Place an image at its offset and cut the overlap window out of it
///
/// # Arguments
/// * `image` - Source image; an alpha channel is composited onto white
/// * `offset_x` - Horizontal placement offset of this image
/// * `offset_y` - Vertical placement offset of this image
/// * `region` - Window returned by `compute_overlap`
/// * `output_size` - The tool's fixed output size
///
/// # Returns
/// An RGB image of exactly `region.width × region.height`, or
/// `AlignError::InvalidRegion` for a window with a zero dimension
pub fn align_and_crop_to_overlap(image: &DynamicImage,
                                 offset_x: i64,
                                 offset_y: i64,
                                 region: &OverlapRegion,
                                 output_size: OutputSize) -> AlignResult<RgbImage> {
    if !region.is_valid() {
        return Err(AlignError::InvalidRegion { width: region.width, height: region.height });
    }

    let (image_w, image_h) = image.dimensions();
    let layout = ScratchLayout::new(image_w, image_h, offset_x, offset_y, output_size)?;
    debug!("Scratch plane {}x{}, image pasted at ({}, {})",
           layout.width, layout.height, layout.paste_x, layout.paste_y);

    let (crop_left, crop_top) = layout.crop_origin(offset_x, offset_y, region);
    debug!("Cropping {}x{} at ({}, {})", region.width, region.height, crop_left, crop_top);

    // Both positions lie in [0, plane], so the difference cannot overflow.
    // Pixels of the window outside the image stay background.
    let image_x = layout.paste_x - crop_left;
    let image_y = layout.paste_y - crop_top;

    let mut window = RgbaImage::from_pixel(region.width, region.height, BACKGROUND);
    let rgba = image.to_rgba8();
    if image.color().has_alpha() {
        imageops::overlay(&mut window, &rgba, image_x, image_y);
    } else {
        imageops::replace(&mut window, &rgba, image_x, image_y);
    }

    Ok(DynamicImage::ImageRgba8(window).to_rgb8())
}

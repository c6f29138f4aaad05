//! Static overlay preview of a run's two placed images

use image::{imageops, DynamicImage, GenericImageView, RgbaImage};

use crate::aligner::crop::BACKGROUND;
use crate::aligner::errors::{AlignError, AlignResult};
use crate::aligner::settings::{AlignmentSettings, Role};

/// Blend the series image over the reference image at their offsets
///
/// The canvas covers the union of both placed images on a white
/// background. The reference is drawn opaque and the series image is drawn
/// with a uniform alpha of `settings.transparency`.
pub fn render_preview(reference: &DynamicImage,
                      series: &DynamicImage,
                      settings: &AlignmentSettings) -> AlignResult<RgbaImage> {
    if !(0.0..=1.0).contains(&settings.transparency) {
        return Err(AlignError::InvalidTransparency(settings.transparency));
    }

    let (ref_w, ref_h) = reference.dimensions();
    let (series_w, series_h) = series.dimensions();
    let (Some(ref_box), Some(series_box)) = (
        settings.place(Role::Reference, ref_w, ref_h).bounds(),
        settings.place(Role::Series, series_w, series_h).bounds(),
    ) else {
        return Err(AlignError::DimensionOverflow(i128::from(ref_w.max(series_w)), i128::from(ref_h.max(series_h))));
    };
    let canvas_box = ref_box.union(&series_box);

    let (Ok(width), Ok(height)) = (u32::try_from(canvas_box.width()), u32::try_from(canvas_box.height())) else {
        return Err(AlignError::DimensionOverflow(canvas_box.width().into(), canvas_box.height().into()));
    };
    let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

    imageops::overlay(&mut canvas, &reference.to_rgba8(),
                      ref_box.min_x - canvas_box.min_x,
                      ref_box.min_y - canvas_box.min_y);

    let alpha = (255.0 * settings.transparency).round() as u8;
    let mut faded = series.to_rgba8();
    for pixel in faded.pixels_mut() {
        pixel[3] = alpha;
    }
    imageops::overlay(&mut canvas, &faded,
                      series_box.min_x - canvas_box.min_x,
                      series_box.min_y - canvas_box.min_y);

    Ok(canvas)
}

//! Image loading and saving helpers

use image::{DynamicImage, RgbaImage};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::aligner::errors::AlignResult;

/// Load an image from disk with timing and logging
pub fn load_image(path: &Path) -> AlignResult<DynamicImage> {
    let start = Instant::now();
    let image = image::open(path)?;
    info!("Loaded {} in {:?} - Size: {}x{}, Color: {:?}",
          path.display(), start.elapsed(), image.width(), image.height(), image.color());
    Ok(image)
}

/// Ensure a file path has PNG extension for transparency support
///
/// # Arguments
/// * `file_path` - The original file path
///
/// # Returns
/// The same path if it already ends in `.png`, otherwise the path with its
/// extension replaced by `.png`
pub fn ensure_png_extension(file_path: &Path) -> PathBuf {
    let is_png = file_path.extension()
        .map_or(false, |ext| ext.to_string_lossy().to_lowercase() == "png");
    if is_png {
        file_path.to_path_buf()
    } else {
        file_path.with_extension("png")
    }
}

/// Save an RGBA image as PNG, adjusting the extension if needed
///
/// # Returns
/// The path the image was written to
pub fn save_rgba_png(image: &RgbaImage, output_path: &Path) -> AlignResult<PathBuf> {
    let final_path = ensure_png_extension(output_path);
    if final_path != output_path {
        info!("Changed output extension to PNG for transparency support: {}", final_path.display());
    }

    image.save(&final_path)?;
    Ok(final_path)
}

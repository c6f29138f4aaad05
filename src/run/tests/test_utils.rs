use std::fs;
use std::path::{Path, PathBuf};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Writes a solid RGB image
pub fn write_rgb(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color)).save(path).unwrap();
}

/// Writes a solid RGBA image
pub fn write_rgba(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color)).save(path).unwrap();
}

/// Creates `base/<name>` holding a reference and series image of the given size
pub fn create_run(base: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let dir = base.join(name);
    fs::create_dir_all(&dir).unwrap();
    write_rgba(&dir.join("single.png"), width, height, [200, 10, 10, 255]);
    write_rgb(&dir.join("series_0.jpg"), width, height, [10, 10, 200]);
    dir
}

//! Tests for the alignment crop transform

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

use crate::aligner::{align_and_crop_to_overlap, AlignError, ScratchLayout};
use crate::geometry::{OutputSize, OverlapRegion};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Image where every pixel encodes its own coordinates
fn gradient(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]));
    DynamicImage::ImageRgb8(img)
}

fn solid(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
}

#[test]
fn test_scratch_layout() {
    let size = OutputSize::new(600, 900);

    let layout = ScratchLayout::new(600, 900, 50, -30, size).unwrap();
    assert_eq!((layout.width, layout.height), (1250, 1830));
    assert_eq!((layout.paste_x, layout.paste_y), (300, 480));
}

#[test]
fn test_crop_origin_clamps_into_plane() {
    let size = OutputSize::new(600, 900);
    let layout = ScratchLayout::new(10, 10, 0, 0, size).unwrap();

    let far = OverlapRegion::new(1000, 1000, 600, 900);
    assert_eq!(layout.crop_origin(0, 0, &far), (10, 10));

    let before = OverlapRegion::new(-1000, -1000, 600, 900);
    assert_eq!(layout.crop_origin(0, 0, &before), (0, 0));
}

#[test]
fn test_scratch_layout_beyond_coordinate_range() {
    let size = OutputSize::new(600, 900);

    for &(dx, dy) in [(i64::MIN, 0), (0, i64::MIN), (i64::MAX, 0), (0, i64::MAX - 100)].iter() {
        let result = ScratchLayout::new(4, 4, dx, dy, size);
        assert!(matches!(result, Err(AlignError::DimensionOverflow(_, _))), "offset ({}, {})", dx, dy);
    }

    let layout = ScratchLayout::new(4, 4, -(i64::MAX - 1000), 0, size).unwrap();
    assert_eq!(layout.paste_x, i64::MAX - 700);
    assert_eq!(layout.crop_origin(i64::MIN + 1000, 0, &OverlapRegion::new(i64::MIN, 0, 600, 900)).0, 0);
}

#[test]
fn test_aligned_image_is_unchanged() {
    let image = gradient(40, 30);
    let size = OutputSize::new(40, 30);
    let region = OverlapRegion::new(0, 0, 40, 30);

    let cropped = align_and_crop_to_overlap(&image, 0, 0, &region, size).unwrap();
    assert_eq!(cropped, image.to_rgb8());
}

#[test]
fn test_output_size_is_fixed_for_any_offset() {
    let image = gradient(50, 20);
    let size = OutputSize::new(60, 90);
    let region = OverlapRegion::new(-7, 13, 60, 90);

    for &(dx, dy) in [(0, 0), (5, -5), (-300, 0), (0, 400), (1000, -1000)].iter() {
        let cropped = align_and_crop_to_overlap(&image, dx, dy, &region, size).unwrap();
        assert_eq!(cropped.dimensions(), (60, 90), "offset ({}, {})", dx, dy);
    }
}

#[test]
fn test_region_outside_image_is_background() {
    let image = solid(10, 10, Rgb([0, 0, 0]));
    let size = OutputSize::new(600, 900);
    let region = OverlapRegion::new(0, 0, 600, 900);

    // image sits at [1000, 1010) on both axes, far from the window
    let cropped = align_and_crop_to_overlap(&image, 1000, 1000, &region, size).unwrap();
    assert_eq!(cropped.dimensions(), (600, 900));
    assert!(cropped.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_clamp_pulls_window_back_over_small_image() {
    let image = solid(10, 10, Rgb([0, 0, 0]));
    let size = OutputSize::new(600, 900);
    let region = OverlapRegion::new(1000, 1000, 600, 900);

    // plane is 610x910 with the image at (300, 450); the cut clamps to (10, 10)
    let cropped = align_and_crop_to_overlap(&image, 0, 0, &region, size).unwrap();
    assert_eq!(*cropped.get_pixel(290, 440), Rgb([0, 0, 0]));
    assert_eq!(*cropped.get_pixel(299, 449), Rgb([0, 0, 0]));
    assert_eq!(*cropped.get_pixel(300, 450), WHITE);
    assert_eq!(*cropped.get_pixel(0, 0), WHITE);
}

#[test]
fn test_reference_crop_for_shifted_pair() {
    let image = gradient(600, 900);
    let size = OutputSize::new(600, 900);
    let region = OverlapRegion::new(25, 25, 600, 900);

    let cropped = align_and_crop_to_overlap(&image, 0, 0, &region, size).unwrap();
    assert_eq!(*cropped.get_pixel(0, 0), Rgb([25, 25, 7]));
    assert_eq!(*cropped.get_pixel(574, 874), Rgb([(599 % 256) as u8, (899 % 256) as u8, 7]));
    assert_eq!(*cropped.get_pixel(575, 0), WHITE);
    assert_eq!(*cropped.get_pixel(0, 875), WHITE);
}

#[test]
fn test_series_crop_adds_offset_to_window() {
    let image = gradient(600, 900);
    let size = OutputSize::new(600, 900);
    let region = OverlapRegion::new(25, 25, 600, 900);

    // cut starts at paste + offset + window corner = 300 + 50 + 25
    let cropped = align_and_crop_to_overlap(&image, 50, 50, &region, size).unwrap();
    assert_eq!(*cropped.get_pixel(0, 0), Rgb([75, 75, 7]));
    assert_eq!(*cropped.get_pixel(524, 0), Rgb([(599 % 256) as u8, 75, 7]));
    assert_eq!(*cropped.get_pixel(525, 0), WHITE);
}

#[test]
fn test_alpha_is_composited_onto_white() {
    let mut rgba = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    rgba.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
    let image = DynamicImage::ImageRgba8(rgba);
    let size = OutputSize::new(4, 4);
    let region = OverlapRegion::new(0, 0, 4, 4);

    let cropped = align_and_crop_to_overlap(&image, 0, 0, &region, size).unwrap();
    assert_eq!(*cropped.get_pixel(0, 0), WHITE);
    assert_eq!(*cropped.get_pixel(1, 1), Rgb([10, 20, 30]));
}

#[test]
fn test_window_larger_than_plane_is_padded() {
    let image = solid(2, 2, Rgb([0, 0, 0]));
    let size = OutputSize::new(2, 2);
    let region = OverlapRegion::new(0, 0, 20, 20);

    // plane is 4x4, the window origin stays at 0
    let cropped = align_and_crop_to_overlap(&image, 0, 0, &region, size).unwrap();
    assert_eq!(cropped.dimensions(), (20, 20));
    assert_eq!(*cropped.get_pixel(1, 1), Rgb([0, 0, 0]));
    assert_eq!(*cropped.get_pixel(10, 10), WHITE);
}

#[test]
fn test_empty_region_is_rejected() {
    let image = solid(10, 10, WHITE);
    let size = OutputSize::new(600, 900);

    let result = align_and_crop_to_overlap(&image, 0, 0, &OverlapRegion::new(0, 0, 0, 900), size);
    assert!(matches!(result, Err(AlignError::InvalidRegion { width: 0, height: 900 })));
}

#[test]
fn test_extreme_offset_is_an_error() {
    let image = gradient(4, 4);
    let size = OutputSize::new(600, 900);
    let region = OverlapRegion::new(0, 0, 600, 900);

    let result = align_and_crop_to_overlap(&image, i64::MIN, 0, &region, size);
    assert!(matches!(result, Err(AlignError::DimensionOverflow(_, _))));
}

#[test]
fn test_huge_offset_only_allocates_the_window() {
    let image = solid(4, 4, Rgb([0, 0, 0]));
    let size = OutputSize::new(60, 90);
    let region = OverlapRegion::new(0, 0, 60, 90);

    // a plane this wide could never be allocated; the window alone is
    for &dx in [1_i64 << 40, -(1_i64 << 40)].iter() {
        let cropped = align_and_crop_to_overlap(&image, dx, 0, &region, size).unwrap();
        assert_eq!(cropped.dimensions(), (60, 90));
        assert!(cropped.pixels().all(|p| *p == WHITE), "offset {}", dx);
    }
}

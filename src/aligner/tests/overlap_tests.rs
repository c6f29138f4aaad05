//! Tests for overlap window computation

use crate::aligner::{compute_overlap, OverlapAligner};
use crate::geometry::{OutputSize, OverlapRegion, PlacedImage};

fn output() -> OutputSize {
    OutputSize::new(600, 900)
}

#[test]
fn test_shifted_series_overlap() {
    let reference = PlacedImage::new(600, 900, 0, 0);
    let series = PlacedImage::new(600, 900, 50, 50);

    let region = compute_overlap(&reference, &series, output());
    assert_eq!(region, Some(OverlapRegion::new(25, 25, 600, 900)));
}

#[test]
fn test_no_horizontal_overlap() {
    let reference = PlacedImage::new(600, 900, 0, 0);
    let series = PlacedImage::new(600, 900, 700, 0);

    assert_eq!(compute_overlap(&reference, &series, output()), None);
}

#[test]
fn test_disjoint_boxes_never_overlap() {
    let reference = PlacedImage::new(100, 80, -20, 10);
    let placements = [
        PlacedImage::new(50, 50, 80, 10),    // touches right edge
        PlacedImage::new(50, 50, -70, 10),   // touches left edge
        PlacedImage::new(50, 50, 0, 90),     // touches bottom edge
        PlacedImage::new(50, 50, 0, -40),    // touches top edge
        PlacedImage::new(10, 10, 500, 500),
        PlacedImage::new(10, 10, -500, -500),
    ];

    for series in placements.iter() {
        assert_eq!(compute_overlap(&reference, series, output()), None, "{:?}", series);
    }
}

#[test]
fn test_identical_placements_center_on_image() {
    let image = PlacedImage::new(400, 300, 10, -20);
    let size = OutputSize::new(200, 100);

    let region = compute_overlap(&image, &image, size).unwrap();
    // center is (10 + 410) / 2, (-20 + 280) / 2
    assert_eq!(region, OverlapRegion::new(210 - 100, 130 - 50, 200, 100));
}

#[test]
fn test_overlap_is_symmetric() {
    let cases = [
        (PlacedImage::new(600, 900, 0, 0), PlacedImage::new(600, 900, 50, 50)),
        (PlacedImage::new(640, 480, -33, 17), PlacedImage::new(500, 700, 12, -99)),
        (PlacedImage::new(3, 5, 1, 1), PlacedImage::new(7, 2, -2, 3)),
        (PlacedImage::new(10, 10, 0, 0), PlacedImage::new(10, 10, 20, 0)),
    ];

    for (a, b) in cases.iter() {
        assert_eq!(compute_overlap(a, b, output()), compute_overlap(b, a, output()));
    }
}

#[test]
fn test_window_keeps_output_size_for_tiny_overlap() {
    let reference = PlacedImage::new(600, 900, 0, 0);
    let series = PlacedImage::new(600, 900, 599, 899);

    let region = compute_overlap(&reference, &series, output()).unwrap();
    assert_eq!((region.width, region.height), (600, 900));
    // intersection is the single pixel (599, 899)
    assert_eq!((region.left, region.top), (599 - 300, 899 - 450));
}

#[test]
fn test_center_floors_negative_coordinates() {
    let reference = PlacedImage::new(3, 3, -4, -4);
    let series = PlacedImage::new(3, 3, -4, -4);

    // (-4 + -1) / 2 rounds down to -3
    let region = compute_overlap(&reference, &series, OutputSize::new(2, 2)).unwrap();
    assert_eq!(region, OverlapRegion::new(-4, -4, 2, 2));
}

#[test]
fn test_odd_output_size_rounds_half_down() {
    let image = PlacedImage::new(10, 10, 0, 0);
    let region = compute_overlap(&image, &image, OutputSize::new(5, 7)).unwrap();

    assert_eq!(region, OverlapRegion::new(3, 2, 5, 7));
}

#[test]
fn test_aligner_uses_configured_size() {
    let aligner = OverlapAligner::new(OutputSize::new(100, 50));
    let image = PlacedImage::new(200, 200, 0, 0);

    let region = aligner.compute_overlap(&image, &image).unwrap();
    assert_eq!(region, OverlapRegion::new(50, 75, 100, 50));
    assert_eq!(aligner.output_size(), OutputSize::new(100, 50));
}

#[test]
fn test_far_edge_overflow_is_rejected() {
    let image = PlacedImage::new(600, 900, i64::MAX - 100, 0);
    assert_eq!(compute_overlap(&image, &image, output()), None);

    let reference = PlacedImage::new(600, 900, 0, 0);
    assert_eq!(compute_overlap(&reference, &image, output()), None);
    assert_eq!(compute_overlap(&image, &reference, output()), None);
}

#[test]
fn test_window_corner_underflow_is_rejected() {
    let image = PlacedImage::new(10, 10, i64::MIN, 0);
    assert_eq!(compute_overlap(&image, &image, output()), None);
}

#[test]
fn test_placements_near_the_limits_still_overlap() {
    let image = PlacedImage::new(600, 900, i64::MAX - 1000, i64::MIN);
    let region = compute_overlap(&image, &image, output());

    assert_eq!(region, Some(OverlapRegion::new(i64::MAX - 1000, i64::MIN, 600, 900)));
}

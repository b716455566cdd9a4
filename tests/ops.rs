mod common;

use common::synthetic_image::{checkerboard, gradient};
use graymap::{ops, GrayImage};

#[test]
fn create_yields_a_black_image_with_the_given_attributes() {
    let img = GrayImage::new(320, 200, 100).expect("allocation");
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 200);
    assert_eq!(img.maxval(), 100);
    assert!(img.pixels().iter().all(|&p| p == 0));
}

#[test]
fn negative_twice_restores_the_original() {
    let original = checkerboard(64, 48, 8);
    let mut img = original.clone();
    ops::negative(&mut img);
    assert_ne!(img, original);
    ops::negative(&mut img);
    assert_eq!(img, original);
}

#[test]
fn four_ccw_rotations_restore_the_original() {
    let original = gradient(37, 21);
    let mut img = original.clone();
    for _ in 0..4 {
        img = ops::rotated_ccw(&img).expect("allocation");
    }
    assert_eq!(img, original);
}

#[test]
fn mirroring_twice_restores_the_original() {
    let original = gradient(33, 7);
    let mirrored = ops::mirrored_h(&original).expect("allocation");
    let restored = ops::mirrored_h(&mirrored).expect("allocation");
    assert_eq!(restored, original);
}

#[test]
fn crop_then_paste_back_restores_the_original() {
    let original = checkerboard(64, 48, 5);
    let patch = ops::cropped(&original, 17, 5, 20, 30).expect("allocation");
    let mut img = original.clone();
    ops::negative(&mut img); // disturb the area first
    ops::paste(&mut img, 17, 5, &patch);
    assert_eq!(
        ops::cropped(&img, 17, 5, 20, 30).expect("allocation"),
        patch
    );
    let mut img = original.clone();
    ops::paste(&mut img, 17, 5, &patch);
    assert_eq!(img, original);
}

#[test]
fn blur_with_zero_radius_is_the_identity() {
    let original = checkerboard(31, 17, 3);
    let mut img = original.clone();
    ops::box_blur(&mut img, 0, 0).expect("allocation");
    assert_eq!(img, original);
}

#[test]
fn uniform_image_survives_blur_unchanged() {
    // 4x4 all-100 image, 3x3 window: edge windows clamp, but the mean of
    // identical samples is that sample.
    let mut img = GrayImage::from_raw(4, 4, 255, vec![100; 16]);
    ops::box_blur(&mut img, 1, 1).expect("allocation");
    assert_eq!(img.pixels(), &[100u8; 16][..]);
}

#[test]
fn locate_finds_an_image_inside_itself_at_the_origin() {
    let img = checkerboard(40, 30, 4);
    assert_eq!(ops::locate(&img, &img), Some((0, 0)));
}

#[test]
fn locate_rejects_a_needle_larger_than_the_haystack() {
    let hay = checkerboard(16, 16, 2);
    let wide = checkerboard(17, 4, 2);
    let tall = checkerboard(4, 17, 2);
    assert_eq!(ops::locate(&hay, &wide), None);
    assert_eq!(ops::locate(&hay, &tall), None);
}

#[test]
fn matching_never_reads_past_the_edge() {
    let hay = checkerboard(8, 8, 8); // uniform 32s
    let needle = GrayImage::from_raw(3, 3, 255, vec![32; 9]);
    assert!(ops::matches_at(&hay, 5, 5, &needle));
    // anchors on the last row/column leave no room for a 3x3 needle
    assert!(!ops::matches_at(&hay, 6, 5, &needle));
    assert!(!ops::matches_at(&hay, 5, 7, &needle));
}

#[test]
fn a_tile_pasted_flush_with_the_corner_is_located() {
    let mut img = GrayImage::new(16, 12, 255).expect("allocation");
    let mut tile = GrayImage::new(1, 1, 255).expect("allocation");
    ops::negative(&mut tile); // single white pixel
    ops::paste(&mut img, 15, 11, &tile);
    assert_eq!(ops::locate(&img, &tile), Some((15, 11)));
}

#[test]
fn blend_with_full_alpha_equals_paste() {
    let mut blended = checkerboard(24, 24, 3);
    let mut pasted = blended.clone();
    let src = gradient(10, 10);
    ops::blend(&mut blended, 14, 14, &src, 1.0);
    ops::paste(&mut pasted, 14, 14, &src);
    assert_eq!(blended, pasted);
}

//! Dual-image operations: paste, alpha blend, and subimage search.

use crate::image::GrayImage;
use log::debug;

/// Copy every sample of `src` into `dst` at offset (x, y), overwriting in
/// place. `src` must fit inside `dst` at that offset.
pub fn paste(dst: &mut GrayImage, x: usize, y: usize, src: &GrayImage) {
    assert!(
        dst.contains_rect(x, y, src.width(), src.height()),
        "paste of {}x{} at ({x}, {y}) outside destination",
        src.width(),
        src.height()
    );
    let w = src.width();
    for sy in 0..src.height() {
        dst.row_mut(y + sy)[x..x + w].copy_from_slice(src.row(sy));
    }
}

/// Blend `src` into `dst` at offset (x, y):
/// `dst' = clamp(round(src * alpha + dst * (1 - alpha)), 0, maxval)`.
///
/// `alpha` weights the blended-in image. Values outside `[0, 1]` are allowed
/// and extrapolate; the result still saturates into `[0, maxval]`.
pub fn blend(dst: &mut GrayImage, x: usize, y: usize, src: &GrayImage, alpha: f64) {
    assert!(
        dst.contains_rect(x, y, src.width(), src.height()),
        "blend of {}x{} at ({x}, {y}) outside destination",
        src.width(),
        src.height()
    );
    let maxval = dst.maxval() as f64;
    let w = src.width();
    for sy in 0..src.height() {
        let src_row = src.row(sy);
        let dst_row = &mut dst.row_mut(y + sy)[x..x + w];
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            let mixed = s as f64 * alpha + *d as f64 * (1.0 - alpha);
            *d = (mixed + 0.5).floor().clamp(0.0, maxval) as u8;
        }
    }
}

/// True iff `needle` fits inside `hay` at anchor (x, y) and every
/// corresponding sample is equal. The anchor itself must be a valid position
/// of `hay`; a rectangle that does not fit simply compares unequal, without
/// reading out of bounds. Comparison short-circuits in row-major order.
pub fn matches_at(hay: &GrayImage, x: usize, y: usize, needle: &GrayImage) -> bool {
    debug_assert!(hay.in_bounds(x, y), "anchor ({x}, {y}) out of bounds");
    if !hay.contains_rect(x, y, needle.width(), needle.height()) {
        return false;
    }
    let w = needle.width();
    for sy in 0..needle.height() {
        if hay.row(y + sy)[x..x + w] != *needle.row(sy) {
            return false;
        }
    }
    true
}

/// Find the first anchor, scanning rows top to bottom and left to right
/// within each row, where `needle` matches a subimage of `hay`.
///
/// Returns `None` when no anchor matches or when `needle` exceeds `hay` in
/// either dimension. An empty needle trivially matches at (0, 0).
pub fn locate(hay: &GrayImage, needle: &GrayImage) -> Option<(usize, usize)> {
    if needle.width() > hay.width() || needle.height() > hay.height() {
        return None;
    }
    if needle.is_empty() {
        return Some((0, 0));
    }
    for y in 0..=hay.height() - needle.height() {
        for x in 0..=hay.width() - needle.width() {
            if matches_at(hay, x, y, needle) {
                debug!("locate: matched {}x{} needle at ({x}, {y})", needle.width(), needle.height());
                return Some((x, y));
            }
        }
    }
    debug!(
        "locate: no match for {}x{} needle in {}x{} image",
        needle.width(),
        needle.height(),
        hay.width(),
        hay.height()
    );
    None
}

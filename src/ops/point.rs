//! In-place pixel-level transforms. None of these fail and none change the
//! image geometry.

use crate::image::GrayImage;

/// Invert every sample: `p` becomes `maxval - p` (photographic negative).
pub fn negative(img: &mut GrayImage) {
    let maxval = img.maxval();
    for p in img.pixels_mut() {
        *p = maxval - *p;
    }
}

/// Binarize: samples at or above `thr` become `maxval`, the rest become 0.
pub fn threshold(img: &mut GrayImage, thr: u8) {
    let maxval = img.maxval();
    for p in img.pixels_mut() {
        *p = if *p >= thr { maxval } else { 0 };
    }
}

/// Scale every sample by `factor`, rounding half up and saturating at
/// `maxval`. Factors above 1.0 brighten, below 1.0 darken. `factor` must be
/// non-negative.
pub fn brighten(img: &mut GrayImage, factor: f64) {
    debug_assert!(factor >= 0.0, "brighten factor must be non-negative");
    let maxval = img.maxval();
    for p in img.pixels_mut() {
        let scaled = (*p as f64 * factor + 0.5).floor();
        *p = scaled.clamp(0.0, maxval as f64) as u8;
    }
}

//! Geometric transforms. Each allocates and returns a brand-new image and
//! leaves the source untouched; the only possible failure is an allocation
//! failure propagated from [`GrayImage::new`].

use crate::error::Result;
use crate::image::GrayImage;

/// Rotate 90 degrees counter-clockwise.
///
/// The result has the dimensions swapped; the source pixel (x, y) lands at
/// (y, width - 1 - x).
pub fn rotated_ccw(img: &GrayImage) -> Result<GrayImage> {
    let (w, h) = (img.width(), img.height());
    let mut out = GrayImage::new(h, w, img.maxval())?;
    for y in 0..h {
        let src_row = img.row(y);
        for (x, &p) in src_row.iter().enumerate() {
            out.set(y, w - 1 - x, p);
        }
    }
    Ok(out)
}

/// Flip left-right.
pub fn mirrored_h(img: &GrayImage) -> Result<GrayImage> {
    let mut out = GrayImage::new(img.width(), img.height(), img.maxval())?;
    for y in 0..img.height() {
        let src_row = img.row(y);
        for (dst, &p) in out.row_mut(y).iter_mut().zip(src_row.iter().rev()) {
            *dst = p;
        }
    }
    Ok(out)
}

/// Copy the `w × h` subrectangle anchored at (x, y) into a new image with its
/// origin reset to (0, 0). The rectangle must lie inside the source.
pub fn cropped(img: &GrayImage, x: usize, y: usize, w: usize, h: usize) -> Result<GrayImage> {
    assert!(
        img.contains_rect(x, y, w, h),
        "crop rectangle ({x}, {y}, {w}, {h}) outside image"
    );
    let mut out = GrayImage::new(w, h, img.maxval())?;
    for dy in 0..h {
        out.row_mut(dy).copy_from_slice(&img.row(y + dy)[x..x + w]);
    }
    Ok(out)
}

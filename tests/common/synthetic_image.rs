use graymap::GrayImage;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = GrayImage::new(width, height, 255).expect("allocation");
    for y in 0..height {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            let sum = x / cell + y / cell;
            *px = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Horizontal black-to-white gradient.
pub fn gradient(width: usize, height: usize) -> GrayImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = GrayImage::new(width, height, 255).expect("allocation");
    for y in 0..height {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = (x * 255 / (width - 1).max(1)) as u8;
        }
    }
    img
}

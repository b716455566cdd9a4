#![doc = include_str!("../README.md")]

pub mod error;
pub mod image;
pub mod ops;

// --- High-level re-exports -------------------------------------------------

// The pixel buffer and the error surface.
pub use crate::error::{Error, Result};
pub use crate::image::GrayImage;

// Persistence lives under `image` but is addressed as `graymap::pgm`.
pub use crate::image::pgm;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use graymap::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut img = GrayImage::new(64, 48, 255)?;
/// ops::negative(&mut img);
/// ops::box_blur(&mut img, 3, 3)?;
/// assert_eq!(img.min_max(), (255, 255));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::GrayImage;
    pub use crate::{ops, pgm};
}

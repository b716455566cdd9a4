//! Image transformations, all built on the `GrayImage` buffer primitives.
//!
//! - `point`: in-place pixel-level transforms (negative, threshold, brighten).
//! - `geom`: transforms returning a new image (rotate, mirror, crop).
//! - `compose`: dual-image operations (paste, blend, subimage search).
//! - `blur`: the incremental separable box mean filter.

pub mod blur;
pub mod compose;
pub mod geom;
pub mod point;

pub use self::blur::box_blur;
pub use self::compose::{blend, locate, matches_at, paste};
pub use self::geom::{cropped, mirrored_h, rotated_ccw};
pub use self::point::{brighten, negative, threshold};

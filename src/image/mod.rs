pub mod gray;
pub mod pgm;

pub use self::gray::GrayImage;

//! Pixel buffer abstraction and color utilities shared by both transforms

/// Owned RGB pixel grid
pub mod buffer;
/// Fill colors, inversion and alpha flattening
pub mod color;

pub use buffer::PixelBuffer;
pub use color::FillMode;

//! Two independent pixel-buffer transforms over 8-bit RGB images
//!
//! The scatter splitter resizes an image to a square canvas, inverts it and
//! distributes its fixed-size blocks across several output canvases, each
//! block keeping its grid position. The compositor pads images onto a common
//! canvas and folds them together with multiply or screen blending.

#![forbid(unsafe_code)]

/// Multiply/screen compositing of several images
pub mod blend;
/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel buffer abstraction and color utilities
pub mod pixel;
/// Grid partition, block assignment and the scatter transform
pub mod scatter;

pub use io::error::{ProcessingError, Result};

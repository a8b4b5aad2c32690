//! Multi-image compositor
//!
//! Inputs are padded onto a shared canvas sized to the largest width and
//! height, centered with floor offsets, then folded left to right with the
//! operator matching the background. An optional inversion runs last.

use std::path::PathBuf;

use image::DynamicImage;

use crate::blend::operator::{BlendOperator, combine};
use crate::io::configuration::MIN_BLEND_INPUTS;
use crate::io::error::{ProcessingError, Result};
use crate::io::image::load_image;
use crate::pixel::{FillMode, PixelBuffer};

/// Largest width and largest height across `layers`
pub fn common_extent(layers: &[PixelBuffer]) -> Option<(u32, u32)> {
    layers.iter().map(PixelBuffer::dimensions).reduce(
        |(max_width, max_height), (width, height)| (max_width.max(width), max_height.max(height)),
    )
}

/// Place `layer` centered on a fresh `width` x `height` background canvas
///
/// The offset is `((width - w) / 2, (height - h) / 2)` with floor division.
pub fn pad_centered(
    layer: &PixelBuffer,
    width: u32,
    height: u32,
    background: FillMode,
) -> PixelBuffer {
    let mut canvas = PixelBuffer::with_fill(width, height, background);
    let x = width.saturating_sub(layer.width()) / 2;
    let y = height.saturating_sub(layer.height()) / 2;
    canvas.paste(layer, i64::from(x), i64::from(y));
    canvas
}

/// Folds an ordered set of images into one with multiply or screen blending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compositor {
    background: FillMode,
    post_invert: bool,
}

impl Compositor {
    /// Create a compositor
    ///
    /// A white background selects multiply, black selects screen.
    pub const fn new(background: FillMode, post_invert: bool) -> Self {
        Self {
            background,
            post_invert,
        }
    }

    /// Background used for padding and alpha flattening
    pub const fn background(&self) -> FillMode {
        self.background
    }

    /// Operator used for every fold step
    pub const fn operator(&self) -> BlendOperator {
        BlendOperator::for_background(self.background)
    }

    /// Whether the final composite is inverted
    pub const fn post_invert(&self) -> bool {
        self.post_invert
    }

    /// Blend decoded images in order
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two images are supplied or any image has
    /// no pixels; nothing is blended in either case
    pub fn blend(&self, images: &[DynamicImage]) -> Result<PixelBuffer> {
        Self::check_input_count(images.len())?;
        let layers = images
            .iter()
            .map(|image| PixelBuffer::from_dynamic(image, self.background))
            .collect::<Result<Vec<_>>>()?;
        self.blend_buffers(&layers)
    }

    /// Decode image files and blend them in order
    ///
    /// Every file is decoded before any padding or blending starts.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending file if any decode fails, or if
    /// fewer than two paths are supplied
    #[tracing::instrument(skip(self, paths), fields(inputs = paths.len()))]
    pub fn blend_files(&self, paths: &[PathBuf]) -> Result<PixelBuffer> {
        Self::check_input_count(paths.len())?;
        let images = paths
            .iter()
            .map(|path| load_image(path))
            .collect::<Result<Vec<_>>>()?;
        self.blend(&images)
    }

    /// Blend already normalized buffers in order
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two buffers are supplied
    pub fn blend_buffers(&self, layers: &[PixelBuffer]) -> Result<PixelBuffer> {
        Self::check_input_count(layers.len())?;
        let (width, height) = common_extent(layers).ok_or(ProcessingError::InsufficientInput {
            provided: 0,
            required: MIN_BLEND_INPUTS,
        })?;

        let operator = self.operator();
        tracing::debug!(width, height, ?operator, "compositing {} layers", layers.len());

        let channel = operator.channel_fn();
        let mut padded = layers
            .iter()
            .map(|layer| pad_centered(layer, width, height, self.background));
        let first = padded.next().ok_or(ProcessingError::InsufficientInput {
            provided: 0,
            required: MIN_BLEND_INPUTS,
        })?;
        let mut composite = padded.try_fold(first, |running, layer| {
            combine(&running, &layer, channel)
        })?;

        if self.post_invert {
            composite.invert();
        }
        Ok(composite)
    }

    /// Reject input sets too small to blend
    ///
    /// # Errors
    ///
    /// Returns an insufficient-input error when `provided` is below two
    pub const fn check_input_count(provided: usize) -> Result<()> {
        if provided < MIN_BLEND_INPUTS {
            return Err(ProcessingError::InsufficientInput {
                provided,
                required: MIN_BLEND_INPUTS,
            });
        }
        Ok(())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(FillMode::White, false)
    }
}

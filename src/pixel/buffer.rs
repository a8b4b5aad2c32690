//! Owned RGB pixel grid with the region and color operations used by the core

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::io::error::{ProcessingError, Result, invalid_input};
use crate::pixel::color::{FillMode, invert_channel, normalize};

/// Rectangular 8-bit RGB pixel grid
///
/// Owns its storage exclusively; every operation that produces a new buffer
/// allocates fresh storage rather than borrowing from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// Create a buffer uniformly filled with one color
    pub fn filled(width: u32, height: u32, color: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, color),
        }
    }

    /// Create a buffer filled with a fill mode's color
    pub fn with_fill(width: u32, height: u32, fill: FillMode) -> Self {
        Self::filled(width, height, fill.rgb())
    }

    /// Wrap an existing RGB image
    pub const fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    /// Build a buffer from raw interleaved RGB channel data
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly `width * height * 3` values
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let found = data.len();
        RgbImage::from_raw(width, height, data)
            .map(Self::from_rgb)
            .ok_or_else(|| {
                invalid_input(&format!(
                    "{found} channel values cannot form a {width}x{height} RGB buffer"
                ))
            })
    }

    /// Normalize a decoded image into a buffer
    ///
    /// Alpha is flattened onto `background`; other color models are converted to RGB8.
    ///
    /// # Errors
    ///
    /// Returns an error if the image has zero width or height
    pub fn from_dynamic(image: &DynamicImage, background: FillMode) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(invalid_input(&format!(
                "image has no pixels ({}x{})",
                image.width(),
                image.height()
            )));
        }
        Ok(Self::from_rgb(normalize(image, background)))
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel at (x, y), or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Interleaved RGB channel values in row-major order
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the underlying image
    pub const fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// Release the underlying image, e.g. for encoding
    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    /// Copy a sub-region into a new buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the region is empty or extends past the buffer edges
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width());
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height());
        if width == 0 || height == 0 || !fits_x || !fits_y {
            return Err(ProcessingError::RegionOutOfBounds {
                region: (x, y, width, height),
                dimensions: self.dimensions(),
            });
        }
        Ok(Self::from_rgb(
            imageops::crop_imm(&self.image, x, y, width, height).to_image(),
        ))
    }

    /// Write another buffer into this one with its top-left corner at (x, y)
    ///
    /// Parts of `other` falling outside this buffer are clipped.
    pub fn paste(&mut self, other: &Self, x: i64, y: i64) {
        imageops::replace(&mut self.image, &other.image, x, y);
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Rgb<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Replace every channel value `v` with `255 - v`
    pub fn invert(&mut self) {
        for value in self.image.iter_mut() {
            *value = invert_channel(*value);
        }
    }

    /// Consume the buffer and return its inverse
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    /// Resample to exactly `width` x `height` with a Lanczos (windowed sinc) filter
    ///
    /// Aspect ratio is not preserved.
    #[must_use]
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if self.dimensions() == (width, height) {
            return self.clone();
        }
        Self::from_rgb(imageops::resize(
            &self.image,
            width,
            height,
            FilterType::Lanczos3,
        ))
    }

    /// Mirror left to right in place
    pub fn flip_horizontal(&mut self) {
        imageops::flip_horizontal_in_place(&mut self.image);
    }

    /// Mirror top to bottom in place
    pub fn flip_vertical(&mut self) {
        imageops::flip_vertical_in_place(&mut self.image);
    }

    /// Whether every pixel equals `color`
    pub fn is_uniform(&self, color: Rgb<u8>) -> bool {
        self.image.pixels().all(|pixel| *pixel == color)
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        Self::from_rgb(image)
    }
}

//! Fill colors, channel inversion and alpha flattening
//!
//! Every image entering the core is reduced to 8-bit RGB here. Alpha is
//! consumed by compositing onto a solid background and never carried further.

use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

/// Solid background used for padding, empty canvases and alpha flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum FillMode {
    /// Pure black (0, 0, 0)
    #[default]
    Black,
    /// Pure white (255, 255, 255)
    White,
}

impl FillMode {
    /// Channel value shared by all three channels of the fill color
    pub const fn channel(self) -> u8 {
        match self {
            Self::Black => u8::MIN,
            Self::White => u8::MAX,
        }
    }

    /// Fill color as an RGB pixel
    pub const fn rgb(self) -> Rgb<u8> {
        let value = self.channel();
        Rgb([value, value, value])
    }

    /// Lowercase name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complement of a single channel value
#[inline]
pub const fn invert_channel(value: u8) -> u8 {
    u8::MAX - value
}

/// Composite one channel over a background with straight alpha
///
/// Rounds to nearest, so fully opaque keeps the foreground and fully
/// transparent yields the background exactly.
#[inline]
pub const fn composite_channel(foreground: u8, alpha: u8, background: u8) -> u8 {
    let weighted = foreground as u32 * alpha as u32 + background as u32 * (255 - alpha as u32);
    ((weighted + 127) / 255) as u8
}

/// Flatten an RGBA image onto a solid background
pub fn flatten_alpha(image: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let [bg_r, bg_g, bg_b] = background.0;
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        Rgb([
            composite_channel(r, a, bg_r),
            composite_channel(g, a, bg_g),
            composite_channel(b, a, bg_b),
        ])
    })
}

/// Reduce any decoded image to 8-bit RGB
///
/// Sources with an alpha channel are flattened onto the fill color, all
/// others are converted directly (lossless for sources that are already RGB8).
pub fn normalize(image: &DynamicImage, background: FillMode) -> RgbImage {
    if image.color().has_alpha() {
        flatten_alpha(&image.to_rgba8(), background.rgb())
    } else {
        image.to_rgb8()
    }
}

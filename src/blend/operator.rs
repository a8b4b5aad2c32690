//! Per-channel blend operators and the buffer combine step

use crate::io::error::{ProcessingError, Result};
use crate::pixel::{FillMode, PixelBuffer};

/// Per-channel binary function used by [`combine`]
pub type ChannelFn = fn(u8, u8) -> u8;

/// Multiply blend: `a * b / 255`, floor division
///
/// Darkens; 255 is the identity.
#[inline]
pub const fn multiply(a: u8, b: u8) -> u8 {
    (a as u16 * b as u16 / 255) as u8
}

/// Screen blend: `255 - (255 - a) * (255 - b) / 255`, floor division
///
/// Lightens; 0 is the identity.
#[inline]
pub const fn screen(a: u8, b: u8) -> u8 {
    let inverse = (u8::MAX - a) as u16 * (u8::MAX - b) as u16 / 255;
    u8::MAX - inverse as u8
}

/// Blend operator selected by the background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOperator {
    /// Darkening blend whose identity is white
    Multiply,
    /// Lightening blend whose identity is black
    Screen,
}

impl BlendOperator {
    /// Operator whose identity element equals the background color
    ///
    /// Padding filled with the background then never changes the composite.
    pub const fn for_background(background: FillMode) -> Self {
        match background {
            FillMode::White => Self::Multiply,
            FillMode::Black => Self::Screen,
        }
    }

    /// Channel value that leaves the other operand unchanged
    pub const fn identity(self) -> u8 {
        match self {
            Self::Multiply => u8::MAX,
            Self::Screen => u8::MIN,
        }
    }

    /// Channel function implementing this operator
    pub const fn channel_fn(self) -> ChannelFn {
        match self {
            Self::Multiply => multiply,
            Self::Screen => screen,
        }
    }

    /// Apply the operator to one pair of channel values
    pub const fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Multiply => multiply(a, b),
            Self::Screen => screen(a, b),
        }
    }
}

/// Combine two equally sized buffers channel by channel
///
/// # Errors
///
/// Returns an error if the buffers differ in size
pub fn combine(base: &PixelBuffer, layer: &PixelBuffer, channel: ChannelFn) -> Result<PixelBuffer> {
    if base.dimensions() != layer.dimensions() {
        return Err(ProcessingError::DimensionMismatch {
            context: "blend combine",
            expected: base.dimensions(),
            found: layer.dimensions(),
        });
    }

    let data = base
        .as_raw()
        .iter()
        .zip(layer.as_raw())
        .map(|(&a, &b)| channel(a, b))
        .collect();
    PixelBuffer::from_raw(base.width(), base.height(), data)
}

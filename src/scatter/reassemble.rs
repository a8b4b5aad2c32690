//! Rebuild the inverted working canvas from a set of scattered parts

use crate::io::error::{ProcessingError, Result};
use crate::pixel::{FillMode, PixelBuffer};
use crate::scatter::grid::GridPartition;

/// Stack scattered parts back into one canvas
///
/// For each cell the first part whose block differs from the fill color wins.
/// A cell that is fill-colored in every part is left as fill, which matches
/// the source because that block's content was the fill color.
///
/// # Errors
///
/// Returns an error if no parts are given or any part is not `output_size` square
pub fn reassemble(
    parts: &[PixelBuffer],
    grid: &GridPartition,
    fill: FillMode,
) -> Result<PixelBuffer> {
    if parts.is_empty() {
        return Err(ProcessingError::InsufficientInput {
            provided: 0,
            required: 1,
        });
    }

    let size = grid.output_size();
    if let Some(part) = parts.iter().find(|part| part.dimensions() != (size, size)) {
        return Err(ProcessingError::DimensionMismatch {
            context: "scattered part",
            expected: (size, size),
            found: part.dimensions(),
        });
    }

    let block = grid.block_size();
    let mut canvas = PixelBuffer::with_fill(size, size, fill);
    for cell in grid.cells() {
        let (x, y) = grid.origin(cell);
        for part in parts {
            let tile = part.crop(x, y, block, block)?;
            if !tile.is_uniform(fill.rgb()) {
                canvas.paste(&tile, i64::from(x), i64::from(y));
                break;
            }
        }
    }

    Ok(canvas)
}

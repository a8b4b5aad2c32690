//! Scatter transform: resize, invert and redistribute blocks across canvases
//!
//! Each block keeps its grid position in whichever canvas receives it, so
//! stacking all canvases back together recovers the inverted source.

use std::path::Path;

use image::DynamicImage;
use rand::Rng;

use crate::io::configuration::{DEFAULT_BLOCK_SIZE, DEFAULT_OUTPUT_SIZE, DEFAULT_SLOT_COUNT};
use crate::io::error::{ProcessingError, Result, invalid_configuration};
use crate::io::image::load_image;
use crate::pixel::{FillMode, PixelBuffer};
use crate::scatter::assignment::AssignmentTable;
use crate::scatter::grid::GridPartition;

/// Geometry of a scatter run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatterConfig {
    /// Side length of the square working canvas and of every output
    pub output_size: u32,
    /// Side length of one block
    pub block_size: u32,
    /// Number of output canvases
    pub slot_count: usize,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            output_size: DEFAULT_OUTPUT_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }
}

/// Splits one image into `slot_count` canvases of scattered, inverted blocks
#[derive(Debug, Clone)]
pub struct ScatterSplitter {
    grid: GridPartition,
    slot_count: usize,
}

impl ScatterSplitter {
    /// Validate the configuration and build a splitter
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any size is zero or `output_size` is
    /// not a multiple of `block_size`
    pub fn new(config: ScatterConfig) -> Result<Self> {
        let grid = GridPartition::new(config.output_size, config.block_size)?;
        if config.slot_count == 0 {
            return Err(invalid_configuration(
                "slot_count",
                &config.slot_count,
                &"must be positive",
            ));
        }

        Ok(Self {
            grid,
            slot_count: config.slot_count,
        })
    }

    /// Grid the splitter partitions the working canvas into
    pub const fn grid(&self) -> &GridPartition {
        &self.grid
    }

    /// Number of output canvases produced per run
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Flatten, resize to the square working size and invert
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no pixels
    pub fn prepare(&self, source: &DynamicImage, fill: FillMode) -> Result<PixelBuffer> {
        let size = self.grid.output_size();
        let normalized = PixelBuffer::from_dynamic(source, fill)?;
        Ok(normalized.resized(size, size).inverted())
    }

    /// Run the full scatter with a fresh assignment drawn from `rng`
    ///
    /// Canvases are returned in slot order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no pixels
    pub fn split<R: Rng + ?Sized>(
        &self,
        source: &DynamicImage,
        fill: FillMode,
        rng: &mut R,
    ) -> Result<Vec<PixelBuffer>> {
        let working = self.prepare(source, fill)?;
        let assignment = AssignmentTable::shuffled(&self.grid, self.slot_count, rng)?;
        self.scatter(&working, fill, &assignment)
    }

    /// Run the full scatter with a caller-supplied assignment
    ///
    /// # Errors
    ///
    /// Returns an error if the source has no pixels or the assignment does not
    /// match this splitter's grid and slot count
    pub fn split_with_assignment(
        &self,
        source: &DynamicImage,
        fill: FillMode,
        assignment: &AssignmentTable,
    ) -> Result<Vec<PixelBuffer>> {
        self.check_assignment(assignment)?;
        let working = self.prepare(source, fill)?;
        self.scatter(&working, fill, assignment)
    }

    /// Decode an image file and scatter it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or has no pixels
    #[tracing::instrument(skip(self, rng), fields(grid_dim = self.grid.grid_dim()))]
    pub fn split_file<R: Rng + ?Sized>(
        &self,
        path: &Path,
        fill: FillMode,
        rng: &mut R,
    ) -> Result<Vec<PixelBuffer>> {
        let source = load_image(path)?;
        self.split(&source, fill, rng)
    }

    /// Distribute the blocks of a prepared working canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is not `output_size` square or the
    /// assignment does not match the grid
    pub fn scatter(
        &self,
        working: &PixelBuffer,
        fill: FillMode,
        assignment: &AssignmentTable,
    ) -> Result<Vec<PixelBuffer>> {
        self.check_assignment(assignment)?;
        let size = self.grid.output_size();
        if working.dimensions() != (size, size) {
            return Err(ProcessingError::DimensionMismatch {
                context: "scatter working canvas",
                expected: (size, size),
                found: working.dimensions(),
            });
        }

        let mut canvases: Vec<PixelBuffer> = (0..self.slot_count)
            .map(|_| PixelBuffer::with_fill(size, size, fill))
            .collect();

        let block = self.grid.block_size();
        for cell in self.grid.cells() {
            let Some(slot) = assignment.slot_for(cell) else {
                continue;
            };
            let (x, y) = self.grid.origin(cell);
            let tile = working.crop(x, y, block, block)?;
            if let Some(canvas) = canvases.get_mut(slot) {
                canvas.paste(&tile, i64::from(x), i64::from(y));
            }
        }

        tracing::debug!(
            blocks = self.grid.block_count(),
            tiles_per_slot = ?assignment.tile_counts(),
            "scattered blocks"
        );

        Ok(canvases)
    }

    fn check_assignment(&self, assignment: &AssignmentTable) -> Result<()> {
        if !assignment.matches(&self.grid) {
            let dim = self.grid.grid_dim();
            let found = assignment.grid_dim();
            return Err(ProcessingError::DimensionMismatch {
                context: "assignment table",
                expected: (dim, dim),
                found: (found, found),
            });
        }
        if assignment.slot_count() != self.slot_count {
            return Err(invalid_configuration(
                "slot_count",
                &assignment.slot_count(),
                &format!("assignment must target {} slots", self.slot_count),
            ));
        }
        Ok(())
    }
}

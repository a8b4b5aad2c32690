//! Square grid partition of the scatter canvas into fixed-size blocks
//!
//! The canvas side must be an exact multiple of the block side, so the
//! blocks never overlap and together cover every pixel.

use crate::io::error::{Result, invalid_configuration};

/// Address of one block in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Row index, counted from the top
    pub row: u32,
    /// Column index, counted from the left
    pub col: u32,
}

impl GridCell {
    /// Create a cell address
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major linear index (`row * grid_dim + col`)
    pub const fn linear_index(self, grid_dim: u32) -> usize {
        self.row as usize * grid_dim as usize + self.col as usize
    }

    /// Pixel coordinates (x, y) of the block's top-left corner
    pub const fn origin(self, block_size: u32) -> (u32, u32) {
        (self.col * block_size, self.row * block_size)
    }
}

/// Validated partition of a square canvas into `grid_dim` x `grid_dim` blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPartition {
    output_size: u32,
    block_size: u32,
    grid_dim: u32,
}

impl GridPartition {
    /// Partition a square canvas of side `output_size` into blocks of side `block_size`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either size is zero or `output_size`
    /// is not a multiple of `block_size`
    pub fn new(output_size: u32, block_size: u32) -> Result<Self> {
        if block_size == 0 {
            return Err(invalid_configuration(
                "block_size",
                &block_size,
                &"must be positive",
            ));
        }
        if output_size == 0 {
            return Err(invalid_configuration(
                "output_size",
                &output_size,
                &"must be positive",
            ));
        }
        if output_size % block_size != 0 {
            return Err(invalid_configuration(
                "output_size",
                &output_size,
                &format!("must be perfectly divisible by block_size ({block_size})"),
            ));
        }

        Ok(Self {
            output_size,
            block_size,
            grid_dim: output_size / block_size,
        })
    }

    /// Side length of the canvas in pixels
    pub const fn output_size(&self) -> u32 {
        self.output_size
    }

    /// Side length of one block in pixels
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of rows (and columns) of blocks
    pub const fn grid_dim(&self) -> u32 {
        self.grid_dim
    }

    /// Total number of blocks (`grid_dim²`)
    pub const fn block_count(&self) -> usize {
        self.grid_dim as usize * self.grid_dim as usize
    }

    /// Cell for a row-major linear index, or `None` past the last block
    pub const fn cell_at(&self, linear_index: usize) -> Option<GridCell> {
        if linear_index >= self.block_count() {
            return None;
        }
        let dim = self.grid_dim as usize;
        Some(GridCell::new(
            (linear_index / dim) as u32,
            (linear_index % dim) as u32,
        ))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let dim = self.grid_dim;
        (0..dim).flat_map(move |row| (0..dim).map(move |col| GridCell::new(row, col)))
    }

    /// Pixel origin of a cell's block
    pub const fn origin(&self, cell: GridCell) -> (u32, u32) {
        cell.origin(self.block_size)
    }
}

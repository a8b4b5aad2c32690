//! Block-to-canvas assignment for the scatter transform
//!
//! Slots are dealt round-robin over all blocks and the deal is then shuffled,
//! so every slot receives either `floor(N/K)` or `ceil(N/K)` blocks while the
//! specific mapping is unpredictable.

use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::error::{ProcessingError, Result, invalid_configuration};
use crate::scatter::grid::{GridCell, GridPartition};

/// Mapping of every grid cell to exactly one output slot
///
/// Indexed `[row, col]`; each entry is a slot in `0..slot_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable {
    slots: Array2<usize>,
    slot_count: usize,
}

impl AssignmentTable {
    /// Deal slots `0, 1, ..., K-1, 0, 1, ...` over the cells in row-major order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `slot_count` is zero
    pub fn round_robin(grid: &GridPartition, slot_count: usize) -> Result<Self> {
        let sequence = Self::round_robin_sequence(grid, slot_count)?;
        Self::from_sequence(grid, slot_count, sequence)
    }

    /// Round-robin deal followed by a uniform shuffle drawn from `rng`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `slot_count` is zero
    pub fn shuffled<R: Rng + ?Sized>(
        grid: &GridPartition,
        slot_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut sequence = Self::round_robin_sequence(grid, slot_count)?;
        sequence.shuffle(rng);
        Self::from_sequence(grid, slot_count, sequence)
    }

    /// Build a table from an explicit row-major slot sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence length differs from the block count or
    /// any entry is not a valid slot
    pub fn from_sequence(
        grid: &GridPartition,
        slot_count: usize,
        sequence: Vec<usize>,
    ) -> Result<Self> {
        if slot_count == 0 {
            return Err(invalid_configuration(
                "slot_count",
                &slot_count,
                &"must be positive",
            ));
        }
        if let Some(bad) = sequence.iter().find(|&&slot| slot >= slot_count) {
            return Err(invalid_configuration(
                "assignment",
                bad,
                &format!("slot index must be below {slot_count}"),
            ));
        }

        let dim = grid.grid_dim() as usize;
        let found = sequence.len();
        let slots = Array2::from_shape_vec((dim, dim), sequence).map_err(|_shape_error| {
            ProcessingError::DimensionMismatch {
                context: "assignment sequence",
                expected: (grid.block_count() as u32, 1),
                found: (found as u32, 1),
            }
        })?;

        Ok(Self { slots, slot_count })
    }

    fn round_robin_sequence(grid: &GridPartition, slot_count: usize) -> Result<Vec<usize>> {
        if slot_count == 0 {
            return Err(invalid_configuration(
                "slot_count",
                &slot_count,
                &"must be positive",
            ));
        }
        Ok((0..grid.block_count())
            .map(|index| index % slot_count)
            .collect())
    }

    /// Number of output slots
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of rows (and columns) of the table
    pub fn grid_dim(&self) -> u32 {
        self.slots.nrows() as u32
    }

    /// Slot assigned to a cell, or `None` outside the grid
    pub fn slot_for(&self, cell: GridCell) -> Option<usize> {
        self.slots
            .get((cell.row as usize, cell.col as usize))
            .copied()
    }

    /// Number of blocks assigned to each slot
    pub fn tile_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.slot_count];
        for &slot in &self.slots {
            if let Some(count) = counts.get_mut(slot) {
                *count += 1;
            }
        }
        counts
    }

    /// Cells assigned to `slot`, in row-major order
    pub fn cells_in_slot(&self, slot: usize) -> Vec<GridCell> {
        self.slots
            .indexed_iter()
            .filter(|&(_, &assigned)| assigned == slot)
            .map(|((row, col), _)| GridCell::new(row as u32, col as u32))
            .collect()
    }

    /// Whether this table has the shape of `grid` and can drive a scatter over it
    pub fn matches(&self, grid: &GridPartition) -> bool {
        self.slots.dim() == (grid.grid_dim() as usize, grid.grid_dim() as usize)
    }
}

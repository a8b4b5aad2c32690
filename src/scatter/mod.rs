//! Block scatter transform
//!
//! This module contains:
//! - Grid partitioning of the square working canvas
//! - Balanced, shuffled block-to-canvas assignment
//! - The splitter that inverts and redistributes blocks
//! - Reassembly of scattered parts

/// Balanced random assignment of blocks to output canvases
pub mod assignment;
/// Grid partition and cell addressing
pub mod grid;
/// Reassembly of scattered parts into one canvas
pub mod reassemble;
/// Resize, invert and scatter pipeline
pub mod splitter;

pub use assignment::AssignmentTable;
pub use grid::{GridCell, GridPartition};
pub use splitter::{ScatterConfig, ScatterSplitter};

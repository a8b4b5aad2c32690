//! Processing constants and runtime configuration defaults

// Scatter geometry; the output side must stay a multiple of the block side
/// Side length in pixels of the square scatter canvas
pub const DEFAULT_OUTPUT_SIZE: u32 = 3072;
/// Side length in pixels of one scattered block
pub const DEFAULT_BLOCK_SIZE: u32 = 32;
/// Number of output canvases the blocks are distributed across
pub const DEFAULT_SLOT_COUNT: usize = 9;

/// Minimum number of images the compositor accepts
pub const MIN_BLEND_INPUTS: usize = 2;

// Output settings
/// Prefix of split part file names (`part_1.png`, `part_2.png`, ...)
pub const PART_FILE_PREFIX: &str = "part_";
/// Extension used when the caller supplies none
pub const DEFAULT_EXTENSION: &str = "png";
/// File extensions accepted when expanding an input directory
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

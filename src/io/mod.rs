//! Input/output, configuration and error handling

/// Command-line parsing and command execution
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Decoding and saving image files
pub mod image;
/// Terminal progress reporting
pub mod progress;

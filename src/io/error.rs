//! Error types for splitting, compositing and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all processing operations
#[derive(Debug)]
pub enum ProcessingError {
    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A decoded image cannot be processed
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Fewer inputs than the operation requires
    InsufficientInput {
        /// Number of inputs supplied
        provided: usize,
        /// Minimum number of inputs required
        required: usize,
    },

    /// Configuration value failed validation
    ///
    /// Raised when a splitter is constructed, before any image is touched.
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Requested region lies partly outside a buffer
    RegionOutOfBounds {
        /// Region as (x, y, width, height)
        region: (u32, u32, u32, u32),
        /// Buffer dimensions (width, height)
        dimensions: (u32, u32),
    },

    /// Two buffers or tables that must agree in shape do not
    DimensionMismatch {
        /// What was being compared
        context: &'static str,
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Dimensions actually found
        found: (u32, u32),
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InsufficientInput { provided, required } => {
                write!(
                    f,
                    "Insufficient input: {provided} image(s) supplied, at least {required} required"
                )
            }
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::RegionOutOfBounds { region, dimensions } => {
                write!(
                    f,
                    "Region {}x{} at ({}, {}) exceeds buffer of size {}x{}",
                    region.2, region.3, region.0, region.1, dimensions.0, dimensions.1
                )
            }
            Self::DimensionMismatch {
                context,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {context}: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for processing results
pub type Result<T> = std::result::Result<T, ProcessingError>;

impl From<image::ImageError> for ProcessingError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ProcessingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ProcessingError {
    ProcessingError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> ProcessingError {
    ProcessingError::InvalidInput {
        reason: reason.to_string(),
    }
}

impl ProcessingError {
    /// Whether the error belongs to the configuration class
    ///
    /// Configuration errors are fatal at startup: no operation may proceed.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Whether the error was caused by the caller's input images
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::ImageLoad { .. } | Self::InvalidInput { .. } | Self::InsufficientInput { .. }
        )
    }
}

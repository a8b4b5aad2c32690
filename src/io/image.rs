//! Image decoding and persistence for split parts and composites

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::io::configuration::{DEFAULT_EXTENSION, PART_FILE_PREFIX, SUPPORTED_EXTENSIONS};
use crate::io::error::{ProcessingError, Result};
use crate::pixel::PixelBuffer;

/// Decode an image file, keeping the path in any error
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not a decodable image
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| ProcessingError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode a buffer to `path`, format chosen by the extension
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or encoding fails
pub fn save_buffer(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ProcessingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .as_rgb()
        .save(path)
        .map_err(|e| ProcessingError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// File name of the part at zero-based `index` (`part_1.png` for index 0)
pub fn part_file_name(index: usize) -> String {
    format!("{PART_FILE_PREFIX}{}.{DEFAULT_EXTENSION}", index + 1)
}

/// Path of the part at zero-based `index` inside `output_dir`
pub fn part_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(part_file_name(index))
}

/// Append the default extension when `path` has none
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Whether `path` carries one of the accepted image extensions
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Save scattered parts as `part_1.png` ... `part_K.png` in `output_dir`
///
/// The directory is created if missing. `on_saved` is called after each file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any part fails to save
pub fn save_parts(
    parts: &[PixelBuffer],
    output_dir: &Path,
    mut on_saved: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| ProcessingError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut written = Vec::with_capacity(parts.len());
    for (index, part) in parts.iter().enumerate() {
        let path = part_path(output_dir, index);
        save_buffer(part, &path)?;
        on_saved(&path);
        written.push(path);
    }
    Ok(written)
}

/// Load `count` parts named `part_1.png` ... from `input_dir`
///
/// # Errors
///
/// Returns an error naming the first part that is missing or cannot be decoded
pub fn load_parts(input_dir: &Path, count: usize) -> Result<Vec<DynamicImage>> {
    (0..count)
        .map(|index| load_image(&part_path(input_dir, index)))
        .collect()
}

/// Expand inputs into image files
///
/// Files are kept as given. A directory contributes its files with a supported
/// extension, sorted by name.
///
/// # Errors
///
/// Returns an error if a directory cannot be read
pub fn collect_image_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = std::fs::read_dir(input).map_err(|e| ProcessingError::FileSystem {
                path: input.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut found = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| ProcessingError::FileSystem {
                        path: input.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.is_file() && has_supported_extension(&path) {
                    found.push(path);
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

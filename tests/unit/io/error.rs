//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use scatterblend::ProcessingError;
    use scatterblend::io::error::{invalid_configuration, invalid_input};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ProcessingError::FileSystem {
            path: "/tmp/parts".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("/tmp/parts"));
    }

    // Tests ImageLoad error names the file and keeps the decoder error
    // Verified by omitting the path from the message
    #[test]
    fn test_image_load_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let error = ProcessingError::ImageLoad {
            path: PathBuf::from("inputs/photo.jpg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("inputs/photo.jpg"));
        assert!(message.contains("no such file"));
        assert!(error.source().is_some());
        assert!(error.is_input());
    }

    // Tests InsufficientInput reports both counts
    // Verified by omitting the required count
    #[test]
    fn test_insufficient_input_error() {
        let error = ProcessingError::InsufficientInput {
            provided: 1,
            required: 2,
        };
        let message = error.to_string();
        assert!(message.contains("1 image"));
        assert!(message.contains("at least 2"));
        assert!(error.source().is_none());
    }

    // Tests configuration error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_configuration_error() {
        let error = invalid_configuration("output_size", &100, &"must be divisible by 32");
        let message = error.to_string();
        assert!(message.contains("output_size"));
        assert!(message.contains("100"));
        assert!(message.contains("must be divisible by 32"));
        assert!(error.is_configuration());
    }

    // Tests region and dimension errors format their geometry
    // Verified by swapping width and height in the message
    #[test]
    fn test_geometry_errors() {
        let region = ProcessingError::RegionOutOfBounds {
            region: (6, 0, 4, 2),
            dimensions: (8, 8),
        };
        assert!(region.to_string().contains("4x2 at (6, 0)"));
        assert!(region.to_string().contains("8x8"));

        let mismatch = ProcessingError::DimensionMismatch {
            context: "blend combine",
            expected: (3, 2),
            found: (2, 3),
        };
        let message = mismatch.to_string();
        assert!(message.contains("blend combine"));
        assert!(message.contains("expected 3x2, found 2x3"));
    }

    // Tests conversions from library errors
    // Verified by mapping io errors to ImageLoad
    #[test]
    fn test_from_conversions() {
        let io_error = std::io::Error::other("disk full");
        assert!(matches!(
            ProcessingError::from(io_error),
            ProcessingError::FileSystem { .. }
        ));

        let image_error = image::ImageError::IoError(std::io::Error::other("truncated"));
        assert!(matches!(
            ProcessingError::from(image_error),
            ProcessingError::ImageLoad { .. }
        ));

        let input = invalid_input(&"image has no pixels");
        assert!(input.to_string().contains("image has no pixels"));
    }
}

//! Tests for error messages, source chaining and fatal classification

#[cfg(test)]
mod tests {
    use quadcolor::QuadrantError;
    use quadcolor::analysis::quadrants::PixelRect;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests open failures name the file and chain the I/O error
    // Verified by omitting the path from the message
    #[test]
    fn test_image_open_error() {
        let error = QuadrantError::ImageOpen {
            path: PathBuf::from("photos/missing.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };

        let message = error.to_string();
        assert!(message.contains("photos/missing.jpg"));
        assert!(message.contains("file not found"));
        assert!(error.source().is_some());
        assert!(!error.is_fatal());
    }

    // Tests degenerate images report their dimensions
    // Verified by omitting dimensions from the message
    #[test]
    fn test_degenerate_image_error() {
        let error = QuadrantError::DegenerateImage {
            path: PathBuf::from("line.png"),
            width: 1,
            height: 40,
        };

        let message = error.to_string();
        assert!(message.contains("line.png"));
        assert!(message.contains("1x40"));
        assert!(error.source().is_none());
    }

    // Tests empty region errors describe the bounds
    // Verified by printing the rect with Debug formatting
    #[test]
    fn test_empty_region_error() {
        let error = QuadrantError::EmptyRegion {
            rect: PixelRect::new(0, 0, 0, 3),
        };

        assert!(error.to_string().contains("[0, 0) x [0, 3)"));
        assert!(!error.is_fatal());
    }

    // Tests output and serialization failures end the run
    // Verified by classifying serialization errors as per-image
    #[test]
    fn test_fatal_errors() {
        let create = QuadrantError::OutputCreate {
            path: PathBuf::from("/read-only/output.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let write = QuadrantError::OutputWrite {
            source: std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"),
        };
        let serialization: QuadrantError = serde_json::from_str::<u8>("nope").unwrap_err().into();

        assert!(create.is_fatal());
        assert!(write.is_fatal());
        assert!(serialization.is_fatal());
        assert!(create.to_string().contains("/read-only/output.json"));
        assert!(serialization.source().is_some());
    }

    // Tests per-image errors are not fatal
    // Verified by marking decode errors fatal
    #[test]
    fn test_per_image_errors() {
        let decode = QuadrantError::ImageDecode {
            path: PathBuf::from("broken.png"),
            source: image::ImageError::IoError(std::io::Error::other("truncated")),
        };
        let out_of_bounds = QuadrantError::RegionOutOfBounds {
            x: 5,
            y: 0,
            width: 5,
            height: 5,
        };

        assert!(!decode.is_fatal());
        assert!(!out_of_bounds.is_fatal());
        assert!(decode.to_string().contains("broken.png"));
        assert!(out_of_bounds.to_string().contains("(5, 0)"));
    }
}

//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::io::error::{configuration_error, parse_error};
    use std::error::Error;

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    #[test]
    fn test_configuration_error_message() {
        let error = configuration_error("scale", &-3, &"scale factor cannot be less than 1");

        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("-3"));
        assert!(message.contains("cannot be less than 1"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let error = MosaicError::DimensionMismatch {
            context: "mosaic rendering",
            expected: (2, 3),
            found: (4, 5),
        };

        let message = error.to_string();
        assert!(message.contains("mosaic rendering"));
        assert!(message.contains("2x3"));
        assert!(message.contains("4x5"));
    }

    #[test]
    fn test_parse_error_message() {
        let error = parse_error("bricks.csv", 7, &"expected height,width");
        assert_eq!(
            error.to_string(),
            "Failed to parse bricks.csv line 7: expected height,width"
        );
    }

    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = MosaicError::ImageExport {
            path: PathBuf::from("/readonly/out.png"),
            source: image_error,
        };

        assert!(error.to_string().contains("/readonly/out.png"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let error: MosaicError = std::io::Error::other("boom").into();
        assert!(matches!(error, MosaicError::FileSystem { .. }));
    }
}

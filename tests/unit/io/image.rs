//! Tests for image loading, PNG export and text output

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::io::image::{is_supported_image, load_rgb_image, save_png, save_text};
    use image::{Rgb, RgbImage};
    use std::path::Path;

    // Saved PNGs load back with identical pixels, nested directories created
    #[test]
    fn test_save_and_load_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("nested").join("out.png");
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 80, y as u8 * 120, 7]));

        assert!(save_png(&img, &path).is_ok());
        assert!(path.exists());

        let Ok(loaded) = load_rgb_image(&path) else {
            unreachable!("Saved image should load");
        };
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_rgb_image(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(MosaicError::ImageLoad { .. })));
    }

    #[test]
    fn test_save_text() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("out").join("Instructions.txt");

        assert!(save_text("For a total of 0 bricks.\n", &path).is_ok());
        let Ok(content) = std::fs::read_to_string(&path) else {
            unreachable!("Written file should be readable");
        };
        assert_eq!(content, "For a total of 0 bricks.\n");
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}

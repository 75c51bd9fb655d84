//! Tests for conversion constants and bundled data

#[cfg(test)]
mod tests {
    use brickmosaic::io::configuration::{
        DEFAULT_CATALOG_CSV, DEFAULT_PALETTE_CSV, DEFAULT_SCALE, INSTRUCTIONS_SUFFIX,
        MAX_INDIVIDUAL_PROGRESS_BARS, MOSAIC_SUFFIX, OUTLINE_THRESHOLD, SUPPORTED_EXTENSIONS,
    };

    #[test]
    fn test_default_scale() {
        assert_eq!(DEFAULT_SCALE, 8);
    }

    #[test]
    fn test_outline_threshold() {
        assert!((OUTLINE_THRESHOLD - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_output_suffixes() {
        assert_eq!(INSTRUCTIONS_SUFFIX, "Instructions.txt");
        assert_eq!(MOSAIC_SUFFIX, "Mosaic.png");
    }

    #[test]
    fn test_png_supported() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
    }

    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // The bundled catalog ends with the unit piece so coverage is total
    #[test]
    fn test_bundled_data_present() {
        assert!(DEFAULT_PALETTE_CSV.lines().count() > 1);
        assert_eq!(
            DEFAULT_CATALOG_CSV.lines().map(str::trim).next_back(),
            Some("1,1")
        );
    }
}

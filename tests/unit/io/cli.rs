//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::io::cli::{Cli, FileProcessor};
    use brickmosaic::io::configuration::DEFAULT_SCALE;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    fn write_image(path: &Path) {
        let img = RgbImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([250, 250, 250])
            } else {
                Rgb([200, 20, 10])
            }
        });
        assert!(img.save(path).is_ok(), "test image should save");
    }

    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.scale, i64::from(DEFAULT_SCALE));
        assert!(cli.palette.is_none());
        assert!(cli.catalog.is_none());
        assert!(cli.output_dir.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "input.png",
            "--scale",
            "4",
            "--palette",
            "colors.csv",
            "--catalog",
            "bricks.csv",
            "--output-dir",
            "out",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.scale, 4);
        assert_eq!(cli.palette, Some(PathBuf::from("colors.csv")));
        assert_eq!(cli.catalog, Some(PathBuf::from("bricks.csv")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "test.png", "-s", "2", "-q", "-n", "-o", "dir"]);
        assert_eq!(cli.scale, 2);
        assert!(cli.quiet);
        assert!(cli.no_skip);
        assert_eq!(cli.output_dir, Some(PathBuf::from("dir")));
    }

    // Zero and negative scales are configuration errors
    #[test]
    fn test_invalid_scale_rejected() {
        for scale in ["0", "-3"] {
            let cli = Cli::parse_from(["program", "test.png", "--scale", scale]);
            assert!(matches!(
                cli.renderer(),
                Err(MosaicError::Configuration { .. })
            ));
        }

        let cli = Cli::parse_from(["program", "test.png", "--scale", "3"]);
        assert!(cli.renderer().is_ok_and(|renderer| renderer.scale() == 3));
    }

    #[test]
    fn test_builtin_configuration() {
        let cli = Cli::parse_from(["program", "test.png"]);
        assert!(cli.load_palette().is_ok());
        assert!(cli.load_catalog().is_ok_and(|catalog| catalog.contains_unit()));
    }

    #[test]
    fn test_process_single_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let input = dir.path().join("checker.png");
        write_image(&input);

        let cli = Cli::parse_from([
            "program",
            &*input.to_string_lossy(),
            "--scale",
            "2",
            "--quiet",
        ]);
        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_ok());

        let mosaic_path = dir.path().join("checkerMosaic.png");
        let instructions_path = dir.path().join("checkerInstructions.txt");
        assert_eq!(processor.mosaic_path(&input), mosaic_path);
        assert_eq!(processor.instructions_path(&input), instructions_path);

        let Ok(mosaic) = image::open(&mosaic_path) else {
            unreachable!("Mosaic should be written");
        };
        assert_eq!((mosaic.width(), mosaic.height()), (8, 6));

        let Ok(text) = std::fs::read_to_string(&instructions_path) else {
            unreachable!("Instructions should be written");
        };
        assert!(text.starts_with("To complete this, you will need:\n"));
        assert!(text.ends_with("For a total of 12 bricks.\n"));
    }

    // Directory mode skips generated mosaics and existing outputs
    #[test]
    fn test_process_directory_with_output_dir() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let out = dir.path().join("out");
        write_image(&dir.path().join("a.png"));
        write_image(&dir.path().join("b.png"));
        assert!(std::fs::write(dir.path().join("notes.txt"), "ignored").is_ok());

        let args = |extra: &[&str]| {
            let mut args = vec![
                "program".to_string(),
                dir.path().to_string_lossy().into_owned(),
                "--output-dir".to_string(),
                out.to_string_lossy().into_owned(),
                "--quiet".to_string(),
            ];
            args.extend(extra.iter().map(ToString::to_string));
            Cli::parse_from(args)
        };

        assert!(FileProcessor::new(args(&[])).process().is_ok());
        assert!(out.join("aMosaic.png").exists());
        assert!(out.join("bInstructions.txt").exists());
        assert!(!out.join("notesMosaic.png").exists());

        // Second run finds nothing new to do
        assert!(FileProcessor::new(args(&[])).process().is_ok());
        assert!(FileProcessor::new(args(&["--no-skip"])).process().is_ok());
    }

    #[test]
    fn test_missing_target() {
        let cli = Cli::parse_from(["program", "definitely/missing/target", "--quiet"]);
        let result = FileProcessor::new(cli).process();
        assert!(matches!(result, Err(MosaicError::Configuration { .. })));
    }

    #[test]
    fn test_unsupported_target_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let input = dir.path().join("notes.txt");
        assert!(std::fs::write(&input, "text").is_ok());

        let cli = Cli::parse_from(["program", &*input.to_string_lossy(), "--quiet"]);
        assert!(FileProcessor::new(cli).process().is_err());
    }

    // Bad configuration fails before any image is read
    #[test]
    fn test_configuration_checked_first() {
        let cli = Cli::parse_from([
            "program",
            "definitely/missing/target.png",
            "--scale",
            "0",
            "--quiet",
        ]);
        let result = FileProcessor::new(cli).process();
        match result {
            Err(MosaicError::Configuration { parameter, .. }) => assert_eq!(parameter, "scale"),
            _ => unreachable!("Expected scale configuration error"),
        }
    }
}

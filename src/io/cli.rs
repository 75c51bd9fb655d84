//! Command-line interface for batch converting images into brick mosaics

use crate::algorithm::catalog::PieceCatalog;
use crate::algorithm::executor::MosaicConverter;
use crate::io::configuration::{DEFAULT_SCALE, INSTRUCTIONS_SUFFIX, MOSAIC_SUFFIX};
use crate::io::data::{default_catalog, default_palette, load_catalog, load_palette};
use crate::io::error::{Result, configuration_error};
use crate::io::image::{is_supported_image, load_rgb_image, save_png, save_text};
use crate::io::progress::ProgressManager;
use crate::io::render::MosaicRenderer;
use crate::palette::Palette;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "brickmosaic")]
#[command(
    author,
    version,
    about = "Convert images into brick mosaics with a bill of materials"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output pixels per source pixel
    #[arg(short, long, default_value_t = i64::from(DEFAULT_SCALE), allow_negative_numbers = true)]
    pub scale: i64,

    /// Palette file (`id,name,rrggbb` records); built-in colors if omitted
    #[arg(long, value_name = "CSV")]
    pub palette: Option<PathBuf>,

    /// Piece catalog file (`height,width` records in attempt order); built-in sizes if omitted
    #[arg(long, value_name = "CSV")]
    pub catalog: Option<PathBuf>,

    /// Directory for outputs; defaults to each input's directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated renderer for the requested scale
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the scale is below 1 or too large
    pub fn renderer(&self) -> Result<MosaicRenderer> {
        let scale = u32::try_from(self.scale).map_err(|_out_of_range| {
            configuration_error(
                "scale",
                &self.scale,
                &"scale factor must be between 1 and 2^32-1",
            )
        })?;
        MosaicRenderer::with_scale(scale)
    }

    /// Palette from `--palette` or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be loaded or is empty
    pub fn load_palette(&self) -> Result<Palette> {
        self.palette
            .as_deref()
            .map_or_else(default_palette, load_palette)
    }

    /// Catalog from `--catalog` or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is empty
    pub fn load_catalog(&self) -> Result<PieceCatalog> {
        self.catalog
            .as_deref()
            .map_or_else(default_catalog, load_catalog)
    }
}

// Rendered mosaics sit next to their inputs and must not be converted again
fn is_generated_mosaic(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MOSAIC_SUFFIX))
}

/// Orchestrates batch conversion with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Palette, catalog and scale are validated before any image is read.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        let renderer = self.cli.renderer()?;
        let palette = self.cli.load_palette()?;
        let catalog = self.cli.load_catalog()?;

        if !catalog.contains_unit() {
            tracing::warn!(
                pieces = catalog.len(),
                "Catalog has no 1x1 piece; some cells may stay uncovered"
            );
        }

        let converter = MosaicConverter::new(&palette, &catalog, renderer);
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "Nothing to convert");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&converter, file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(configuration_error(
                    "target",
                    &target.display(),
                    &"target file must be a supported image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_generated_mosaic(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(configuration_error(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.mosaic_path(input_path);
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "Skipping (output exists)");
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        converter: &MosaicConverter<'_>,
        input_path: &Path,
        index: usize,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, converter.catalog().len());
        }

        let source = load_rgb_image(input_path)?;

        let mosaic = {
            let progress = &mut self.progress_manager;
            converter.convert_with_progress(&source, |piece_index, _spec| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_piece(index, piece_index);
                }
            })?
        };

        let uncovered = mosaic.tiling.uncovered_count();
        if uncovered > 0 {
            tracing::warn!(
                input = %input_path.display(),
                uncovered,
                "Tiling left cells without a piece"
            );
        }

        let instructions_path = self.instructions_path(input_path);
        save_text(&mosaic.bill.instructions(), &instructions_path)?;
        tracing::info!(path = %instructions_path.display(), "Instructions saved");

        let mosaic_path = self.mosaic_path(input_path);
        save_png(&mosaic.image, &mosaic_path)?;
        tracing::info!(
            path = %mosaic_path.display(),
            pieces = mosaic.bill.total(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "Mosaic saved"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn output_path(&self, input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}", stem.to_string_lossy());

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }

    /// Where the bill of materials for `input_path` is written
    pub fn instructions_path(&self, input_path: &Path) -> PathBuf {
        self.output_path(input_path, INSTRUCTIONS_SUFFIX)
    }

    /// Where the rendered mosaic for `input_path` is written
    pub fn mosaic_path(&self, input_path: &Path) -> PathBuf {
        self.output_path(input_path, MOSAIC_SUFFIX)
    }
}

//! Conversion constants and runtime configuration defaults

/// Default edge length in output pixels of one source pixel
pub const DEFAULT_SCALE: u32 = 8;

// Colors closer than this to black get a white outline
/// Distance to black below which outlines are drawn white
pub const OUTLINE_THRESHOLD: f64 = 100.0;

// Output settings
/// Suffix added to the bill of materials filename
pub const INSTRUCTIONS_SUFFIX: &str = "Instructions.txt";
/// Suffix added to the rendered mosaic filename
pub const MOSAIC_SUFFIX: &str = "Mosaic.png";

/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Built-in palette, `id,name,rrggbb[,is_trans]` per line
pub const DEFAULT_PALETTE_CSV: &str = include_str!("../../data/colors.csv");

/// Built-in piece catalog, `height,width` per line in attempt order
pub const DEFAULT_CATALOG_CSV: &str = include_str!("../../data/bricks.csv");

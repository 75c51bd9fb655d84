//! Image file loading and PNG export

use std::path::Path;

use image::RgbImage;

use crate::io::error::{MosaicError, Result};

/// Load an image file and flatten it to 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save an RGB image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(img: &RgbImage, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Write instructions text, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn save_text(text: &str, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, text).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })
}

/// Whether the path has an extension the loader handles
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            crate::io::configuration::SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

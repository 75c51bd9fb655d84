//! Error types for mosaic conversion and its file collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Palette, catalog or renderer configuration is unusable
    ///
    /// Raised before any grid work begins: empty palette, empty catalog,
    /// zero-sized piece or a scale factor below one.
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two grids that must share dimensions disagree
    DimensionMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Expected dimensions (rows, cols)
        expected: (usize, usize),
        /// Dimensions actually found (rows, cols)
        found: (usize, usize),
    },

    /// Palette or catalog data could not be parsed
    DataParse {
        /// File name or label of the data source
        source_name: String,
        /// One-based line number of the offending record
        line: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::DimensionMismatch {
                context,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {context}: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::DataParse {
                source_name,
                line,
                reason,
            } => {
                write!(f, "Failed to parse {source_name} line {line}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a data parse error
pub fn parse_error(source_name: &str, line: usize, reason: &impl ToString) -> MosaicError {
    MosaicError::DataParse {
        source_name: source_name.to_string(),
        line,
        reason: reason.to_string(),
    }
}

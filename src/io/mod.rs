//! File collaborators and the command-line shell around the conversion core

/// Command-line parsing and batch file processing
pub mod cli;
/// Compile-time defaults and bundled data
pub mod configuration;
/// Palette and catalog record parsing
pub mod data;
/// Error types shared across the crate
pub mod error;
/// Image loading and saving
pub mod image;
/// Progress bars for batch conversions
pub mod progress;
/// Scaled outlined mosaic rendering
pub mod render;

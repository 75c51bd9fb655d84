//! Brick mosaic generation from raster images
//!
//! Pixels are quantized to the nearest color of an ordered palette, the
//! quantized grid is covered greedily with rectangular pieces from an ordered
//! catalog, and the result is counted into a bill of materials and rendered
//! as a scaled image with outlined pieces.

#![forbid(unsafe_code)]

/// Piece catalog, greedy tiling and the conversion pipeline
pub mod algorithm;
/// Bill of materials over placed pieces
pub mod analysis;
/// Input/output, rendering and error handling
pub mod io;
/// Color values and nearest-color palettes
pub mod palette;
/// Pixel and occupancy grids
pub mod spatial;

pub use io::error::{MosaicError, Result};

//! Spatial data structures for one conversion run
//!
//! This module contains:
//! - The quantized pixel grid
//! - The occupancy arena tracking covered cells

/// Pixel and occupancy grids
pub mod grid;

pub use grid::{OccupancyGrid, PixelGrid};

//! Color value type and the ordered reference palette

/// RGB color value type, distance and hex parsing
pub mod color;
/// Palette entries and nearest-color quantization
pub mod nearest;

pub use color::Color;
pub use nearest::{Palette, PaletteEntry, nearest_color};

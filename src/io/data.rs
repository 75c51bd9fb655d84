//! Palette and piece catalog loading from comma-separated records
//!
//! Palette records are `id,name,rrggbb[,extra...]`; a first row with a
//! non-numeric id and a non-hex color field is taken as a header and
//! skipped. Catalog records are `height,width` in attempt order. Blank
//! lines and `#` comments are ignored in both.

use std::path::Path;

use crate::algorithm::catalog::{PieceCatalog, PieceSpec};
use crate::io::configuration::{DEFAULT_CATALOG_CSV, DEFAULT_PALETTE_CSV};
use crate::io::error::{MosaicError, Result, parse_error};
use crate::palette::{Color, Palette, PaletteEntry};

fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| (number, line.split(',').map(str::trim).collect()))
}

/// Parse palette records
///
/// # Errors
///
/// Returns a parse error for records with fewer than three fields or an
/// invalid color, and a configuration error if no colors remain
pub fn parse_palette(text: &str, source_name: &str) -> Result<Palette> {
    let mut entries = Vec::new();

    for (position, (line, fields)) in records(text).enumerate() {
        let [id, name, hex, ..] = fields.as_slice() else {
            return Err(parse_error(
                source_name,
                line,
                &format!("expected id,name,rgb but found {} fields", fields.len()),
            ));
        };

        let numeric_id = id.parse::<u32>().ok();
        let color = match hex.parse::<Color>() {
            Ok(color) => color,
            // Only a leading record without a numeric id reads as a header
            Err(_) if position == 0 && numeric_id.is_none() => continue,
            Err(err) => return Err(parse_error(source_name, line, &err)),
        };

        if name.is_empty() {
            return Err(parse_error(source_name, line, &"color name is empty"));
        }

        let mut entry = PaletteEntry::new(*name, color);
        entry.id = numeric_id;
        entries.push(entry);
    }

    Palette::new(entries)
}

/// Parse catalog records
///
/// # Errors
///
/// Returns a parse error for malformed records, and a configuration error
/// for zero dimensions or an empty catalog
pub fn parse_catalog(text: &str, source_name: &str) -> Result<PieceCatalog> {
    let mut pieces = Vec::new();

    for (line, fields) in records(text) {
        let [height, width] = fields.as_slice() else {
            return Err(parse_error(
                source_name,
                line,
                &format!("expected height,width but found {} fields", fields.len()),
            ));
        };
        let dimension = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|err| parse_error(source_name, line, &format!("'{value}': {err}")))
        };
        pieces.push(PieceSpec::new(dimension(*height)?, dimension(*width)?)?);
    }

    PieceCatalog::new(pieces)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })
}

/// Load a palette file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_palette(path: &Path) -> Result<Palette> {
    parse_palette(&read_source(path)?, &path.display().to_string())
}

/// Load a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_catalog(path: &Path) -> Result<PieceCatalog> {
    parse_catalog(&read_source(path)?, &path.display().to_string())
}

/// Palette bundled with the crate
///
/// # Errors
///
/// Returns an error only if the bundled data is malformed
pub fn default_palette() -> Result<Palette> {
    parse_palette(DEFAULT_PALETTE_CSV, "built-in palette")
}

/// Catalog bundled with the crate
///
/// # Errors
///
/// Returns an error only if the bundled data is malformed
pub fn default_catalog() -> Result<PieceCatalog> {
    parse_catalog(DEFAULT_CATALOG_CSV, "built-in catalog")
}

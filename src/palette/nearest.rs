//! Ordered reference palette and nearest-color quantization

use crate::io::error::{Result, configuration_error};
use crate::palette::color::Color;

/// A named palette color with optional catalog identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display name used in the bill of materials
    pub name: String,
    /// Reference RGB value
    pub color: Color,
    /// Catalog identifier from the source data, when numeric
    pub id: Option<u32>,
}

impl PaletteEntry {
    /// Create an entry without a catalog identifier
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            id: None,
        }
    }

    /// Attach a catalog identifier
    #[must_use]
    pub const fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Index of the entry nearest to `color` in RGB space
///
/// Scans in order and only replaces the best candidate on a strictly smaller
/// distance, so the first of several equidistant entries wins.
/// Returns `None` for an empty slice.
pub fn nearest_color(entries: &[PaletteEntry], color: Color) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, entry) in entries.iter().enumerate() {
        let distance = entry.color.distance_squared(color);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Immutable, non-empty, ordered set of reference colors
///
/// The first entry is held apart from the rest so that lookups never need
/// an emptiness check.
#[derive(Debug, Clone)]
pub struct Palette {
    first: PaletteEntry,
    rest: Vec<PaletteEntry>,
}

impl Palette {
    /// Build a palette, preserving entry order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `entries` is empty
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        let mut entries = entries.into_iter();
        let Some(first) = entries.next() else {
            return Err(configuration_error(
                "palette",
                &"[]",
                &"palette must contain at least one color",
            ));
        };
        Ok(Self {
            first,
            rest: entries.collect(),
        })
    }

    /// Entries in load order
    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false; kept for API symmetry with `len`
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        match index.checked_sub(1) {
            None => Some(&self.first),
            Some(rest_index) => self.rest.get(rest_index),
        }
    }

    /// Index and entry nearest to `color`, first in palette order on ties
    fn nearest_entry(&self, color: Color) -> (usize, &PaletteEntry) {
        let first_distance = self.first.color.distance_squared(color);
        let (index, entry, _) = self.rest.iter().enumerate().fold(
            (0, &self.first, first_distance),
            |best, (offset, entry)| {
                let distance = entry.color.distance_squared(color);
                if distance < best.2 {
                    (offset + 1, entry, distance)
                } else {
                    best
                }
            },
        );
        (index, entry)
    }

    /// Index of the nearest entry to `color`
    pub fn nearest_index(&self, color: Color) -> usize {
        self.nearest_entry(color).0
    }

    /// Nearest entry to `color`, first in palette order on ties
    pub fn nearest(&self, color: Color) -> &PaletteEntry {
        self.nearest_entry(color).1
    }

    /// First index whose RGB equals the entry at `index`
    ///
    /// `nearest_index` only ever returns canonical indices, so grids built
    /// from canonical indices compare colors by index.
    pub fn canonical_index(&self, index: usize) -> Option<usize> {
        let color = self.get(index)?.color;
        self.entries().position(|entry| entry.color == color)
    }
}

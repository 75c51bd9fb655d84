//! Bill of materials: placed pieces counted by color and size

use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::catalog::PieceSpec;
use crate::algorithm::tiling::PlacedPiece;
use crate::palette::Palette;

/// Grouping key for counting pieces
///
/// Ordered by palette position, then short side, then long side, which
/// fixes the line order of the rendered instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickKey {
    /// Canonical palette index
    pub color: usize,
    /// Shorter side
    pub short: usize,
    /// Longer side
    pub long: usize,
}

impl BrickKey {
    /// Key for a placed piece, independent of its orientation
    pub fn of(piece: &PlacedPiece) -> Self {
        Self {
            color: piece.color,
            short: piece.height.min(piece.width),
            long: piece.height.max(piece.width),
        }
    }
}

/// One counted line of the bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    /// Number of pieces
    pub count: usize,
    /// Palette color name
    pub color_name: String,
    /// Shorter side
    pub short: usize,
    /// Longer side
    pub long: usize,
}

impl fmt::Display for BillLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count > 1 { "s" } else { "" };
        write!(
            f,
            "{} {} {}x{} brick{plural}",
            self.count, self.color_name, self.short, self.long
        )
    }
}

/// Counts of placed pieces grouped by color and size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillOfMaterials {
    lines: Vec<BillLine>,
    counts: BTreeMap<BrickKey, usize>,
    total: usize,
}

impl BillOfMaterials {
    /// Count pieces, resolving color names through the palette
    pub fn from_pieces(pieces: &[PlacedPiece], palette: &Palette) -> Self {
        let mut counts: BTreeMap<BrickKey, usize> = BTreeMap::new();
        for piece in pieces {
            *counts.entry(BrickKey::of(piece)).or_insert(0) += 1;
        }

        let lines = counts
            .iter()
            .map(|(key, &count)| BillLine {
                count,
                color_name: palette
                    .get(key.color)
                    .map_or_else(|| format!("Color #{}", key.color), |entry| entry.name.clone()),
                short: key.short,
                long: key.long,
            })
            .collect();

        Self {
            lines,
            counts,
            total: pieces.len(),
        }
    }

    /// Total number of pieces
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Count lines in output order
    pub fn lines(&self) -> &[BillLine] {
        &self.lines
    }

    /// Number of pieces of a color and size, in either orientation
    pub fn count(&self, color: usize, spec: PieceSpec) -> usize {
        let canonical = spec.canonical();
        let key = BrickKey {
            color,
            short: canonical.height(),
            long: canonical.width(),
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Human-readable instructions text
    pub fn instructions(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BillOfMaterials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To complete this, you will need:")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "For a total of {} bricks.", self.total)
    }
}

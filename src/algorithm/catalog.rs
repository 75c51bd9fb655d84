//! Piece dimensions and the ordered catalog of allowed sizes

use std::fmt;

use crate::io::error::{Result, configuration_error};

/// Rectangular piece dimensions in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceSpec {
    height: usize,
    width: usize,
}

impl PieceSpec {
    /// Create a piece size
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either dimension is zero
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(configuration_error(
                "piece",
                &format!("{height}x{width}"),
                &"piece dimensions must be positive",
            ));
        }
        Ok(Self { height, width })
    }

    /// Height in cells
    pub const fn height(self) -> usize {
        self.height
    }

    /// Width in cells
    pub const fn width(self) -> usize {
        self.width
    }

    /// Same piece rotated a quarter turn
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            height: self.width,
            width: self.height,
        }
    }

    /// Whether both orientations are the same
    pub const fn is_square(self) -> bool {
        self.height == self.width
    }

    /// Number of cells covered
    pub const fn area(self) -> usize {
        self.height * self.width
    }

    /// Orientation with the shorter side first, used for counting
    #[must_use]
    pub const fn canonical(self) -> Self {
        if self.height <= self.width {
            self
        } else {
            self.swapped()
        }
    }
}

impl fmt::Display for PieceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Ordered, non-empty list of piece sizes
///
/// Order is the attempt order of the tiling engine and therefore decides
/// which pieces claim which regions.
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    pieces: Vec<PieceSpec>,
}

impl PieceCatalog {
    /// Build a catalog, preserving order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `pieces` is empty
    pub fn new(pieces: Vec<PieceSpec>) -> Result<Self> {
        if pieces.is_empty() {
            return Err(configuration_error(
                "catalog",
                &"[]",
                &"catalog must contain at least one piece size",
            ));
        }
        Ok(Self { pieces })
    }

    /// Build a catalog from `(height, width)` pairs
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty or a dimension is zero
    pub fn from_dimensions(dimensions: &[(usize, usize)]) -> Result<Self> {
        let pieces = dimensions
            .iter()
            .map(|&(height, width)| PieceSpec::new(height, width))
            .collect::<Result<Vec<_>>>()?;
        Self::new(pieces)
    }

    /// Piece sizes in attempt order
    pub fn pieces(&self) -> &[PieceSpec] {
        &self.pieces
    }

    /// Number of piece sizes
    pub const fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub const fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether a 1x1 piece is available, which guarantees full coverage
    pub fn contains_unit(&self) -> bool {
        self.pieces
            .iter()
            .any(|piece| piece.height == 1 && piece.width == 1)
    }
}

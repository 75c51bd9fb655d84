//! Greedy rectangular cover of a quantized grid
//!
//! The engine walks the catalog in order and, for each piece size, scans the
//! grid top to bottom and left to right, committing to the first fitting
//! placement at every free cell. There is no backtracking and no lookahead:
//! earlier catalog entries claim eligible regions first, and the result is
//! fully determined by the grid and the catalog order.

use crate::algorithm::catalog::{PieceCatalog, PieceSpec};
use crate::io::error::{MosaicError, Result};
use crate::spatial::{OccupancyGrid, PixelGrid};

/// A piece committed to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    /// Top row covered
    pub origin_row: usize,
    /// Leftmost column covered
    pub origin_col: usize,
    /// Rows covered
    pub height: usize,
    /// Columns covered
    pub width: usize,
    /// Canonical palette index of every covered cell
    pub color: usize,
}

impl PlacedPiece {
    /// Dimensions as placed
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Whether the piece covers `(row, col)`
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.origin_row
            && row < self.origin_row + self.height
            && col >= self.origin_col
            && col < self.origin_col + self.width
    }

    /// Whether two pieces have the same size, ignoring orientation
    pub const fn dimension_equal(&self, other: &Self) -> bool {
        (self.height == other.height && self.width == other.width)
            || (self.height == other.width && self.width == other.height)
    }

    /// Whether two pieces count as the same brick: same size and color
    pub const fn same_brick(&self, other: &Self) -> bool {
        self.dimension_equal(other) && self.color == other.color
    }

    /// Whether the covered rectangles share any cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.origin_row < other.origin_row + other.height
            && other.origin_row < self.origin_row + self.height
            && self.origin_col < other.origin_col + other.width
            && other.origin_col < self.origin_col + self.width
    }

    /// All covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (row, col, width) = (self.origin_row, self.origin_col, self.width);
        (row..row + self.height).flat_map(move |r| (col..col + width).map(move |c| (r, c)))
    }
}

/// Outcome of one tiling run
#[derive(Debug, Clone)]
pub struct Tiling {
    /// Placed pieces in insertion order (catalog, then row, then column)
    pub pieces: Vec<PlacedPiece>,
    /// Covered cells after the run
    pub occupancy: OccupancyGrid,
}

impl Tiling {
    /// Dimensions of the tiled grid as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.occupancy.dimensions()
    }

    /// Cells no piece covers
    pub fn uncovered_count(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols - self.occupancy.occupied_count()
    }

    /// Whether every cell is covered
    pub fn is_complete(&self) -> bool {
        self.occupancy.is_fully_occupied()
    }
}

/// Greedy tiling over a borrowed catalog
///
/// The catalog is read-only and may be shared by concurrent conversions;
/// every call to [`Self::tile`] owns its own occupancy grid.
#[derive(Debug, Clone, Copy)]
pub struct TilingEngine<'a> {
    catalog: &'a PieceCatalog,
}

impl<'a> TilingEngine<'a> {
    /// Create an engine trying pieces in catalog order
    pub const fn new(catalog: &'a PieceCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog driving the engine
    pub const fn catalog(&self) -> &'a PieceCatalog {
        self.catalog
    }

    /// Cover the grid greedily
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the occupancy grid does not match the
    /// pixel grid, which indicates an internal invariant violation
    pub fn tile(&self, grid: &PixelGrid) -> Result<Tiling> {
        self.tile_with_progress(grid, |_, _| {})
    }

    /// Cover the grid greedily, reporting each catalog entry as it starts
    ///
    /// `on_piece` receives the catalog position and piece size before the
    /// grid scan for that size begins.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the occupancy grid does not match the
    /// pixel grid, which indicates an internal invariant violation
    pub fn tile_with_progress<F>(&self, grid: &PixelGrid, mut on_piece: F) -> Result<Tiling>
    where
        F: FnMut(usize, PieceSpec),
    {
        let (rows, cols) = grid.dimensions();
        let mut occupancy = OccupancyGrid::new(rows, cols);
        if occupancy.dimensions() != grid.dimensions() {
            return Err(MosaicError::DimensionMismatch {
                context: "tiling",
                expected: grid.dimensions(),
                found: occupancy.dimensions(),
            });
        }

        let mut pieces = Vec::new();

        for (index, &spec) in self.catalog.pieces().iter().enumerate() {
            on_piece(index, spec);

            for row in 0..rows {
                for col in 0..cols {
                    if occupancy.is_occupied(row, col) {
                        continue;
                    }

                    let placement = [spec, spec.swapped()]
                        .into_iter()
                        .take(if spec.is_square() { 1 } else { 2 })
                        .find(|candidate| fits(grid, &occupancy, row, col, *candidate));

                    if let Some(orientation) = placement {
                        let Some(color) = grid.get(row, col) else {
                            continue;
                        };
                        occupancy.occupy(row, col, orientation.height(), orientation.width());
                        pieces.push(PlacedPiece {
                            origin_row: row,
                            origin_col: col,
                            height: orientation.height(),
                            width: orientation.width(),
                            color,
                        });
                    }
                }
            }
        }

        Ok(Tiling { pieces, occupancy })
    }
}

/// Whether a piece of the given orientation fits with its origin at `(row, col)`
///
/// Fits means in bounds, every cell free, and every cell the same color as
/// the origin cell.
pub fn fits(
    grid: &PixelGrid,
    occupancy: &OccupancyGrid,
    row: usize,
    col: usize,
    orientation: PieceSpec,
) -> bool {
    let (height, width) = (orientation.height(), orientation.width());
    if !occupancy.is_region_free(row, col, height, width) {
        return false;
    }
    let Some(color) = grid.get(row, col) else {
        return false;
    };
    (row..row + height).all(|r| (col..col + width).all(|c| grid.get(r, c) == Some(color)))
}

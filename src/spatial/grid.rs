//! Quantized pixel grid and the parallel occupancy arena
//!
//! Both grids are indexed by `(row, col)` with rows running top to bottom.
//! They are created once per conversion and owned by it.

use bitvec::prelude::*;
use image::RgbImage;
use ndarray::Array2;

use crate::io::error::{MosaicError, Result, configuration_error};
use crate::palette::{Color, Palette};

/// Palette index of every source pixel
///
/// Holds canonical indices only (see [`Palette::canonical_index`]), so two
/// cells have the same color iff their indices are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Array2<usize>,
}

impl PixelGrid {
    /// Quantize every pixel of an image to its nearest palette entry
    pub fn quantize(image: &RgbImage, palette: &Palette) -> Self {
        let rows = image.height() as usize;
        let cols = image.width() as usize;
        let mut cells = Array2::zeros((rows, cols));

        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(cell) = cells.get_mut((y as usize, x as usize)) {
                *cell = palette.nearest_index(Color::from(*pixel));
            }
        }

        Self { cells }
    }

    /// Quantize a row-major slice of raw colors
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `colors.len() != rows * cols`
    pub fn from_colors(
        rows: usize,
        cols: usize,
        colors: &[Color],
        palette: &Palette,
    ) -> Result<Self> {
        if rows.checked_mul(cols) != Some(colors.len()) {
            return Err(MosaicError::DimensionMismatch {
                context: "pixel grid construction",
                expected: (rows, cols),
                found: (colors.len() / cols.max(1), cols),
            });
        }

        let indices = colors
            .iter()
            .map(|&color| palette.nearest_index(color))
            .collect();
        let cells = Array2::from_shape_vec((rows, cols), indices).map_err(|_shape_error| {
            MosaicError::DimensionMismatch {
                context: "pixel grid construction",
                expected: (rows, cols),
                found: (colors.len(), 1),
            }
        })?;

        Ok(Self { cells })
    }

    /// Wrap already-quantized palette indices
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an index is outside the palette
    pub fn from_indices(indices: Array2<usize>, palette: &Palette) -> Result<Self> {
        let mut cells = indices;
        for cell in &mut cells {
            let index = *cell;
            *cell = palette.canonical_index(index).ok_or_else(|| {
                configuration_error(
                    "pixel grid",
                    &index,
                    &format!("index outside palette of {} colors", palette.len()),
                )
            })?;
        }
        Ok(Self { cells })
    }

    /// Number of rows (source image height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (source image width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Palette index at a cell
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.cells.get((row, col)).copied()
    }

    /// Underlying index array
    pub const fn cells(&self) -> &Array2<usize> {
        &self.cells
    }
}

/// Row-major boolean arena marking covered cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell free
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Whether a cell is covered; out-of-bounds cells count as covered
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.offset(row, col)
            .and_then(|offset| self.bits.get(offset).as_deref().copied())
            .unwrap_or(true)
    }

    /// Whether every cell of `[row, row+height) x [col, col+width)` is in bounds and free
    pub fn is_region_free(&self, row: usize, col: usize, height: usize, width: usize) -> bool {
        if row + height > self.rows || col + width > self.cols {
            return false;
        }
        (row..row + height).all(|r| {
            let start = r * self.cols + col;
            self.bits
                .get(start..start + width)
                .is_some_and(|span| span.not_any())
        })
    }

    /// Mark a rectangle as covered, clipped to the grid
    pub fn occupy(&mut self, row: usize, col: usize, height: usize, width: usize) {
        let row_end = (row + height).min(self.rows);
        let col_end = (col + width).min(self.cols);
        if col >= col_end {
            return;
        }
        for r in row..row_end {
            let start = r * self.cols + col;
            let end = r * self.cols + col_end;
            if let Some(span) = self.bits.get_mut(start..end) {
                span.fill(true);
            }
        }
    }

    /// Number of covered cells
    pub fn occupied_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether every cell is covered
    pub fn is_fully_occupied(&self) -> bool {
        self.bits.all()
    }
}

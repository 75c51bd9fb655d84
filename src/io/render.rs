//! Scaled mosaic rendering with per-piece outlines and stud marks

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::algorithm::tiling::{PlacedPiece, Tiling};
use crate::io::configuration::DEFAULT_SCALE;
use crate::io::error::{MosaicError, Result, configuration_error};
use crate::palette::{Color, Palette};

/// Draws placed pieces as solid outlined rectangles
///
/// Each source cell becomes a `scale x scale` block. Inside a piece, pixels
/// on the outer border and on the seam grid (local `(k-1, k-1)` and `(0, 0)`
/// corners of every sub-cell) take the outline color, the rest the piece
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicRenderer {
    scale: u32,
}

impl Default for MosaicRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MosaicRenderer {
    /// Renderer with the default scale
    pub const fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }

    /// Renderer with a custom scale
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `scale` is zero
    pub fn with_scale(scale: u32) -> Result<Self> {
        let mut renderer = Self::new();
        renderer.set_scale(scale)?;
        Ok(renderer)
    }

    /// Change the scale, keeping the previous one on failure
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `scale` is zero
    pub fn set_scale(&mut self, scale: u32) -> Result<()> {
        if scale < 1 {
            return Err(configuration_error(
                "scale",
                &scale,
                &"scale factor cannot be less than 1",
            ));
        }
        self.scale = scale;
        Ok(())
    }

    /// Current scale factor
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Render pieces onto a black canvas for a `rows x cols` grid
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the scaled image would not fit in
    /// `u32` dimensions
    pub fn render(
        &self,
        rows: usize,
        cols: usize,
        pieces: &[PlacedPiece],
        palette: &Palette,
    ) -> Result<RgbImage> {
        let (width, height) = self.scaled_dimensions(rows, cols)?;
        let mut canvas = RgbImage::new(width, height);
        self.draw_pieces(&mut canvas, pieces, palette);
        Ok(canvas)
    }

    /// Render a tiling on top of the source image scaled up by nearest neighbour
    ///
    /// Cells no piece covers keep the scaled source pixels.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `source` differs from the tiled grid,
    /// or a configuration error if the scaled image would overflow
    pub fn render_over(
        &self,
        source: &RgbImage,
        tiling: &Tiling,
        palette: &Palette,
    ) -> Result<RgbImage> {
        let (rows, cols) = tiling.dimensions();
        let source_dims = (source.height() as usize, source.width() as usize);
        if source_dims != (rows, cols) {
            return Err(MosaicError::DimensionMismatch {
                context: "mosaic rendering",
                expected: (rows, cols),
                found: source_dims,
            });
        }

        let (width, height) = self.scaled_dimensions(rows, cols)?;
        let mut canvas = imageops::resize(source, width, height, FilterType::Nearest);
        self.draw_pieces(&mut canvas, &tiling.pieces, palette);
        Ok(canvas)
    }

    fn scaled_dimensions(&self, rows: usize, cols: usize) -> Result<(u32, u32)> {
        let scaled = |cells: usize, parameter: &'static str| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(self.scale))
                .ok_or_else(|| {
                    configuration_error(
                        parameter,
                        &cells,
                        &format!("too large to render at scale {}", self.scale),
                    )
                })
        };
        Ok((scaled(cols, "width")?, scaled(rows, "height")?))
    }

    fn draw_pieces(&self, canvas: &mut RgbImage, pieces: &[PlacedPiece], palette: &Palette) {
        let k = self.scale as usize;
        for piece in pieces {
            let fill = palette
                .get(piece.color)
                .map_or(Color::BLACK, |entry| entry.color);
            let fill_pixel = Rgb::from(fill);
            let outline_pixel = Rgb::from(fill.outline_color());

            let top = piece.origin_row * k;
            let left = piece.origin_col * k;
            let scaled_height = piece.height * k;
            let scaled_width = piece.width * k;

            for local_row in 0..scaled_height {
                for local_col in 0..scaled_width {
                    let pixel = if is_outline(local_row, local_col, scaled_height, scaled_width, k)
                    {
                        outline_pixel
                    } else {
                        fill_pixel
                    };
                    let (x, y) = (left + local_col, top + local_row);
                    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
                        && x < canvas.width()
                        && y < canvas.height()
                    {
                        canvas.put_pixel(x, y, pixel);
                    }
                }
            }
        }
    }
}

/// Whether a pixel at local piece coordinates is part of the outline
///
/// `height` and `width` are the scaled piece size, `scale` the cell size.
pub const fn is_outline(
    local_row: usize,
    local_col: usize,
    height: usize,
    width: usize,
    scale: usize,
) -> bool {
    let border =
        local_row == 0 || local_col == 0 || local_row + 1 == height || local_col + 1 == width;
    let seam_end = local_row % scale == scale - 1 && local_col % scale == scale - 1;
    let seam_start = local_row % scale == 0 && local_col % scale == 0;
    border || seam_end || seam_start
}

//! One conversion run: quantize, tile, count, render

use image::RgbImage;

use crate::algorithm::catalog::{PieceCatalog, PieceSpec};
use crate::algorithm::tiling::{Tiling, TilingEngine};
use crate::analysis::bill::BillOfMaterials;
use crate::io::error::Result;
use crate::io::render::MosaicRenderer;
use crate::palette::Palette;
use crate::spatial::PixelGrid;

/// Everything produced by converting one image
#[derive(Debug, Clone)]
pub struct Mosaic {
    /// Quantized source pixels
    pub grid: PixelGrid,
    /// Placed pieces and final occupancy
    pub tiling: Tiling,
    /// Piece counts by color and size
    pub bill: BillOfMaterials,
    /// Scaled outlined rendering
    pub image: RgbImage,
}

/// Converts images using shared read-only configuration
///
/// Palette and catalog are borrowed, so one set can serve any number of
/// conversions; each [`Self::convert`] call owns its grids.
#[derive(Debug, Clone, Copy)]
pub struct MosaicConverter<'a> {
    palette: &'a Palette,
    catalog: &'a PieceCatalog,
    renderer: MosaicRenderer,
}

impl<'a> MosaicConverter<'a> {
    /// Create a converter; configuration is already validated by construction
    pub const fn new(
        palette: &'a Palette,
        catalog: &'a PieceCatalog,
        renderer: MosaicRenderer,
    ) -> Self {
        Self {
            palette,
            catalog,
            renderer,
        }
    }

    /// Palette used for quantization and naming
    pub const fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Catalog driving the tiling
    pub const fn catalog(&self) -> &'a PieceCatalog {
        self.catalog
    }

    /// Renderer settings
    pub const fn renderer(&self) -> MosaicRenderer {
        self.renderer
    }

    /// Convert an image
    ///
    /// # Errors
    ///
    /// Returns an error if tiling or rendering fails
    pub fn convert(&self, source: &RgbImage) -> Result<Mosaic> {
        self.convert_with_progress(source, |_, _| {})
    }

    /// Convert an image, reporting each catalog entry the tiling reaches
    ///
    /// # Errors
    ///
    /// Returns an error if tiling or rendering fails
    pub fn convert_with_progress<F>(&self, source: &RgbImage, on_piece: F) -> Result<Mosaic>
    where
        F: FnMut(usize, PieceSpec),
    {
        let grid = PixelGrid::quantize(source, self.palette);
        let tiling = TilingEngine::new(self.catalog).tile_with_progress(&grid, on_piece)?;
        let bill = BillOfMaterials::from_pieces(&tiling.pieces, self.palette);
        let image = self.renderer.render_over(source, &tiling, self.palette)?;

        Ok(Mosaic {
            grid,
            tiling,
            bill,
            image,
        })
    }
}

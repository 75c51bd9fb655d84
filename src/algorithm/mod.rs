/// Piece sizes and the ordered catalog
pub mod catalog;
/// Conversion pipeline over a shared palette and catalog
pub mod executor;
/// Greedy tiling engine and placed pieces
pub mod tiling;

pub use catalog::{PieceCatalog, PieceSpec};
pub use executor::{Mosaic, MosaicConverter};
pub use tiling::{PlacedPiece, Tiling, TilingEngine};

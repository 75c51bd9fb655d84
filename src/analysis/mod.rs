//! Aggregation over completed tilings

/// Bill of materials grouped by color and piece size
pub mod bill;

pub use bill::{BillLine, BillOfMaterials, BrickKey};

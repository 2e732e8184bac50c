//! Output image assembly: the tileset strip and character portraits

/// Character portrait extraction
pub mod portraits;
/// Tileset strip selection and concatenation
pub mod tileset;

pub use tileset::{AssembledTileset, TilesetAssembler, TilesetPlan, TilesetSources};

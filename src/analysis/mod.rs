//! Tile measurement and best-candidate selection

/// Water and rock eligibility predicates and ranking keys
pub mod criteria;
/// Generic predicate-filtered maximum selection
pub mod selection;
/// Per-tile coverage and color statistics
pub mod statistics;

pub use selection::select_best;
pub use statistics::{TileLocation, TileStat};

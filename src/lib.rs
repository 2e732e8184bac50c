//! Sprite sheet tile curation for game-ready tilesets
//!
//! The system measures every tile of third-party sprite sheets, picks the best
//! candidates for ambiguous asset classes by scoring their color statistics,
//! strips boxed backgrounds with corner-seeded flood fills, tints and re-mattes
//! tiles, and concatenates them into a single tileset strip.

#![forbid(unsafe_code)]

/// Tile statistics and best-candidate selection
pub mod analysis;
/// Output assembly: tileset strip and character portraits
pub mod assembly;
/// Input/output operations, configuration and error handling
pub mod io;
/// Sheet tiling and visited masks
pub mod spatial;
/// Background clearing, tinting and compositing
pub mod transform;

pub use io::error::{PipelineError, Result};

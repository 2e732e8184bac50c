//! Spatial data structures over sprite sheets
//!
//! This module contains spatial-related functionality including:
//! - Sheet tiling and row-major tile sampling
//! - Per-pixel visited masks for region fills

/// Visited-pixel bit grid used by flood fills
pub mod mask;
/// Sprite sheet tiling and tile extraction
pub mod tiles;

pub use mask::VisitedMask;
pub use tiles::{SheetId, SpriteSheet};

//! Pixel transforms applied to extracted tiles

/// Corner-seeded background removal
pub mod background;
/// Alpha compositing and strip concatenation
pub mod composite;
/// Fixed water tint
pub mod tint;

pub use background::clear_corner_background;
pub use composite::{concatenate_strip, matte_over};
pub use tint::tint_water;

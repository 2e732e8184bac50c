//! Fixed water tint applied to the selected water tile

use crate::io::configuration::{
    TINT_BLUE_OFFSET, TINT_BLUE_SCALE, TINT_GREEN_SCALE, TINT_LIFT, TINT_RED_SCALE,
};
use image::{Rgba, RgbaImage};

// Truncates like an integer cast, then lifts and caps at 255
fn lift(value: f64) -> u8 {
    ((value as u32) + TINT_LIFT).min(255) as u8
}

/// Remap one pixel toward a saturated water blue
///
/// Fully transparent pixels pass through unchanged. Alpha is never touched.
/// Blue is a separate multiply and add, capped at 255 before truncation.
#[allow(clippy::suboptimal_flops)]
pub fn tint_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    if a == 0 {
        return pixel;
    }
    let red = f64::from(r) * TINT_RED_SCALE;
    let green = f64::from(g) * TINT_GREEN_SCALE;
    let blue = (f64::from(b) * TINT_BLUE_SCALE + TINT_BLUE_OFFSET).min(255.0);
    Rgba([lift(red), lift(green), lift(blue), a])
}

/// Shift a tile toward brighter, more saturated blue
///
/// Multiplicative channel terms keep the tile's shading structure intact.
pub fn tint_water(tile: &RgbaImage) -> RgbaImage {
    let mut out = tile.clone();
    for pixel in out.pixels_mut() {
        *pixel = tint_pixel(*pixel);
    }
    out
}

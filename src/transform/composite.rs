//! Alpha compositing of tiles over a matte and strip concatenation

use crate::io::error::{Result, dimension_mismatch, invalid_parameter};
use image::imageops;
use image::{Rgba, RgbaImage};

// Fixed-point fraction bits used while blending
const PRECISION_BITS: u32 = 7;

// Shift-based division by 255
const fn div255(value: u32) -> u32 {
    ((value >> 8) + value) >> 8
}

/// Blend one foreground pixel over one background pixel
///
/// Integer "over" operator with round-half-up division by 255. An opaque
/// background always yields an opaque result, and a transparent foreground
/// yields the background untouched.
pub fn over(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let [fr, fg, fb, fa] = foreground.0.map(u32::from);
    if fa == 0 {
        return background;
    }
    let [br, bg, bb, ba] = background.0.map(u32::from);

    // Output alpha scaled by 255
    let out_a255 = fa * 255 + ba * (255 - fa);
    let fg_coef = fa * 255 * 255 * (1 << PRECISION_BITS) / out_a255;
    let bg_coef = 255 * (1 << PRECISION_BITS) - fg_coef;
    let half = 0x80 << PRECISION_BITS;
    let channel =
        |f: u32, b: u32| (div255(f * fg_coef + b * bg_coef + half) >> PRECISION_BITS) as u8;

    Rgba([
        channel(fr, br),
        channel(fg, bg),
        channel(fb, bb),
        div255(out_a255 + 0x80) as u8,
    ])
}

/// Composite `foreground` over `background` with the "over" operator
///
/// Both inputs must share dimensions; neither is modified.
///
/// # Errors
///
/// Returns an error if the two images differ in size
pub fn matte_over(background: &RgbaImage, foreground: &RgbaImage) -> Result<RgbaImage> {
    if background.dimensions() != foreground.dimensions() {
        return Err(dimension_mismatch(
            background.dimensions(),
            foreground.dimensions(),
        ));
    }
    let mut out = background.clone();
    for (pixel, &fg_pixel) in out.pixels_mut().zip(foreground.pixels()) {
        *pixel = over(*pixel, fg_pixel);
    }
    Ok(out)
}

/// Lay tiles left to right on a transparent `tile_size`-high strip
///
/// Tiles are copied verbatim, not blended, at `x = i * tile_size`.
///
/// # Errors
///
/// Returns an error if:
/// - `tiles` is empty or `tile_size` is zero
/// - Any tile is not `tile_size` x `tile_size`
pub fn concatenate_strip(tiles: &[RgbaImage], tile_size: u32) -> Result<RgbaImage> {
    if tiles.is_empty() {
        return Err(invalid_parameter(
            "tiles",
            &0,
            &"a strip needs at least one tile",
        ));
    }
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tiles must be at least one pixel wide",
        ));
    }
    if let Some(bad) = tiles
        .iter()
        .find(|tile| tile.dimensions() != (tile_size, tile_size))
    {
        return Err(dimension_mismatch((tile_size, tile_size), bad.dimensions()));
    }

    let width = tile_size * tiles.len() as u32;
    let mut strip = RgbaImage::new(width, tile_size);
    for (i, tile) in tiles.iter().enumerate() {
        let x = i64::from(tile_size) * i as i64;
        imageops::replace(&mut strip, tile, x, 0);
    }
    Ok(strip)
}

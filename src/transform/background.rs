//! Corner-seeded matte removal
//!
//! Boxed object tiles carry an opaque background color. Rather than keying
//! that color out everywhere, only the region 4-connected to each corner is
//! cleared, so outlines and shadows drawn in the same color inside the subject
//! survive.

use crate::io::configuration::OPAQUE_ALPHA_THRESHOLD;
use crate::spatial::VisitedMask;
use image::{Rgba, RgbaImage};

const fn within_tolerance(value: u8, seed: u8, tolerance: u8) -> bool {
    value.abs_diff(seed) <= tolerance
}

fn matches_seed(pixel: Rgba<u8>, seed: [u8; 3], tolerance: u8) -> bool {
    let [r, g, b, a] = pixel.0;
    let [r0, g0, b0] = seed;
    a >= OPAQUE_ALPHA_THRESHOLD
        && within_tolerance(r, r0, tolerance)
        && within_tolerance(g, g0, tolerance)
        && within_tolerance(b, b0, tolerance)
}

/// Clear the matte connected to each of the four corners
///
/// Each corner that is opaque seeds a 4-connected fill accepting opaque
/// pixels within `tolerance` of that corner's original RGB on every channel.
/// Accepted pixels get alpha 0 with RGB preserved. All four fills share one
/// visited mask, so a pixel examined by one fill is never revisited by
/// another. The input tile is left untouched.
pub fn clear_corner_background(tile: &RgbaImage, tolerance: u8) -> RgbaImage {
    let mut out = tile.clone();
    let (width, height) = out.dimensions();
    if width == 0 || height == 0 {
        return out;
    }

    let mut visited = VisitedMask::new(width, height);
    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];

    for (x, y) in corners {
        let cleared = flood_from(&mut out, &mut visited, x, y, tolerance);
        log::trace!("corner ({x}, {y}) cleared {cleared} pixels");
    }
    log::trace!(
        "corner fills examined {} of {} pixels",
        visited.count(),
        u64::from(width) * u64::from(height)
    );

    out
}

// Returns the number of pixels cleared by this corner's fill
fn flood_from(
    image: &mut RgbaImage,
    visited: &mut VisitedMask,
    seed_x: u32,
    seed_y: u32,
    tolerance: u8,
) -> usize {
    if visited.is_visited(seed_x, seed_y) {
        return 0;
    }
    let Some(&seed_pixel) = image.get_pixel_checked(seed_x, seed_y) else {
        return 0;
    };
    let [r0, g0, b0, a0] = seed_pixel.0;
    if a0 < OPAQUE_ALPHA_THRESHOLD {
        return 0;
    }
    let seed = [r0, g0, b0];

    let (width, height) = image.dimensions();
    let mut cleared = 0;
    let mut stack = vec![(seed_x, seed_y)];

    while let Some((x, y)) = stack.pop() {
        if !visited.visit(x, y) {
            continue;
        }
        let Some(pixel) = image.get_pixel_mut_checked(x, y) else {
            continue;
        };
        if !matches_seed(*pixel, seed, tolerance) {
            continue;
        }

        if let Some(alpha) = pixel.0.get_mut(3) {
            *alpha = 0;
        }
        cleared += 1;

        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if let Some(left) = x.checked_sub(1) {
            stack.push((left, y));
        }
        if y + 1 < height {
            stack.push((x, y + 1));
        }
        if let Some(up) = y.checked_sub(1) {
            stack.push((x, up));
        }
    }

    cleared
}

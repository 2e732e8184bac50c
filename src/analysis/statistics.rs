//! Per-tile coverage and color statistics
//!
//! Only "solid" pixels (alpha at or above [`SOLID_ALPHA_THRESHOLD`]) contribute
//! to the color averages. The three hue-lean scores contrast one channel
//! against the mean of the other two; they are unbounded and only meaningful
//! when ranking tiles from sheets of the same pack and tile size.

use crate::io::configuration::SOLID_ALPHA_THRESHOLD;
use crate::io::error::{PipelineError, Result};
use crate::spatial::SheetId;
use image::RgbaImage;

/// Where a measured tile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileLocation {
    /// Owning sheet
    pub sheet: SheetId,
    /// Row-major linear index on the sheet
    pub index: usize,
    /// Grid column
    pub x: u32,
    /// Grid row
    pub y: u32,
}

/// Coverage and color summary of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStat {
    /// Source of the tile
    pub location: TileLocation,
    /// Fraction of pixels that are solid, in [0, 1]
    pub alpha_cov: f64,
    /// Mean red of solid pixels
    pub r: f64,
    /// Mean green of solid pixels
    pub g: f64,
    /// Mean blue of solid pixels
    pub b: f64,
    /// Mean of the three channel averages
    pub bright: f64,
    /// Chroma-based saturation `(max - min) / max`
    pub sat: f64,
    /// Green lean: `g - (r + b) / 2`
    pub green: f64,
    /// Blue lean: `b - (r + g) / 2`
    pub blue: f64,
    /// Brown lean: `(r + g) / 2 - b`
    pub brown: f64,
}

impl TileStat {
    /// Measure a tile in a single pass over its pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the tile has no pixels
    pub fn measure(location: TileLocation, tile: &RgbaImage) -> Result<Self> {
        let n = tile.width() as usize * tile.height() as usize;
        if n == 0 {
            return Err(PipelineError::InvalidSourceData {
                reason: format!("tile {} of {} has no pixels", location.index, location.sheet),
            });
        }

        let mut r_sum = 0u64;
        let mut g_sum = 0u64;
        let mut b_sum = 0u64;
        let mut solid = 0usize;

        for pixel in tile.pixels() {
            let [r, g, b, a] = pixel.0;
            if a >= SOLID_ALPHA_THRESHOLD {
                solid += 1;
                r_sum += u64::from(r);
                g_sum += u64::from(g);
                b_sum += u64::from(b);
            }
        }

        let alpha_cov = solid as f64 / n as f64;
        let (r, g, b) = if solid == 0 {
            (0.0, 0.0, 0.0)
        } else {
            let count = solid as f64;
            (
                r_sum as f64 / count,
                g_sum as f64 / count,
                b_sum as f64 / count,
            )
        };

        Ok(Self::from_averages(location, alpha_cov, r, g, b))
    }

    /// Derive brightness, saturation and hue leans from channel averages
    pub fn from_averages(location: TileLocation, alpha_cov: f64, r: f64, g: f64, b: f64) -> Self {
        let bright = (r + g + b) / 3.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sat = if max < 1e-6 { 0.0 } else { (max - min) / max };

        Self {
            location,
            alpha_cov,
            r,
            g,
            b,
            bright,
            sat,
            green: g - (r + b) * 0.5,
            blue: b - (r + g) * 0.5,
            brown: (r + g) * 0.5 - b,
        }
    }
}

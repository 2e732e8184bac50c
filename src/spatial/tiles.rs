//! Sprite sheet tiling and tile extraction
//!
//! A sheet is treated as a grid of square tiles addressed row-major by a
//! linear index. Pixels past the last whole column or row are ignored, so a
//! sheet whose dimensions are not a multiple of the tile size simply yields
//! fewer tiles.

use crate::analysis::statistics::{TileLocation, TileStat};
use crate::io::error::{PipelineError, Result, invalid_parameter};
use image::RgbaImage;
use image::imageops;
use std::fmt;
use std::iter::FusedIterator;

/// Identity of a sprite sheet within one build run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SheetId(pub usize);

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet#{}", self.0)
    }
}

/// An RGBA sheet viewed as a grid of `tile_size` squares
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    id: SheetId,
    image: RgbaImage,
    tile_size: u32,
}

/// One tile produced by the sampler, with its grid coordinates
#[derive(Debug, Clone)]
pub struct SampledTile {
    /// Grid column
    pub col: u32,
    /// Grid row
    pub row: u32,
    /// Owned copy of the tile pixels
    pub image: RgbaImage,
}

impl SpriteSheet {
    /// Wrap a decoded image as a tile grid
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero
    pub fn new(id: SheetId, image: RgbaImage, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"tiles must be at least one pixel wide",
            ));
        }
        Ok(Self {
            id,
            image,
            tile_size,
        })
    }

    /// Sheet identity
    pub const fn id(&self) -> SheetId {
        self.id
    }

    /// Tile edge length in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Underlying sheet pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Number of whole tile columns
    pub fn cols(&self) -> u32 {
        self.image.width() / self.tile_size
    }

    /// Number of whole tile rows
    pub fn rows(&self) -> u32 {
        self.image.height() / self.tile_size
    }

    /// Number of whole tiles on the sheet
    pub fn tile_count(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    /// Iterate every tile in row-major order
    ///
    /// Each call starts a fresh pass over the sheet.
    pub fn tiles(&self) -> Tiles<'_> {
        Tiles {
            sheet: self,
            next: 0,
            total: self.tile_count(),
        }
    }

    fn crop(&self, col: u32, row: u32) -> RgbaImage {
        let size = self.tile_size;
        imageops::crop_imm(&self.image, col * size, row * size, size, size).to_image()
    }

    /// Grid coordinates (col, row) of a linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index lies outside the tile grid
    pub fn coordinates(&self, index: usize) -> Result<(u32, u32)> {
        let tile_count = self.tile_count();
        if index >= tile_count {
            return Err(PipelineError::TileIndexOutOfRange { index, tile_count });
        }
        let cols = self.cols() as usize;
        Ok(((index % cols) as u32, (index / cols) as u32))
    }

    /// Copy out one tile by linear index
    ///
    /// # Errors
    ///
    /// Returns an error if the index lies outside the tile grid
    pub fn tile(&self, index: usize) -> Result<RgbaImage> {
        let (col, row) = self.coordinates(index)?;
        Ok(self.crop(col, row))
    }

    /// Copy out several tiles, preserving the order of `indices`
    ///
    /// # Errors
    ///
    /// Returns an error if any index lies outside the tile grid
    pub fn tiles_at(&self, indices: &[usize]) -> Result<Vec<RgbaImage>> {
        indices.iter().map(|&index| self.tile(index)).collect()
    }

    /// Measure every tile on the sheet
    ///
    /// Statistics are returned in sampler order, so element `i` describes
    /// the tile with linear index `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if a tile cannot be measured
    pub fn collect_stats(&self) -> Result<Vec<TileStat>> {
        self.tiles()
            .enumerate()
            .map(|(index, sampled)| {
                let location = TileLocation {
                    sheet: self.id,
                    index,
                    x: sampled.col,
                    y: sampled.row,
                };
                TileStat::measure(location, &sampled.image)
            })
            .collect()
    }
}

/// Lazy row-major tile sampler over a [`SpriteSheet`]
#[derive(Debug, Clone)]
pub struct Tiles<'a> {
    sheet: &'a SpriteSheet,
    next: usize,
    total: usize,
}

impl Iterator for Tiles<'_> {
    type Item = SampledTile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let cols = self.sheet.cols() as usize;
        let col = (self.next % cols) as u32;
        let row = (self.next / cols) as u32;
        self.next += 1;
        Some(SampledTile {
            col,
            row,
            image: self.sheet.crop(col, row),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tiles<'_> {}

impl FusedIterator for Tiles<'_> {}

//! Tileset strip assembly from curated and auto-selected tiles
//!
//! Grass, clearing, path, tree and stump tiles come from hand-picked indices.
//! Water and rock are chosen automatically by scoring tile statistics: water
//! across every water sheet combined, rock within the objects sheet. Object
//! tiles lose their boxed background and are re-matted over grass.

use crate::analysis::criteria::{is_rock_candidate, is_water_candidate, rock_key, water_score};
use crate::analysis::{TileStat, select_best};
use crate::io::configuration::{
    CLEARING_TILES, DEFAULT_BACKGROUND_TOLERANCE, GRASS_TILES, PATH_TILES, STUMP_QUADRANTS,
    TERRAIN_TILE_SIZE, TREE_QUADRANTS,
};
use crate::io::error::{PipelineError, Result, WithContext, invalid_parameter};
use crate::spatial::SpriteSheet;
use crate::transform::{clear_corner_background, concatenate_strip, matte_over, tint_water};
use image::RgbaImage;
use log::{debug, info};

/// Curated indices and parameters for one tileset build
#[derive(Debug, Clone)]
pub struct TilesetPlan {
    /// Grass tiles on the decor sheet
    pub grass: Vec<usize>,
    /// Clearing tiles on the decor sheet
    pub clearing: Vec<usize>,
    /// Path tiles on the decor sheet
    pub path: Vec<usize>,
    /// Tree quadrants on the objects sheet (TL, TR, BL, BR)
    pub tree_quadrants: [usize; 4],
    /// Stump quadrants on the objects sheet (TL, TR, BL, BR)
    pub stump_quadrants: [usize; 4],
    /// Decor tile placed beneath every re-matted object tile
    pub matte: usize,
    /// Background clearing tolerance per channel
    pub tolerance: u8,
    /// Edge length of every tile involved
    pub tile_size: u32,
}

impl Default for TilesetPlan {
    fn default() -> Self {
        Self {
            grass: GRASS_TILES.to_vec(),
            clearing: CLEARING_TILES.to_vec(),
            path: PATH_TILES.to_vec(),
            tree_quadrants: TREE_QUADRANTS,
            stump_quadrants: STUMP_QUADRANTS,
            matte: GRASS_TILES[0],
            tolerance: DEFAULT_BACKGROUND_TOLERANCE,
            tile_size: TERRAIN_TILE_SIZE,
        }
    }
}

impl TilesetPlan {
    /// Number of tiles the assembled strip will contain
    pub fn tile_count(&self) -> usize {
        // water and rock are one tile each
        self.grass.len()
            + self.clearing.len()
            + self.path.len()
            + 2
            + self.tree_quadrants.len()
            + self.stump_quadrants.len()
    }
}

/// Loaded sheets consumed by the assembler
#[derive(Debug, Clone)]
pub struct TilesetSources {
    /// Grass, clearing and path tiles
    pub decor: SpriteSheet,
    /// Rock, tree and stump tiles
    pub objects: SpriteSheet,
    /// Candidate pool for the water tile
    pub water: Vec<SpriteSheet>,
}

/// Result of assembling a tileset
#[derive(Debug, Clone)]
pub struct AssembledTileset {
    /// Horizontal strip of all output tiles
    pub strip: RgbaImage,
    /// Statistics of the chosen water tile
    pub water: TileStat,
    /// Statistics of the chosen rock tile
    pub rock: TileStat,
}

/// Builds the tileset strip from a plan
#[derive(Debug, Clone, Default)]
pub struct TilesetAssembler {
    plan: TilesetPlan,
}

impl TilesetAssembler {
    /// Create an assembler for the given plan
    pub const fn new(plan: TilesetPlan) -> Self {
        Self { plan }
    }

    /// The plan this assembler follows
    pub const fn plan(&self) -> &TilesetPlan {
        &self.plan
    }

    /// Select, transform and concatenate every output tile
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A sheet's tile size differs from the plan's
    /// - A curated index lies outside its sheet
    /// - No water or rock tile satisfies its eligibility predicate
    pub fn assemble(&self, sources: &TilesetSources) -> Result<AssembledTileset> {
        for sheet in std::iter::once(&sources.decor)
            .chain(std::iter::once(&sources.objects))
            .chain(&sources.water)
        {
            self.check_tile_size(sheet)?;
        }

        let (water_stat, water_tile) = Self::pick_water(&sources.water)?;
        let (rock_stat, rock_tile) = Self::pick_rock(&sources.objects)?;

        let matte = sources.decor.tile(self.plan.matte)?;

        let mut tiles = Vec::with_capacity(self.plan.tile_count());
        tiles.extend(sources.decor.tiles_at(&self.plan.grass)?);
        tiles.extend(sources.decor.tiles_at(&self.plan.clearing)?);
        tiles.extend(sources.decor.tiles_at(&self.plan.path)?);
        tiles.push(tint_water(&water_tile));
        tiles.push(self.rematte(&matte, &rock_tile)?);
        for tile in sources.objects.tiles_at(&self.plan.tree_quadrants)? {
            tiles.push(self.rematte(&matte, &tile)?);
        }
        for tile in sources.objects.tiles_at(&self.plan.stump_quadrants)? {
            tiles.push(self.rematte(&matte, &tile)?);
        }

        let strip = concatenate_strip(&tiles, self.plan.tile_size)?;
        info!(
            "assembled tileset strip of {} tiles ({}x{})",
            tiles.len(),
            strip.width(),
            strip.height()
        );

        Ok(AssembledTileset {
            strip,
            water: water_stat,
            rock: rock_stat,
        })
    }

    fn check_tile_size(&self, sheet: &SpriteSheet) -> Result<()> {
        if sheet.tile_size() == self.plan.tile_size {
            Ok(())
        } else {
            Err(invalid_parameter(
                "tile_size",
                &sheet.tile_size(),
                &format!(
                    "{} must be tiled at {}px to match the plan",
                    sheet.id(),
                    self.plan.tile_size
                ),
            ))
        }
    }

    fn pick_water(sheets: &[SpriteSheet]) -> Result<(TileStat, RgbaImage)> {
        let mut stats = Vec::new();
        for sheet in sheets {
            let sheet_stats = sheet.collect_stats()?;
            debug!("{}: measured {} water candidates", sheet.id(), sheet_stats.len());
            stats.extend(sheet_stats);
        }

        let best = select_best(stats, is_water_candidate, water_score).with_operation("water")?;
        info!(
            "water: tile {} of {} at ({}, {})",
            best.location.index, best.location.sheet, best.location.x, best.location.y
        );
        debug!(
            "water score {:.2} (blue {:.2}, sat {:.3}, bright {:.2}) over {} sheets",
            water_score(&best),
            best.blue,
            best.sat,
            best.bright,
            sheets.len()
        );

        let owner = sheets
            .iter()
            .find(|sheet| sheet.id() == best.location.sheet)
            .ok_or_else(|| PipelineError::InvalidSourceData {
                reason: format!("selected water tile refers to unknown {}", best.location.sheet),
            })?;
        Ok((best, owner.tile(best.location.index)?))
    }

    fn pick_rock(objects: &SpriteSheet) -> Result<(TileStat, RgbaImage)> {
        let stats = objects.collect_stats()?;
        let best = select_best(stats, is_rock_candidate, rock_key).with_operation("rock")?;
        let (grayness, bright) = rock_key(&best);
        info!(
            "rock: tile {} at ({}, {})",
            best.location.index, best.location.x, best.location.y
        );
        debug!("rock key ({grayness:.2}, {bright:.2}), sat {:.3}", best.sat);
        Ok((best, objects.tile(best.location.index)?))
    }

    // Strip the boxed background, then sit the tile on the matte
    fn rematte(&self, matte: &RgbaImage, tile: &RgbaImage) -> Result<RgbaImage> {
        let cleared = clear_corner_background(tile, self.plan.tolerance);
        matte_over(matte, &cleared)
    }
}

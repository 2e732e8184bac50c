//! Command-line interface and build orchestration

use crate::assembly::portraits::{leader_portrait, scout_portrait};
use crate::assembly::{TilesetAssembler, TilesetPlan, TilesetSources};
use crate::io::configuration::{
    DECOR_SHEET, DEFAULT_OUTPUT_DIR, LEADER_OUTPUT, OBJECTS_SHEET, PLAYER_SHEET, SCOUT_OUTPUT,
    SLIME_SHEET, TERRAIN_TILE_SIZE, TILESET_OUTPUT, WATER_SHEETS,
};
use crate::io::error::{PipelineError, Result};
use crate::io::image::{load_rgba, load_sheet, require_inputs, save_png};
use crate::io::progress::BuildProgress;
use crate::spatial::SheetId;
use clap::Parser;
use image::RgbaImage;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::time::Instant;

const STAGE_COUNT: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "woodsheet")]
#[command(
    author,
    version,
    about = "Build a curated tileset and character portraits from a sprite pack"
)]
/// Command-line arguments for the asset build
pub struct Cli {
    /// Root of the sprite pack (contains tilesets/, objects/, characters/)
    #[arg(value_name = "PACK")]
    pub pack: PathBuf,

    /// Directory receiving tiles/ and chars/ outputs
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Log selection scores and per-sheet details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Install the terminal logger at the level implied by `cli`
///
/// # Errors
///
/// Returns [`PipelineError::LoggerInit`] if a logger is already installed
pub fn init_logging(cli: &Cli) -> Result<()> {
    TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|source| PipelineError::LoggerInit { source })
}

/// Absolute locations of every input sheet
#[derive(Debug, Clone)]
pub struct InputPaths {
    /// Water candidate sheets
    pub water: Vec<PathBuf>,
    /// Decor sheet
    pub decor: PathBuf,
    /// Objects sheet
    pub objects: PathBuf,
    /// Player character sheet
    pub player: PathBuf,
    /// Slime character sheet
    pub slime: PathBuf,
}

impl InputPaths {
    /// Resolve the fixed pack layout under `pack`
    pub fn under(pack: &Path) -> Self {
        Self {
            water: WATER_SHEETS.iter().map(|rel| pack.join(rel)).collect(),
            decor: pack.join(DECOR_SHEET),
            objects: pack.join(OBJECTS_SHEET),
            player: pack.join(PLAYER_SHEET),
            slime: pack.join(SLIME_SHEET),
        }
    }

    /// Every input path, water sheets first
    pub fn all(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.water.iter().map(PathBuf::as_path).collect();
        paths.extend([
            self.decor.as_path(),
            self.objects.as_path(),
            self.player.as_path(),
            self.slime.as_path(),
        ]);
        paths
    }
}

/// Absolute locations of every output image
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Tileset strip
    pub tileset: PathBuf,
    /// Leader portrait
    pub leader: PathBuf,
    /// Scout portrait
    pub scout: PathBuf,
}

impl OutputPaths {
    /// Resolve the fixed output layout under `out_dir`
    pub fn under(out_dir: &Path) -> Self {
        Self {
            tileset: out_dir.join(TILESET_OUTPUT),
            leader: out_dir.join(LEADER_OUTPUT),
            scout: out_dir.join(SCOUT_OUTPUT),
        }
    }
}

/// Images produced by one build, held until every one succeeded
struct BuildOutputs {
    tileset: RgbaImage,
    leader: RgbaImage,
    scout: RgbaImage,
}

/// Runs the whole build: validate, load, assemble, then write
pub struct BuildProcessor {
    cli: Cli,
    progress: BuildProgress,
}

impl BuildProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            BuildProgress::new(STAGE_COUNT)
        } else {
            BuildProgress::hidden(STAGE_COUNT)
        };
        Self { cli, progress }
    }

    /// Build every output and write them to disk
    ///
    /// Nothing is written unless every output was built successfully.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any input sheet is missing or cannot be decoded
    /// - Tile selection finds no eligible water or rock tile
    /// - An output cannot be written
    pub fn process(&mut self) -> Result<OutputPaths> {
        let start_time = Instant::now();
        let inputs = InputPaths::under(&self.cli.pack);
        let outputs = OutputPaths::under(&self.cli.out_dir);

        self.progress.start_stage("checking inputs");
        require_inputs(&inputs.all())?;
        self.progress.complete_stage("checking inputs");

        self.progress.start_stage("loading sheets");
        let sources = Self::load_sources(&inputs)?;
        let player = load_rgba(&inputs.player)?;
        let slime = load_rgba(&inputs.slime)?;
        self.progress.complete_stage("loading sheets");

        self.progress.start_stage("assembling tileset");
        let assembled = TilesetAssembler::new(TilesetPlan::default()).assemble(&sources)?;
        self.progress.complete_stage("assembling tileset");

        self.progress.start_stage("building portraits");
        let built = BuildOutputs {
            tileset: assembled.strip,
            leader: leader_portrait(&player)?,
            scout: scout_portrait(&slime)?,
        };
        self.progress.complete_stage("building portraits");

        self.progress.start_stage("writing outputs");
        Self::write_outputs(&built, &outputs)?;
        self.progress.complete_stage("writing outputs");
        self.progress.finish();

        info!("wrote {}", outputs.tileset.display());
        info!("wrote {}", outputs.leader.display());
        info!("wrote {}", outputs.scout.display());
        info!("build finished in {:.2?}", start_time.elapsed());

        Ok(outputs)
    }

    fn load_sources(inputs: &InputPaths) -> Result<TilesetSources> {
        let decor = load_sheet(SheetId(0), &inputs.decor, TERRAIN_TILE_SIZE)?;
        let objects = load_sheet(SheetId(1), &inputs.objects, TERRAIN_TILE_SIZE)?;
        let water = inputs
            .water
            .iter()
            .enumerate()
            .map(|(i, path)| load_sheet(SheetId(2 + i), path, TERRAIN_TILE_SIZE))
            .collect::<Result<Vec<_>>>()?;
        Ok(TilesetSources {
            decor,
            objects,
            water,
        })
    }

    fn write_outputs(built: &BuildOutputs, outputs: &OutputPaths) -> Result<()> {
        save_png(&built.tileset, &outputs.tileset)?;
        save_png(&built.leader, &outputs.leader)?;
        save_png(&built.scout, &outputs.scout)?;
        Ok(())
    }
}

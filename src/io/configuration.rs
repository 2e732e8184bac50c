//! Pipeline constants: thresholds, weights, curated tile indices and paths

// Pixel classification
/// Minimum alpha for a pixel to count toward coverage and color averages
pub const SOLID_ALPHA_THRESHOLD: u8 = 200;
/// Minimum alpha for a pixel to be treated as opaque matte by the clearer
pub const OPAQUE_ALPHA_THRESHOLD: u8 = 250;
/// Per-channel distance from the corner seed color still counted as matte
pub const DEFAULT_BACKGROUND_TOLERANCE: u8 = 8;

// Sheet geometry
/// Edge length of terrain and object tiles
pub const TERRAIN_TILE_SIZE: u32 = 16;
/// Edge length of one frame on the player sheet
pub const PLAYER_FRAME_SIZE: u32 = 48;
/// Edge length of one frame on the slime sheet
pub const SLIME_FRAME_SIZE: u32 = 32;
/// Edge length of emitted character portraits
pub const PORTRAIT_SIZE: u32 = 32;

// Water tint: reduce warm channels, lift blue
/// Red channel multiplier
pub const TINT_RED_SCALE: f64 = 0.55;
/// Green channel multiplier
pub const TINT_GREEN_SCALE: f64 = 0.70;
/// Blue channel multiplier
pub const TINT_BLUE_SCALE: f64 = 1.55;
/// Offset added to blue before its intermediate clamp
pub const TINT_BLUE_OFFSET: f64 = 35.0;
/// Lift applied to every channel after scaling
pub const TINT_LIFT: u32 = 8;

// Water selection
/// Minimum solid coverage for a water candidate
pub const WATER_MIN_COVERAGE: f64 = 0.35;
/// Weight of the blue-lean score
pub const WATER_BLUE_WEIGHT: f64 = 2.0;
/// Weight of saturation
pub const WATER_SATURATION_WEIGHT: f64 = 80.0;
/// Weight of brightness
pub const WATER_BRIGHTNESS_WEIGHT: f64 = 0.25;

// Rock selection
/// Minimum solid coverage for a rock candidate
pub const ROCK_MIN_COVERAGE: f64 = 0.5;
/// Saturation must stay below this for a rock candidate
pub const ROCK_MAX_SATURATION: f64 = 0.30;
/// Brightness must exceed this for a rock candidate
pub const ROCK_MIN_BRIGHTNESS: f64 = 30.0;
/// Scale applied to (1 - saturation) in the primary rock key
pub const ROCK_GRAYNESS_SCALE: f64 = 100.0;

// Curated indices on the decor sheet
/// Grass tiles; the first also serves as the matte for object tiles
pub const GRASS_TILES: [usize; 4] = [0, 1, 2, 3];
/// Clearing tiles
pub const CLEARING_TILES: [usize; 7] = [4, 5, 7, 12, 13, 14, 15];
/// Path tiles
pub const PATH_TILES: [usize; 1] = [6];

// Curated indices on the objects sheet, ordered TL, TR, BL, BR
/// Tree quadrants
pub const TREE_QUADRANTS: [usize; 4] = [118, 119, 134, 135];
/// Stump quadrants
pub const STUMP_QUADRANTS: [usize; 4] = [122, 123, 138, 139];

// Input layout relative to the sprite pack root
/// Water sheets searched for the best water tile
pub const WATER_SHEETS: [&str; 6] = [
    "tilesets/water1.png",
    "tilesets/water2.png",
    "tilesets/water3.png",
    "tilesets/water4.png",
    "tilesets/water5.png",
    "tilesets/water6.png",
];
/// Decor sheet holding grass, clearing and path tiles
pub const DECOR_SHEET: &str = "tilesets/decor_16x16.png";
/// Objects sheet holding rocks, trees and stumps
pub const OBJECTS_SHEET: &str = "objects/objects.png";
/// Player character sheet
pub const PLAYER_SHEET: &str = "characters/player.png";
/// Slime character sheet
pub const SLIME_SHEET: &str = "characters/slime.png";

// Output layout relative to the output root
/// Default output root
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets";
/// Assembled tileset strip
pub const TILESET_OUTPUT: &str = "tiles/mystic_woods_tileset16.png";
/// Leader portrait
pub const LEADER_OUTPUT: &str = "chars/leader32.png";
/// Scout portrait
pub const SCOUT_OUTPUT: &str = "chars/scout32.png";

// Progress display
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

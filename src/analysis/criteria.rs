//! Eligibility predicates and ranking keys for ambiguous asset classes

use crate::analysis::statistics::TileStat;
use crate::io::configuration::{
    ROCK_GRAYNESS_SCALE, ROCK_MAX_SATURATION, ROCK_MIN_BRIGHTNESS, ROCK_MIN_COVERAGE,
    WATER_BLUE_WEIGHT, WATER_BRIGHTNESS_WEIGHT, WATER_MIN_COVERAGE, WATER_SATURATION_WEIGHT,
};

/// Water candidates need enough solid pixels to read as a surface
pub fn is_water_candidate(stat: &TileStat) -> bool {
    stat.alpha_cov > WATER_MIN_COVERAGE
}

/// Favors strong blue lean and saturation over raw brightness
pub fn water_score(stat: &TileStat) -> f64 {
    stat.blue * WATER_BLUE_WEIGHT
        + stat.sat * WATER_SATURATION_WEIGHT
        + stat.bright * WATER_BRIGHTNESS_WEIGHT
}

/// Rock candidates are mostly solid, desaturated and not too dark
pub fn is_rock_candidate(stat: &TileStat) -> bool {
    stat.alpha_cov > ROCK_MIN_COVERAGE
        && stat.sat < ROCK_MAX_SATURATION
        && stat.bright > ROCK_MIN_BRIGHTNESS
}

/// Grayness first, brightness as tiebreak
pub fn rock_key(stat: &TileStat) -> (f64, f64) {
    ((1.0 - stat.sat) * ROCK_GRAYNESS_SCALE, stat.bright)
}

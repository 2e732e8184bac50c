use crate::io::configuration::{PLAYER_FRAME_SIZE, PORTRAIT_SIZE, SLIME_FRAME_SIZE};
use crate::io::error::{PipelineError, Result, invalid_parameter};
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Crop the first frame of a character sheet and scale it to a portrait
///
/// The frame is the `frame_size` square at the sheet origin. Scaling uses
/// nearest-neighbour sampling so pixel art stays crisp.
///
/// # Errors
///
/// Returns an error if:
/// - `frame_size` or `portrait_size` is zero
/// - The sheet is smaller than one frame
pub fn build_portrait(sheet: &RgbaImage, frame_size: u32, portrait_size: u32) -> Result<RgbaImage> {
    if frame_size == 0 {
        return Err(invalid_parameter(
            "frame_size",
            &frame_size,
            &"frames must be at least one pixel wide",
        ));
    }
    if portrait_size == 0 {
        return Err(invalid_parameter(
            "portrait_size",
            &portrait_size,
            &"portraits must be at least one pixel wide",
        ));
    }
    if sheet.width() < frame_size || sheet.height() < frame_size {
        return Err(PipelineError::InvalidSourceData {
            reason: format!(
                "sheet of {}x{} cannot hold a {frame_size}px frame",
                sheet.width(),
                sheet.height()
            ),
        });
    }

    let frame = imageops::crop_imm(sheet, 0, 0, frame_size, frame_size).to_image();
    if frame_size == portrait_size {
        Ok(frame)
    } else {
        Ok(imageops::resize(
            &frame,
            portrait_size,
            portrait_size,
            FilterType::Nearest,
        ))
    }
}

/// Leader portrait: first 48px player frame scaled down to 32px
///
/// # Errors
///
/// Returns an error if the sheet is smaller than one player frame
pub fn leader_portrait(player_sheet: &RgbaImage) -> Result<RgbaImage> {
    build_portrait(player_sheet, PLAYER_FRAME_SIZE, PORTRAIT_SIZE)
}

/// Scout portrait: first 32px slime frame as-is
///
/// # Errors
///
/// Returns an error if the sheet is smaller than one slime frame
pub fn scout_portrait(slime_sheet: &RgbaImage) -> Result<RgbaImage> {
    build_portrait(slime_sheet, SLIME_FRAME_SIZE, PORTRAIT_SIZE)
}

//! Sprite sheet loading and PNG export

use crate::io::error::{PipelineError, Result, WithContext};
use crate::spatial::{SheetId, SpriteSheet};
use image::RgbaImage;
use std::path::Path;

/// Confirm every required input exists before any work starts
///
/// # Errors
///
/// Returns [`PipelineError::MissingInput`] for the first absent path
pub fn require_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    match paths.iter().map(AsRef::as_ref).find(|path| !path.is_file()) {
        Some(missing) => Err(PipelineError::MissingInput {
            path: missing.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Decode an image file into RGBA pixels
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read or decoded
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PipelineError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let img = image::open(path).with_path(path)?;
    Ok(img.to_rgba8())
}

/// Load an image file as a tile grid
///
/// # Errors
///
/// Returns an error if the image cannot be loaded or `tile_size` is zero
pub fn load_sheet<P: AsRef<Path>>(id: SheetId, path: P, tile_size: u32) -> Result<SpriteSheet> {
    let image = load_rgba(&path)?;
    log::debug!(
        "loaded {id} from '{}' ({}x{})",
        path.as_ref().display(),
        image.width(),
        image.height()
    );
    SpriteSheet::new(id, image, tile_size)
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

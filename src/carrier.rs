//! Carrier image files: load to an RGB8 pixel grid, save losslessly.
//!
//! Kept apart from the embedding core so the core only ever sees channel
//! buffers. A single recompressed low bit destroys the payload, so saving to
//! a lossy format is the caller's mistake to avoid — write PNG.

use anyhow::{Context, Result, bail};
use image::RgbImage;
use std::path::Path;

/// Loads a carrier image and normalizes it to 3-channel 8-bit RGB.
pub fn load(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        bail!("image file '{}' does not exist", path.display());
    }

    let image = image::open(path)
        .with_context(|| format!("failed to decode image '{}'", path.display()))?;

    Ok(image.to_rgb8())
}

/// Writes the image to `path`. The format is chosen from the extension;
/// it must be lossless (PNG, BMP, TIFF) or the hidden data will not survive.
pub fn save(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("failed to write image '{}'", path.display()))
}

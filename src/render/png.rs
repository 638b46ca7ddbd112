//! PNG output.

use std::path::Path;

use image::RgbImage;

use crate::error::{Result, SwatchError};

/// Write an RGB image to a PNG file.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SwatchError::OutputWrite {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote png");
    Ok(())
}

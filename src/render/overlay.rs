//! Custom image compositing.
//!
//! Prepends a user-supplied image to the left of a strip collage, scaled to
//! the collage height.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::{Result, SwatchError};
use crate::types::{ColorSequence, Colour};

use super::StripRenderer;

/// A rendered collage, plus the overlay failure if compositing was skipped.
#[derive(Debug)]
pub struct Collage {
    pub image: RgbImage,
    pub overlay_error: Option<SwatchError>,
}

/// Load an overlay image from disk.
pub fn load_overlay(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SwatchError::OverlayLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Width of an overlay of `width` x `height` once scaled to `target_height`.
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> Option<u32> {
    if height == 0 {
        return None;
    }
    let w = u64::from(width) * u64::from(target_height) / u64::from(height);
    u32::try_from(w).ok().filter(|&w| w > 0)
}

/// Place `overlay`, resized to the collage height, flush left of `strips`.
///
/// Any alpha channel on the overlay is discarded.
pub fn composite_overlay(strips: &RgbImage, overlay: &DynamicImage) -> Result<RgbImage> {
    composite_overlay_from(strips, overlay, PathBuf::new())
}

fn composite_overlay_from(
    strips: &RgbImage,
    overlay: &DynamicImage,
    path: PathBuf,
) -> Result<RgbImage> {
    let height = strips.height();
    let width = scaled_width(overlay.width(), overlay.height(), height).ok_or_else(|| {
        SwatchError::OverlayLoad {
            path,
            message: format!(
                "cannot scale a {}x{} image to height {}",
                overlay.width(),
                overlay.height(),
                height
            ),
        }
    })?;

    tracing::debug!(
        from = ?(overlay.width(), overlay.height()),
        to = ?(width, height),
        "resizing overlay"
    );

    let resized = imageops::resize(&overlay.to_rgb8(), width, height, FilterType::Lanczos3);

    let mut combined = RgbImage::from_pixel(width + strips.width(), height, Colour::WHITE.to_pixel());
    imageops::replace(&mut combined, &resized, 0, 0);
    imageops::replace(&mut combined, strips, i64::from(width), 0);

    Ok(combined)
}

/// Render a collage and, when given, prepend the overlay at `overlay_path`.
///
/// Overlay failures do not fail the render: the plain collage is returned
/// and the error is handed back in `Collage::overlay_error`.
pub fn render_collage(
    colors: &ColorSequence,
    canvas_size: u32,
    overlay_path: Option<&Path>,
) -> Result<Collage> {
    let strips = StripRenderer::new(canvas_size).render(colors)?;

    let Some(path) = overlay_path else {
        return Ok(Collage {
            image: strips,
            overlay_error: None,
        });
    };

    let composited = load_overlay(path)
        .and_then(|overlay| composite_overlay_from(&strips, &overlay, path.to_path_buf()));

    match composited {
        Ok(image) => Ok(Collage {
            image,
            overlay_error: None,
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping overlay");
            Ok(Collage {
                image: strips,
                overlay_error: Some(e),
            })
        }
    }
}

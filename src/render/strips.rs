//! Strip collage renderer.
//!
//! Paints each colour as a solid strip over a white canvas, casting a
//! fading drop shadow onto whatever lies just left of the strip.

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::types::{ColorSequence, Colour};

use super::layout::{StripLayout, StripRect};

/// Default collage canvas side in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 1200;

/// Renders a colour sequence as a two-row strip collage.
#[derive(Debug, Clone, Copy)]
pub struct StripRenderer {
    canvas_size: u32,
}

impl Default for StripRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}

impl StripRenderer {
    pub fn new(canvas_size: u32) -> Self {
        Self { canvas_size }
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Render the collage.
    ///
    /// All colours are resolved before anything is drawn.
    pub fn render(&self, colors: &ColorSequence) -> Result<RgbImage> {
        let layout = StripLayout::new(colors.len(), self.canvas_size)?;
        let resolved = colors.resolve()?;

        tracing::debug!(
            count = layout.count(),
            size = layout.size(),
            cols_per_row = layout.cols_per_row(),
            shadow_width = layout.shadow_width(),
            "rendering strip collage"
        );

        let size = self.canvas_size;
        let mut canvas = RgbImage::from_pixel(size, size, Colour::WHITE.to_pixel());

        for (rect, colour) in layout.strips().zip(resolved) {
            tracing::trace!(index = rect.index, %colour, ?rect, "strip");
            draw_shadow(&mut canvas, &layout, &rect);
            fill_rect(&mut canvas, &rect, colour.to_pixel());
        }

        Ok(canvas)
    }
}

/// Darken the band left of `rect`, blending towards black.
///
/// Blends against pixels already on the canvas, so strips must be drawn
/// left to right.
fn draw_shadow(canvas: &mut RgbImage, layout: &StripLayout, rect: &StripRect) {
    let shadow_width = layout.shadow_width();
    let start = rect.x0.saturating_sub(shadow_width);

    for sx in start..rect.x0 {
        let alpha = layout.shadow_alpha(rect.x0 - sx);
        if alpha == 0 {
            continue;
        }
        for sy in rect.y0..rect.y1 {
            let pixel = canvas.get_pixel_mut(sx, sy);
            *pixel = blend_black(*pixel, alpha);
        }
    }
}

/// Alpha-blend black over `pixel` with `alpha` out of 255.
pub fn blend_black(pixel: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let keep = 1.0 - alpha as f64 / 255.0;
    Rgb(pixel.0.map(|c| (keep * c as f64).round() as u8))
}

fn fill_rect(canvas: &mut RgbImage, rect: &StripRect, pixel: Rgb<u8>) {
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

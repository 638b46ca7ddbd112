//! Strip collage layout.
//!
//! Places N colour strips on a square canvas in two rows, left to right.
//! The arithmetic is pure: the same count and canvas size always give the
//! same rectangles.

use crate::error::{Result, SwatchError};

/// Number of rows in a strip collage.
pub const NUM_ROWS: u32 = 2;

/// Peak shadow opacity, out of 255.
pub const SHADOW_PEAK_ALPHA: f64 = 80.0;

/// Minimum shadow band width in pixels.
pub const MIN_SHADOW_WIDTH: u32 = 6;

/// A strip's placement. Spans `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripRect {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl StripRect {
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Layout of a two-row strip collage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    count: usize,
    size: u32,
    cols_per_row: u32,
    strip_width: u32,
    strip_height: u32,
}

impl StripLayout {
    /// Compute the layout for `count` strips on a `size` x `size` canvas.
    pub fn new(count: usize, size: u32) -> Result<Self> {
        if count == 0 {
            return Err(SwatchError::empty("no colours provided in JSON"));
        }

        let cols_per_row = u32::try_from(count.div_ceil(NUM_ROWS as usize)).map_err(|_| {
            SwatchError::Config {
                message: format!("too many colours for one collage: {}", count),
                help: None,
            }
        })?;

        Ok(Self {
            count,
            size,
            cols_per_row,
            strip_width: size / cols_per_row,
            strip_height: size / NUM_ROWS,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cols_per_row(&self) -> u32 {
        self.cols_per_row
    }

    pub fn strip_width(&self) -> u32 {
        self.strip_width
    }

    pub fn strip_height(&self) -> u32 {
        self.strip_height
    }

    /// Width of the shadow band cast left of each strip.
    pub fn shadow_width(&self) -> u32 {
        MIN_SHADOW_WIDTH.max(self.strip_width / 8)
    }

    /// Placement of strip `index`.
    ///
    /// The bottom row always reaches the canvas bottom. The last strip of a
    /// row reaches the right edge, except on the top row when the count is
    /// even: there it keeps its computed width.
    pub fn strip(&self, index: usize) -> StripRect {
        let i = index as u32;
        let row = i / self.cols_per_row;
        let col = i % self.cols_per_row;

        let last_in_row = col == self.cols_per_row - 1 || index == self.count - 1;
        let top_row_even = row == 0 && self.count % 2 == 0;

        let x0 = col * self.strip_width;
        let x1 = if last_in_row && !top_row_even {
            self.size
        } else {
            (col + 1) * self.strip_width
        };

        let y0 = row * self.strip_height;
        let y1 = if row < NUM_ROWS - 1 {
            (row + 1) * self.strip_height
        } else {
            self.size
        };

        StripRect {
            index,
            row,
            col,
            x0,
            x1,
            y0,
            y1,
        }
    }

    /// All strips in draw order.
    pub fn strips(&self) -> impl Iterator<Item = StripRect> + '_ {
        (0..self.count).map(move |i| self.strip(i))
    }

    /// Shadow opacity (0..=80 out of 255) at `distance` pixels left of a strip.
    ///
    /// `distance` runs from 1 (adjacent) to `shadow_width` (fully faded).
    pub fn shadow_alpha(&self, distance: u32) -> u8 {
        shadow_alpha(distance, self.shadow_width())
    }
}

/// Linear shadow falloff: 80 next to the strip, 0 at the far edge of the band.
pub fn shadow_alpha(distance: u32, shadow_width: u32) -> u8 {
    if shadow_width == 0 || distance >= shadow_width {
        return 0;
    }
    let t = 1.0 - distance as f64 / shadow_width as f64;
    (SHADOW_PEAK_ALPHA * t).round() as u8
}

//! Rendering module for swatch.
//!
//! This module turns colour sequences into images: strip collages (with an
//! optional prepended custom image) and one-per-colour swatches.

mod layout;
mod overlay;
mod png;
mod strips;
mod swatch;

pub use layout::{shadow_alpha, StripLayout, StripRect, NUM_ROWS};
pub use overlay::{composite_overlay, load_overlay, render_collage, scaled_width, Collage};
pub use png::write_png;
pub use strips::{blend_black, StripRenderer, DEFAULT_CANVAS_SIZE};
pub use swatch::{
    manifest_text, swatch_file_name, SwatchGenerator, SwatchReport, DEFAULT_SWATCH_SIZE,
    MANIFEST_FILENAME,
};

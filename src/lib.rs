//! swatch - Colour list renderer
//!
//! A library for turning a JSON list of colours into images: one solid
//! swatch per colour, or a single two-row strip collage with drop shadows
//! and an optional custom image on the front.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{Result, SwatchError};
pub use prompt::{Prompt, PromptInput, PromptMode, TerminalPrompt};
pub use render::{
    composite_overlay, load_overlay, render_collage, write_png, Collage, StripLayout, StripRect,
    StripRenderer, SwatchGenerator, SwatchReport,
};
pub use types::{ColorSequence, ColorSpec, Colour};

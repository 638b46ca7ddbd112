//! Core domain types for swatch.
//!
//! - `Colour` - opaque RGB colour values resolved from text
//! - `ColorSpec` / `ColorSequence` - the ordered colour list supplied by the user

mod colour;
mod sequence;

pub use colour::Colour;
pub use sequence::{ColorSequence, ColorSpec};

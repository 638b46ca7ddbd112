//! Strips command implementation.
//!
//! Renders the two-row strip collage and saves it as a single PNG.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::prompt::PromptMode;
use crate::render::{render_collage, write_png};
use crate::types::ColorSequence;

use super::{ensure_output_dir, gather_input, InputArgs};

/// Compose all colours into a strip collage
#[derive(Args, Debug, Clone, Default)]
pub struct StripsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Custom image to add to the front (left) of the collage
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Collage canvas side in pixels (default from config: 1200)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,
}

/// Returns the path of the written collage.
pub fn run(args: StripsArgs, config: &Config, printer: &Printer) -> Result<PathBuf> {
    let answers = gather_input(&args.input, args.overlay.clone(), PromptMode::Collage, config)?;
    let colors = ColorSequence::from_json(&answers.json)?;

    ensure_output_dir(&answers.output_dir)?;

    let size = args.size.unwrap_or(config.canvas_size);
    printer.status(
        "Rendering",
        &format!(
            "{} as strips ({}x{})",
            plural(colors.len(), "colour", "colours"),
            size,
            size
        ),
    );

    let collage = render_collage(&colors, size, answers.overlay.as_deref())?;
    if let Some(err) = &collage.overlay_error {
        printer.error("Error", &err.to_string());
    } else if let Some(path) = &answers.overlay {
        printer.info("Added", &display_path(path));
    }

    let output_path = answers.output_dir.join(&config.collage_name);
    write_png(&collage.image, &output_path)?;

    printer.success(
        "Saved",
        &format!(
            "{} ({}x{})",
            printer.cyan(&display_path(&output_path)),
            collage.image.width(),
            collage.image.height()
        ),
    );

    Ok(output_path)
}

//! Colors command implementation.
//!
//! Writes one solid PNG per colour and a manifest of the file names.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::prompt::PromptMode;
use crate::render::{SwatchGenerator, SwatchReport};
use crate::types::ColorSequence;

use super::{ensure_output_dir, gather_input, InputArgs};

/// Write one solid image per colour
#[derive(Args, Debug, Clone, Default)]
pub struct ColorsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Side of each swatch image in pixels (default from config: 3600)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,
}

pub fn run(args: ColorsArgs, config: &Config, printer: &Printer) -> Result<SwatchReport> {
    let answers = gather_input(&args.input, None, PromptMode::Swatches, config)?;
    let colors = ColorSequence::from_json(&answers.json)?;

    ensure_output_dir(&answers.output_dir)?;

    let size = args.size.unwrap_or(config.swatch_size);
    printer.status(
        "Rendering",
        &format!(
            "{} ({}x{})",
            plural(colors.len(), "swatch", "swatches"),
            size,
            size
        ),
    );

    let report = SwatchGenerator::new(size)
        .with_manifest_name(config.manifest_name.clone())
        .generate(&colors, &answers.output_dir)?;

    for name in &report.written {
        printer.info("Wrote", name);
    }
    for failure in &report.failures {
        printer.error("Error", &failure.to_string());
    }
    if !report.failures.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "{} could not be written",
                plural(report.failures.len(), "image", "images")
            ),
        );
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {} (manifest: {})",
            plural(report.written.len(), "image", "images"),
            printer.cyan(&display_path(&answers.output_dir)),
            display_path(&report.manifest)
        ),
    );

    Ok(report)
}

pub mod colors;
pub mod completions;
pub mod strips;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::{Result, SwatchError};
use crate::prompt::{Prompt, PromptInput, PromptMode, TerminalPrompt};

/// swatch - render colour lists into swatch images and strip collages
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./swatch.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one solid image per colour, plus a manifest of file names
    Colors(colors::ColorsArgs),

    /// Compose all colours into a two-row strip collage
    Strips(strips::StripsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where the colour list comes from. With neither flag, the user is prompted.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON array of colour strings
    #[arg(long, conflicts_with = "input")]
    pub json: Option<String>,

    /// File holding the JSON array ("-" for stdin)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Collect the JSON text, output folder and overlay path for a run.
///
/// Flags win over prompt answers, which win over the config.
pub(crate) fn gather_input(
    args: &InputArgs,
    overlay: Option<PathBuf>,
    mode: PromptMode,
    config: &Config,
) -> Result<PromptInput> {
    let json = match (&args.json, &args.input) {
        (Some(json), _) => Some(json.clone()),
        (None, Some(path)) => Some(read_input(path)?),
        (None, None) => None,
    };

    let mut answers = match json {
        Some(json) => PromptInput {
            json,
            output_dir: config.output.clone(),
            overlay: None,
        },
        None => {
            let stdin = io::stdin();
            let mut prompt = TerminalPrompt::new(stdin.lock(), io::stderr());
            prompt.prompt(mode, &config.output)?
        }
    };

    if let Some(output) = &args.output {
        answers.output_dir = output.clone();
    }
    if overlay.is_some() {
        answers.overlay = overlay;
    }

    Ok(answers)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return Ok(io::read_to_string(io::stdin())?);
    }
    fs::read_to_string(path).map_err(|e| SwatchError::InputParse {
        message: format!("Failed to read {}: {}", path.display(), e),
    })
}

/// Create the output directory if needed.
pub(crate) fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| SwatchError::DirectoryCreate {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

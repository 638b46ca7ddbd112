//! Interactive input.
//!
//! When no colours are passed on the command line, the user is asked for
//! the JSON, the output folder and (for collages) an optional custom image.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SwatchError};

/// Which command is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Swatches,
    Collage,
}

/// Answers collected from one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    pub json: String,
    pub output_dir: PathBuf,
    pub overlay: Option<PathBuf>,
}

/// Source of interactive answers.
pub trait Prompt {
    /// Ask once. Blocks until answered; no JSON maps to `EmptyInput`.
    fn prompt(&mut self, mode: PromptMode, default_output: &Path) -> Result<PromptInput>;
}

/// Line-based prompt over a reader/writer pair (normally stdin/stderr).
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Read lines until a blank line follows complete JSON, or EOF.
    ///
    /// Blank lines inside an unfinished document are kept.
    fn read_block(&mut self) -> Result<String> {
        let mut block = String::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                if block.is_empty() {
                    continue;
                }
                if is_complete_json(&block) {
                    break;
                }
            }
            block.push_str(&line);
            block.push('\n');
        }
        Ok(block)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default().trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn prompt(&mut self, mode: PromptMode, default_output: &Path) -> Result<PromptInput> {
        writeln!(
            self.output,
            "Paste your JSON string below (finish with an empty line, or end of input):"
        )?;
        let json = self.read_block()?;
        if json.trim().is_empty() {
            return Err(SwatchError::empty("no JSON string was provided"));
        }

        let folder = self.ask(&format!(
            "Save images to folder [{}]:",
            default_output.display()
        ))?;
        let output_dir = if folder.is_empty() {
            default_output.to_path_buf()
        } else {
            PathBuf::from(folder)
        };

        let overlay = match mode {
            PromptMode::Swatches => None,
            PromptMode::Collage => {
                let path = self.ask("Optional: add custom image to front (blank for none):")?;
                (!path.is_empty()).then(|| PathBuf::from(path))
            }
        };

        Ok(PromptInput {
            json,
            output_dir,
            overlay,
        })
    }
}

fn is_complete_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

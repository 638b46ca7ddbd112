use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON: {message}")]
    #[diagnostic(
        code(swatch::input),
        help("Paste a JSON array of colour strings, e.g. [\"#FF0000\", \"teal\"]")
    )]
    InputParse { message: String },

    #[error("No colours: {message}")]
    #[diagnostic(code(swatch::empty))]
    EmptyInput { message: String },

    #[error("Invalid colour: {spec}")]
    #[diagnostic(
        code(swatch::colour),
        help("Use #RGB, #RRGGBB, rgb(r, g, b), hsl(h, s%, l%) or a CSS colour name")
    )]
    InvalidColor { spec: String },

    #[error("Could not create directory {path}: {message}")]
    #[diagnostic(code(swatch::directory))]
    DirectoryCreate { path: PathBuf, message: String },

    #[error("Could not add custom image {path}: {message}")]
    #[diagnostic(code(swatch::overlay))]
    OverlayLoad { path: PathBuf, message: String },

    #[error("Could not write {path}: {message}")]
    #[diagnostic(code(swatch::write))]
    OutputWrite { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(swatch::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SwatchError {
    pub(crate) fn empty(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwatchError>;

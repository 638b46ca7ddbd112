//! Per-colour swatch images.
//!
//! Writes one solid image per colour, named so that a plain lexicographic
//! sort keeps input order, plus a manifest of the written names.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{Result, SwatchError};
use crate::types::{ColorSequence, ColorSpec};

use super::write_png;

/// Default swatch side in pixels.
pub const DEFAULT_SWATCH_SIZE: u32 = 3600;

/// Default manifest file name.
pub const MANIFEST_FILENAME: &str = "image_filenames.txt";

/// File name for the 0-based `index`th of `total` swatches.
///
/// The 1-based index is zero-padded to the digit count of `total`.
pub fn swatch_file_name(index: usize, total: usize, spec: &ColorSpec) -> String {
    let width = total.to_string().len();
    format!("{:0width$}_{}.png", index + 1, spec.text, width = width)
}

/// Manifest body: one name per line, each newline-terminated.
pub fn manifest_text(names: &[String]) -> String {
    names.iter().map(|n| format!("{}\n", n)).collect()
}

/// Outcome of a swatch run.
#[derive(Debug)]
pub struct SwatchReport {
    /// Names written, in input order.
    pub written: Vec<String>,
    /// Files that could not be written.
    pub failures: Vec<SwatchError>,
    /// Where the manifest was written.
    pub manifest: PathBuf,
}

/// Generates one solid image per colour.
#[derive(Debug, Clone)]
pub struct SwatchGenerator {
    size: u32,
    manifest_name: String,
}

impl Default for SwatchGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCH_SIZE)
    }
}

impl SwatchGenerator {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            manifest_name: MANIFEST_FILENAME.to_string(),
        }
    }

    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Write every swatch and the manifest into `dir`.
    ///
    /// Colours are resolved up front; one bad colour fails the whole call
    /// before anything is written. A failed file write is recorded and the
    /// remaining swatches still go out.
    pub fn generate(&self, colors: &ColorSequence, dir: &Path) -> Result<SwatchReport> {
        let resolved = colors.resolve()?;
        let total = colors.len();

        let mut written = Vec::with_capacity(total);
        let mut failures = Vec::new();

        for (index, (spec, colour)) in colors.iter().zip(resolved).enumerate() {
            let name = swatch_file_name(index, total, spec);
            let path = dir.join(&name);
            tracing::debug!(%spec, %colour, file = %name, "swatch");

            let image = RgbImage::from_pixel(self.size, self.size, colour.to_pixel());
            match write_png(&image, &path) {
                Ok(()) => written.push(name),
                Err(e) => failures.push(e),
            }
        }

        let manifest = dir.join(&self.manifest_name);
        fs::write(&manifest, manifest_text(&written)).map_err(|e| SwatchError::OutputWrite {
            path: manifest.clone(),
            message: format!("Could not write image file names: {}", e),
        })?;

        Ok(SwatchReport {
            written,
            failures,
            manifest,
        })
    }
}

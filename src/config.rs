//! Project config (swatch.yaml) parsing.
//!
//! The config holds the defaults used when the command line and the prompt
//! leave something out: output folder, image sizes and output file names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::render::{DEFAULT_CANVAS_SIZE, DEFAULT_SWATCH_SIZE, MANIFEST_FILENAME};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Default collage file name.
pub const COLLAGE_FILENAME: &str = "color_strips.png";

/// Settings loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder images are written to.
    pub output: PathBuf,

    /// Side of each per-colour swatch image.
    pub swatch_size: u32,

    /// Side of the strip collage canvas.
    pub canvas_size: u32,

    /// Name of the swatch manifest file.
    pub manifest_name: String,

    /// Name of the collage image file.
    pub collage_name: String,
}

fn default_output() -> PathBuf {
    PathBuf::from("./images")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            swatch_size: DEFAULT_SWATCH_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            manifest_name: MANIFEST_FILENAME.to_string(),
            collage_name: COLLAGE_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Load config from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
            help: None,
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| SwatchError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Use `explicit` if given, else `swatch.yaml` in `dir` if present, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("swatch_size", self.swatch_size),
            ("canvas_size", self.canvas_size),
        ] {
            if value == 0 {
                return Err(SwatchError::Config {
                    message: format!("{} must be greater than zero", name),
                    help: None,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("./images"));
        assert_eq!(config.swatch_size, 3600);
        assert_eq!(config.canvas_size, 1200);
        assert_eq!(config.manifest_name, "image_filenames.txt");
        assert_eq!(config.collage_name, "color_strips.png");
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("output: renders\ncanvas_size: 800").unwrap();
        assert_eq!(config.output, PathBuf::from("renders"));
        assert_eq!(config.canvas_size, 800);
        assert_eq!(config.swatch_size, 3600);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_zero_size() {
        let err = Config::parse("swatch_size: 0").unwrap_err();
        assert!(matches!(err, SwatchError::Config { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        assert!(Config::parse("canvas_size: [1, 2").is_err());
        assert!(Config::parse("canvas_size: big").is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_then_local() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "canvas_size: 600").unwrap();
        assert_eq!(Config::resolve(None, dir.path()).unwrap().canvas_size, 600);

        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "canvas_size: 300").unwrap();
        assert_eq!(
            Config::resolve(Some(&other), dir.path()).unwrap().canvas_size,
            300
        );
    }

    #[test]
    fn test_resolve_missing_explicit_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }
}

//! Ordered colour lists parsed from pasted JSON.
//!
//! Two shapes are accepted: a flat array of colour strings, or a palette
//! builder export (`{"palette": {"baseColors": [...], "variations": {...}}}`),
//! which is flattened to its unique colours.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

use crate::error::{Result, SwatchError};

use super::Colour;

/// A colour as the user wrote it.
///
/// The text is kept verbatim because it ends up in output file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec {
    pub text: String,
}

impl ColorSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Resolve to an RGB colour.
    pub fn resolve(&self) -> Result<Colour> {
        Colour::parse(&self.text)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A non-empty, ordered list of colour specifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSequence {
    specs: Vec<ColorSpec>,
}

impl ColorSequence {
    /// Build a sequence, rejecting an empty list.
    pub fn new(specs: Vec<ColorSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(SwatchError::empty("no colours provided in JSON"));
        }
        Ok(Self { specs })
    }

    /// Parse a JSON array of colour strings, or a palette builder export.
    pub fn from_json(source: &str) -> Result<Self> {
        let trimmed = source.trim_start();
        if trimmed.is_empty() {
            return Err(SwatchError::empty("no JSON string was provided"));
        }

        let texts = if trimmed.starts_with('{') {
            parse_json::<PaletteExport>(source)?.palette.flatten()
        } else {
            parse_json::<Vec<String>>(source)?
        };

        Self::new(texts.into_iter().map(ColorSpec::new).collect())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[ColorSpec] {
        &self.specs
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorSpec> {
        self.specs.iter()
    }

    /// Resolve every entry, failing on the first unresolvable colour.
    pub fn resolve(&self) -> Result<Vec<Colour>> {
        self.specs.iter().map(ColorSpec::resolve).collect()
    }
}

fn parse_json<'a, T: Deserialize<'a>>(source: &'a str) -> Result<T> {
    serde_json::from_str(source).map_err(|e| SwatchError::InputParse {
        message: e.to_string(),
    })
}

/// Palette builder export document.
#[derive(Debug, Deserialize)]
struct PaletteExport {
    palette: PaletteDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteDocument {
    base_colors: Vec<BaseColour>,
    #[serde(default)]
    variations: HashMap<String, Variations>,
}

#[derive(Debug, Deserialize)]
struct BaseColour {
    id: String,
    hex: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Variations {
    tints: Vec<String>,
    shades: Vec<String>,
    analogous: Vec<String>,
    complementary: Vec<String>,
    triadic: Vec<String>,
    square: Vec<String>,
    tetradic: Vec<String>,
    split_complementary: Vec<String>,
}

impl Variations {
    fn iter(&self) -> impl Iterator<Item = &String> {
        self.tints
            .iter()
            .chain(&self.shades)
            .chain(&self.analogous)
            .chain(&self.complementary)
            .chain(&self.triadic)
            .chain(&self.square)
            .chain(&self.tetradic)
            .chain(&self.split_complementary)
    }
}

impl PaletteDocument {
    /// Each base colour followed by its variations, first occurrence wins.
    ///
    /// Duplicates are matched case-insensitively.
    fn flatten(self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for base in &self.base_colors {
            let variations = self.variations.get(&base.id);
            let colours = std::iter::once(&base.hex)
                .chain(variations.into_iter().flat_map(Variations::iter));
            for colour in colours {
                if seen.insert(colour.trim().to_ascii_lowercase()) {
                    out.push(colour.clone());
                }
            }
        }

        tracing::debug!(
            base_colours = self.base_colors.len(),
            colours = out.len(),
            "flattened palette export"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_preserves_order() {
        let seq = ColorSequence::from_json(r##"["#FF0000", "teal", "#00f"]"##).unwrap();
        let texts: Vec<&str> = seq.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["#FF0000", "teal", "#00f"]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_from_json_multiline() {
        let seq = ColorSequence::from_json("[\n  \"red\",\n  \"blue\"\n]\n").unwrap();
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_from_json_empty_array() {
        let err = ColorSequence::from_json("[]").unwrap_err();
        assert!(matches!(err, SwatchError::EmptyInput { .. }));
    }

    #[test]
    fn test_from_json_blank_input() {
        let err = ColorSequence::from_json("   \n").unwrap_err();
        assert!(matches!(err, SwatchError::EmptyInput { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ColorSequence::from_json("[\"#FF0000\",").unwrap_err();
        assert!(matches!(err, SwatchError::InputParse { .. }));
    }

    #[test]
    fn test_from_json_non_string_element() {
        let err = ColorSequence::from_json("[\"red\", 12]").unwrap_err();
        assert!(matches!(err, SwatchError::InputParse { .. }));

        let err = ColorSequence::from_json("{\"a\": \"red\"}").unwrap_err();
        assert!(matches!(err, SwatchError::InputParse { .. }));
    }

    #[test]
    fn test_from_json_palette_export() {
        let export = r##"{
          "palette": {
            "name": "Color Palette - 1/2/2025",
            "createdAt": "2025-01-02T10:00:00.000Z",
            "baseColors": [
              { "id": "c1", "hex": "#ff0000", "name": "Red" },
              { "id": "c2", "hex": "#0000ff" }
            ],
            "variations": {
              "c1": {
                "tints": ["#ff6666", "#ffcccc"],
                "shades": ["#990000"],
                "analogous": ["#ff0080", "#FF8000"],
                "complementary": ["#00ffff"],
                "triadic": ["#00ff00", "#0000FF"],
                "square": [],
                "tetradic": [],
                "splitComplementary": ["#0080ff"]
              },
              "c2": {
                "tints": ["#6666ff"],
                "shades": ["#000099"],
                "analogous": [],
                "complementary": ["#FFFF00"],
                "triadic": ["#ff0000"],
                "square": [],
                "tetradic": [],
                "splitComplementary": []
              }
            }
          }
        }"##;

        let seq = ColorSequence::from_json(export).unwrap();
        let texts: Vec<&str> = seq.iter().map(|s| s.text.as_str()).collect();

        pretty_assertions::assert_eq!(
            texts,
            vec![
                "#ff0000", "#ff6666", "#ffcccc", "#990000", "#ff0080", "#FF8000", "#00ffff",
                "#00ff00", "#0000FF", "#0080ff", "#6666ff", "#000099", "#FFFF00",
            ]
        );
        assert!(seq.resolve().is_ok());
    }

    #[test]
    fn test_from_json_palette_without_variations() {
        let seq = ColorSequence::from_json(
            r##"{"palette":{"baseColors":[{"id":"a","hex":"#ff0000"},{"id":"b","hex":"#00ff00"}]}}"##,
        )
        .unwrap();
        let texts: Vec<&str> = seq.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["#ff0000", "#00ff00"]);
    }

    #[test]
    fn test_from_json_palette_with_no_base_colours() {
        let err = ColorSequence::from_json(r#"{"palette":{"baseColors":[]}}"#).unwrap_err();
        assert!(matches!(err, SwatchError::EmptyInput { .. }));
    }

    #[test]
    fn test_from_json_object_that_is_not_a_palette() {
        for source in [
            r#"{"colors": ["red", "blue"]}"#,
            r#"{"palette": {"name": "no colours"}}"#,
            r#"{"palette": {"baseColors": ["red"]}}"#,
        ] {
            let err = ColorSequence::from_json(source).unwrap_err();
            assert!(
                matches!(err, SwatchError::InputParse { .. }),
                "{} gave {:?}",
                source,
                err
            );
        }
    }

    #[test]
    fn test_resolve_all_or_nothing() {
        let seq = ColorSequence::from_json(r#"["red", "bogus", "blue"]"#).unwrap();
        match seq.resolve() {
            Err(SwatchError::InvalidColor { spec }) => assert_eq!(spec, "bogus"),
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve() {
        let seq = ColorSequence::from_json(r#"["red", "rgb(0, 0, 255)"]"#).unwrap();
        assert_eq!(
            seq.resolve().unwrap(),
            vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 0, 255)]
        );
    }
}

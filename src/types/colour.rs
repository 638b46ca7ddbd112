//! Colour type and parsing.
//!
//! Resolves the textual colour forms found in pasted palettes: hex codes,
//! `rgb()` / `hsl()` functions and CSS colour names.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use palette::{Hsl, IntoColor, Srgb};

use crate::error::{Result, SwatchError};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Resolve a colour specification.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(spec: &str) -> Result<Self> {
        let s = spec.trim().to_ascii_lowercase();
        let invalid = || SwatchError::InvalidColor {
            spec: spec.to_string(),
        };

        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(invalid);
        }

        if let Some(args) = function_args(&s, &["rgb", "rgba"]) {
            return Self::from_rgb_args(&args).ok_or_else(invalid);
        }

        if let Some(args) = function_args(&s, &["hsl", "hsla"]) {
            return Self::from_hsl_args(&args).ok_or_else(invalid);
        }

        palette::named::from_str(&s)
            .map(|c| Self::rgb(c.red, c.green, c.blue))
            .ok_or_else(invalid)
    }

    /// Parse hex digits (without the leading `#`).
    ///
    /// Supports 3, 4, 6 and 8 digits. Alpha digits are accepted and dropped.
    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 | 4 => {
                let d = |i: usize| {
                    let v = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
                    Some(v << 4 | v)
                };
                Some(Self::rgb(d(0)?, d(1)?, d(2)?))
            }
            6 | 8 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    fn from_rgb_args(args: &[&str]) -> Option<Self> {
        if !(args.len() == 3 || args.len() == 4) {
            return None;
        }

        let channel = |arg: &str| -> Option<u8> {
            if let Some(pct) = arg.strip_suffix('%') {
                let p: f32 = pct.trim().parse().ok()?;
                if !(0.0..=100.0).contains(&p) {
                    return None;
                }
                Some((p * 255.0 / 100.0).round() as u8)
            } else {
                arg.parse().ok()
            }
        };

        Some(Self::rgb(
            channel(args[0])?,
            channel(args[1])?,
            channel(args[2])?,
        ))
    }

    fn from_hsl_args(args: &[&str]) -> Option<Self> {
        if !(args.len() == 3 || args.len() == 4) {
            return None;
        }

        let hue: f32 = args[0].trim_end_matches("deg").parse().ok()?;
        let percent = |arg: &str| -> Option<f32> {
            let p: f32 = arg.strip_suffix('%')?.trim().parse().ok()?;
            (0.0..=100.0).contains(&p).then_some(p / 100.0)
        };

        let hsl: Hsl = Hsl::new(hue.rem_euclid(360.0), percent(args[1])?, percent(args[2])?);
        let rgb: Srgb<f32> = hsl.into_color();

        Some(Self::rgb(
            unit_to_byte(rgb.red),
            unit_to_byte(rgb.green),
            unit_to_byte(rgb.blue),
        ))
    }

    /// Convert to an `image` pixel.
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Split `name(a, b, c)` into its trimmed arguments if `name` is one of `names`.
fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<Vec<&'a str>> {
    let (name, rest) = s.split_once('(')?;
    if !names.contains(&name.trim()) {
        return None;
    }
    let inner = rest.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

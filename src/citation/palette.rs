//! Colors and the three-color citation palette.

use crate::error::CitationError;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color, parsed from and serialized to `#RRGGBB` / `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the cleared-canvas color.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with its alpha multiplied by `opacity` (0.0..=1.0).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CitationError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CitationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// The three colors every decorative and text element is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Panel background, also the color of `0` barcode strips
    pub background: Color,
    /// Borders, side line and logo tint
    pub foreground: Color,
    /// Text, separators and `1` barcode strips
    pub font: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xF3, 0xD7, 0xE6),
            foreground: Color::rgb(0xBF, 0xA8, 0xA8),
            font: Color::rgb(0x5A, 0x55, 0x59),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let c: Color = "#F3D7E6".parse().unwrap();
        assert_eq!(c, Color::rgb(0xF3, 0xD7, 0xE6));
    }

    #[test]
    fn test_parse_rgba_lowercase() {
        let c: Color = "#00000000".parse().unwrap();
        assert_eq!(c, Color::TRANSPARENT);
        let c: Color = "#5a5559".parse().unwrap();
        assert_eq!(c.to_string(), "#5A5559");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("F3D7E6".parse::<Color>().is_err());
        assert!("#F3D7E".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#ÄÄÄ".parse::<Color>().is_err());
    }

    #[test]
    fn test_with_opacity() {
        let c = Color::rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!(c.a, 128);
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    }

    #[test]
    fn test_palette_json() {
        let p: Palette = serde_json::from_str(r##"{"font": "#000000"}"##).unwrap();
        assert_eq!(p.font, Color::rgb(0, 0, 0));
        assert_eq!(p.background, Palette::default().background);

        let json = serde_json::to_string(&Palette::default()).unwrap();
        assert!(json.contains("\"#BFA8A8\""));
    }
}

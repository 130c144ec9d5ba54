//! TTF font measurement and rasterization using ab_glyph.
//!
//! Sizes are em-sizes in pixels (as in a CSS `16px` font string), converted
//! to ab_glyph's height-based scale through the font's units-per-em.

use super::{TextMetrics, Typeface};
use crate::error::{CitationError, Result};
use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use std::path::Path;

/// A TrueType/OpenType face loaded from disk.
pub struct TtfFace {
    name: String,
    font: FontArc,
}

impl TtfFace {
    /// Load a font file. A missing file surfaces as an I/O error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ttf".to_string());
        Self::from_bytes(name, data)
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let font = FontArc::try_from_vec(data)
            .map_err(|e| CitationError::Font(format!("failed to parse {}: {}", name, e)))?;
        Ok(Self { name, font })
    }

    fn px_scale(&self, size: f32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / units_per_em)
    }

    /// Glyph positions along one line: (glyph id, pen x before the glyph).
    fn layout(&self, text: &str, scale: PxScale) -> (Vec<(ab_glyph::GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(scale);
        let mut glyphs = Vec::new();
        let mut caret_x = 0.0f32;
        let mut previous = None;

        for ch in text.chars().filter(|c| !c.is_control()) {
            let glyph_id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret_x += scaled.kern(prev, glyph_id);
            }
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        (glyphs, caret_x)
    }
}

impl Typeface for TtfFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        let scale = self.px_scale(size);
        let (glyphs, width) = self.layout(text, scale);

        let mut metrics = TextMetrics {
            width,
            ..Default::default()
        };
        for (glyph_id, x) in glyphs {
            let glyph = glyph_id.with_scale_and_position(scale, point(x, 0.0));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                metrics.ascent = metrics.ascent.max(-bounds.min.y);
                metrics.descent = metrics.descent.max(bounds.max.y);
            }
        }
        metrics
    }

    fn rasterize(&self, text: &str, size: f32, x_scale: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let scale = self.px_scale(size);
        let condensed = PxScale {
            x: scale.x * x_scale,
            y: scale.y,
        };
        let (glyphs, _) = self.layout(text, scale);

        for (glyph_id, x) in glyphs {
            let glyph = glyph_id.with_scale_and_position(condensed, point(x * x_scale, 0.0));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i32 + bounds.min.x as i32;
                    let y = py as i32 + bounds.min.y as i32;
                    plot(x, y, coverage.min(1.0));
                });
            }
        }
    }
}

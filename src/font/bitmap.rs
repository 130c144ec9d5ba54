//! Embedded bitmap face using the Spleen font family.
//!
//! Glyphs come from Spleen 6×12 (small sizes) or 12×24 (18px and up) and are
//! scaled nearest-neighbor to the requested pixel size. Scaled glyphs are
//! cached per (character, pixel height).

use super::{TextMetrics, Typeface};
use crate::error::{CitationError, Result};
use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Native Spleen cell used as the scaling source.
#[derive(Debug, Clone, Copy)]
struct Cell {
    data: &'static [u8],
    width: usize,
    height: usize,
    /// Row index of the baseline inside the cell
    baseline: usize,
}

const SMALL: Cell = Cell {
    data: FONT_6X12,
    width: 6,
    height: 12,
    baseline: 10,
};

const LARGE: Cell = Cell {
    data: FONT_12X24,
    width: 12,
    height: 24,
    baseline: 20,
};

/// A glyph scaled to its target pixel size.
#[derive(Debug)]
struct Glyph {
    width: usize,
    height: usize,
    baseline: usize,
    /// Row-major, `true` = ink
    pixels: Vec<bool>,
    /// First and last inked rows, `None` for blank glyphs (space)
    ink_rows: Option<(usize, usize)>,
}

impl Glyph {
    fn from_pixels(width: usize, height: usize, baseline: usize, pixels: Vec<bool>) -> Self {
        let inked = |row: &usize| pixels[row * width..(row + 1) * width].iter().any(|&p| p);
        let first = (0..height).find(inked);
        let last = (0..height).rev().find(inked);
        Self {
            width,
            height,
            baseline,
            ink_rows: first.zip(last),
            pixels,
        }
    }
}

/// Spleen bitmap typeface.
pub struct BitmapFace {
    cache: Mutex<HashMap<(char, usize), Arc<Glyph>>>,
}

impl BitmapFace {
    /// Create the face, checking that the embedded fonts parse.
    pub fn new() -> Result<Self> {
        for cell in [SMALL, LARGE] {
            PSF2Font::new(cell.data)
                .map_err(|e| CitationError::Font(format!("embedded Spleen font: {:?}", e)))?;
        }
        Ok(Self {
            cache: Mutex::new(HashMap::new()),
        })
    }

    fn cell_for(size: f32) -> Cell {
        if size >= 18.0 { LARGE } else { SMALL }
    }

    /// Scaled glyph for `ch` at `size`, from cache when possible.
    fn glyph(&self, ch: char, size: f32) -> Arc<Glyph> {
        let target_h = (size.round() as usize).max(1);
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .entry((ch, target_h))
            .or_insert_with(|| Arc::new(generate_glyph(Self::cell_for(size), ch, target_h)))
            .clone()
    }
}

impl Typeface for BitmapFace {
    fn name(&self) -> &str {
        "Spleen"
    }

    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        let mut metrics = TextMetrics::default();
        for ch in text.chars().filter(|c| !c.is_control()) {
            let glyph = self.glyph(ch, size);
            metrics.width += glyph.width as f32;
            if let Some((top, bottom)) = glyph.ink_rows {
                let ascent = glyph.baseline as f32 - top as f32;
                let descent = (bottom + 1) as f32 - glyph.baseline as f32;
                metrics.ascent = metrics.ascent.max(ascent);
                metrics.descent = metrics.descent.max(descent);
            }
        }
        metrics
    }

    fn rasterize(&self, text: &str, size: f32, x_scale: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let mut pen_x = 0.0f32;
        for ch in text.chars().filter(|c| !c.is_control()) {
            let glyph = self.glyph(ch, size);
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    if glyph.pixels[row * glyph.width + col] {
                        let x = (pen_x + col as f32 * x_scale).floor() as i32;
                        let y = row as i32 - glyph.baseline as i32;
                        plot(x, y, 1.0);
                    }
                }
            }
            pen_x += glyph.width as f32 * x_scale;
        }
    }
}

/// Generate a glyph for `ch` from `cell`, scaled to `target_h` pixels tall.
fn generate_glyph(cell: Cell, ch: char, target_h: usize) -> Glyph {
    let mut src = vec![false; cell.width * cell.height];
    let mut found = false;

    if let Ok(mut spleen) = PSF2Font::new(cell.data) {
        let mut utf8 = [0u8; 4];
        if let Some(spleen_glyph) = spleen.glyph_for_utf8(ch.encode_utf8(&mut utf8).as_bytes()) {
            found = true;
            for (row_y, row) in spleen_glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < cell.height && col_x < cell.width {
                        src[row_y * cell.width + col_x] = on;
                    }
                }
            }
        }
    }

    if !found {
        draw_box(&mut src, cell.width, cell.height);
    }

    let target_w = ((cell.width * target_h) as f32 / cell.height as f32).round().max(1.0) as usize;
    let baseline = (cell.baseline * target_h + cell.height / 2) / cell.height;
    let mut dst = vec![false; target_w * target_h];
    scale_bitmap(&src, cell.width, cell.height, &mut dst, target_w, target_h);

    Glyph::from_pixels(target_w, target_h, baseline, dst)
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(src: &[bool], src_w: usize, src_h: usize, dst: &mut [bool], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            dst[dy * dst_w + dx] = src[sy * src_w + sx];
        }
    }
}

/// Draw a box outline for characters the font lacks.
fn draw_box(glyph: &mut [bool], width: usize, height: usize) {
    for x in 0..width {
        glyph[width + x] = true;
        glyph[(height - 3) * width + x] = true;
    }
    for y in 1..height - 2 {
        glyph[y * width] = true;
        glyph[y * width + width - 1] = true;
    }
}

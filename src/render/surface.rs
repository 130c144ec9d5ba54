//! Raster drawing surface.
//!
//! A small 2D canvas over a `tiny_skia::Pixmap` with the primitives the
//! citation uses: filled rectangles, stroked (optionally dashed) lines with
//! butt caps, text fill with alignment and max-width condensing, and image
//! compositing with blend modes.
//!
//! Anti-aliasing is off: coverage is sampled at pixel centers, so a 2px line
//! at `x = 10` covers exactly columns 9 and 10 and the dotted borders stay
//! crisp.

use crate::citation::Color;
use crate::error::{CitationError, Result};
use crate::font::Font;
use image::{Rgba, RgbaImage};
use tiny_skia::{
    BlendMode, ColorU8, FilterQuality, LineCap, Mask, Paint, PathBuilder, Pixmap, PixmapPaint,
    Rect, Stroke, StrokeDash, Transform,
};

/// Horizontal anchoring of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How a piece of text is filled.
#[derive(Debug, Clone)]
pub struct TextStyle<'a> {
    pub font: &'a Font,
    pub color: Color,
    pub align: TextAlign,
    /// Condense lines wider than this; a non-positive width draws nothing
    pub max_width: Option<f32>,
}

/// A drawing surface owning its pixel buffer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixmap: Pixmap,
}

impl RasterSurface {
    /// Create a transparent surface. Fails for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CitationError::Surface { width, height })?;
        Ok(Self { pixmap })
    }

    /// Copy an RGBA image into a new surface.
    pub fn from_image(image: &RgbaImage) -> Result<Self> {
        let mut surface = Self::new(image.width(), image.height())?;
        for (dst, src) in surface.pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The surface as straight-alpha RGBA.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width(), self.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Fill the rectangle `[x, x + w) × [y, y + h)`.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (x0, x1) = ordered(x, x + w);
        let (y0, y1) = ordered(y, y + h);
        if let Some(rect) = Rect::from_ltrb(x0, y0, x1, y1) {
            self.pixmap.fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    /// Stroke a line from `from` to `to` with butt caps.
    ///
    /// `dash` alternates on/off lengths starting with "on"; an empty pattern
    /// draws a solid line. Odd-length patterns are repeated to even length,
    /// as canvas line dashes are.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32, dash: &[f32]) {
        let length = (to.0 - from.0).hypot(to.1 - from.1);
        if width.is_nan() || width <= 0.0 || length <= f32::EPSILON {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            dash: dash_pattern(dash, length),
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Draw `text` with its first baseline at `y`.
    ///
    /// Multi-line text advances by one line height per line, measured once
    /// on the whole string. When the style has a `max_width`, lines wider
    /// than it are condensed horizontally to fit.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle<'_>) {
        let Some(mut mask) = Mask::new(self.width(), self.height()) else {
            return;
        };
        let line_height = style.font.line_height(text);
        let mut cursor_y = y;
        let mut inked = false;
        for line in text.split('\n') {
            inked |= rasterize_line(&mut mask, line, x, cursor_y, style);
            cursor_y += line_height;
        }

        if inked {
            let full = Rect::from_xywh(0.0, 0.0, self.width() as f32, self.height() as f32);
            if let Some(rect) = full {
                self.pixmap
                    .fill_rect(rect, &paint(style.color), Transform::identity(), Some(&mask));
            }
        }
    }

    /// Composite `src` scaled (nearest neighbor) into `(x, y, w, h)`.
    pub fn draw_surface(&mut self, src: &RasterSurface, x: f32, y: f32, w: f32, h: f32, mode: BlendMode) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let sx = w / src.width() as f32;
        let sy = h / src.height() as f32;
        let paint = PixmapPaint {
            blend_mode: mode,
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            src.pixmap.as_ref(),
            &paint,
            Transform::from_row(sx, 0.0, 0.0, sy, x, y),
            None,
        );
    }

    /// Composite an RGBA image scaled (nearest neighbor) into `(x, y, w, h)`.
    pub fn draw_image(&mut self, src: &RgbaImage, x: f32, y: f32, w: f32, h: f32, mode: BlendMode) -> Result<()> {
        if src.width() == 0 || src.height() == 0 {
            return Ok(());
        }
        let src = RasterSurface::from_image(src)?;
        self.draw_surface(&src, x, y, w, h, mode);
        Ok(())
    }
}

/// Plot one line of text into `mask`. Returns whether any pixel was inked.
fn rasterize_line(mask: &mut Mask, line: &str, x: f32, y: f32, style: &TextStyle<'_>) -> bool {
    if line.is_empty() {
        return false;
    }
    let font = style.font;
    let width = font.measure(line).width;
    let x_scale = match style.max_width {
        Some(max) if max <= 0.0 => return false,
        Some(max) if width > max => max / width,
        _ => 1.0,
    };
    let drawn = width * x_scale;
    let start_x = match style.align {
        TextAlign::Left => x,
        TextAlign::Center => x - drawn / 2.0,
        TextAlign::Right => x - drawn,
    };

    let (mw, mh) = (mask.width() as i32, mask.height() as i32);
    let (ox, oy) = (start_x.round() as i32, y.round() as i32);
    let data = mask.data_mut();
    let mut inked = false;
    font.face().rasterize(line, font.size(), x_scale, &mut |px, py, coverage| {
        let (mx, my) = (ox + px, oy + py);
        if mx < 0 || my < 0 || mx >= mw || my >= mh {
            return;
        }
        let cell = &mut data[(my * mw + mx) as usize];
        *cell = (*cell).max((coverage.clamp(0.0, 1.0) * 255.0).round() as u8);
        inked = true;
    });
    inked
}

/// Upper bound on dash cycles along one line.
const MAX_DASH_CYCLES: f32 = 100_000.0;

/// Canvas-style dash: odd patterns doubled. Degenerate patterns, and
/// patterns too fine to resolve over `length`, draw solid.
fn dash_pattern(dash: &[f32], length: f32) -> Option<StrokeDash> {
    if dash.is_empty() {
        return None;
    }
    let mut pattern: Vec<f32> = dash.iter().map(|d| d.max(0.0)).collect();
    if pattern.len() % 2 == 1 {
        pattern.extend_from_within(..);
    }
    let cycle: f32 = pattern.iter().sum();
    if !cycle.is_finite() || length / cycle > MAX_DASH_CYCLES {
        return None;
    }
    StrokeDash::new(pattern, 0.0)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    paint
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BitmapFace;
    use std::sync::Arc;

    const INK: Color = Color::rgb(10, 20, 30);

    fn inked(image: &RgbaImage, x: u32, y: u32) -> bool {
        image.get_pixel(x, y).0 == INK.to_rgba().0
    }

    fn surface(w: u32, h: u32) -> RasterSurface {
        RasterSurface::new(w, h).unwrap()
    }

    #[test]
    fn test_zero_size_surface_is_an_error() {
        assert!(matches!(
            RasterSurface::new(0, 10),
            Err(CitationError::Surface { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_rect_exact() {
        let mut s = surface(10, 10);
        s.fill_rect(2.0, 3.0, 4.0, 2.0, INK);
        let img = s.to_image();
        let count = img.pixels().filter(|p| p.0 == INK.to_rgba().0).count();
        assert_eq!(count, 8);
        assert!(inked(&img, 2, 3));
        assert!(inked(&img, 5, 4));
        assert!(!inked(&img, 6, 4));
        assert!(!inked(&img, 2, 5));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut s = surface(4, 4);
        s.fill_rect(-10.0, -10.0, 100.0, 100.0, INK);
        assert!(s.to_image().pixels().all(|p| p.0 == INK.to_rgba().0));
    }

    #[test]
    fn test_vertical_line_width() {
        let mut s = surface(20, 20);
        s.stroke_line((10.0, 0.0), (10.0, 20.0), INK, 2.0, &[]);
        let img = s.to_image();
        for y in 0..20 {
            assert!(!inked(&img, 8, y));
            assert!(inked(&img, 9, y));
            assert!(inked(&img, 10, y));
            assert!(!inked(&img, 11, y));
        }
    }

    #[test]
    fn test_dashed_line_pattern() {
        let mut s = surface(12, 4);
        s.stroke_line((0.0, 1.0), (12.0, 1.0), INK, 2.0, &[2.0, 2.0]);
        let img = s.to_image();
        let row: Vec<bool> = (0..12).map(|x| inked(&img, x, 0)).collect();
        assert_eq!(
            row,
            vec![true, true, false, false, true, true, false, false, true, true, false, false]
        );
        assert!(!inked(&img, 0, 2));
    }

    #[test]
    fn test_uneven_dash_pattern() {
        let mut s = surface(4, 20);
        s.stroke_line((2.0, 0.0), (2.0, 20.0), INK, 2.0, &[3.0, 6.0]);
        let img = s.to_image();
        let col: Vec<bool> = (0..20).map(|y| inked(&img, 2, y)).collect();
        assert_eq!(&col[0..3], &[true, true, true]);
        assert!(col[3..9].iter().all(|&on| !on));
        assert_eq!(&col[9..12], &[true, true, true]);
    }

    #[test]
    fn test_odd_dash_pattern_repeats() {
        let mut s = surface(12, 2);
        s.stroke_line((0.0, 1.0), (12.0, 1.0), INK, 2.0, &[3.0]);
        let img = s.to_image();
        let row: Vec<bool> = (0..12).map(|x| inked(&img, x, 0)).collect();
        assert_eq!(&row[0..6], &[true, true, true, false, false, false]);
    }

    #[test]
    fn test_sub_pixel_dash_draws_solid() {
        let mut s = surface(400, 4);
        s.stroke_line((0.0, 2.0), (400.0, 2.0), INK, 2.0, &[1e-6, 1e-6]);
        let img = s.to_image();
        assert!((0..400).all(|x| inked(&img, x, 1) && inked(&img, x, 2)));

        // Hairline-thin strokes with sub-pixel dots must not stall either
        s.stroke_line((0.0, 2.0), (400.0, 2.0), INK, 1e-6, &[1e-6]);
    }

    #[test]
    fn test_degenerate_dash_draws_solid() {
        let mut s = surface(6, 2);
        s.stroke_line((0.0, 1.0), (6.0, 1.0), INK, 2.0, &[0.0, 0.0]);
        let img = s.to_image();
        assert!((0..6).all(|x| inked(&img, x, 0)));
    }

    #[test]
    fn test_draw_image_scaled() {
        let mut src = RgbaImage::new(2, 2);
        src.put_pixel(0, 0, INK.to_rgba());
        let mut s = surface(8, 8);
        s.draw_image(&src, 0.0, 0.0, 4.0, 4.0, BlendMode::SourceOver).unwrap();
        let img = s.to_image();
        assert!(inked(&img, 0, 0));
        assert!(inked(&img, 1, 1));
        assert!(!inked(&img, 2, 2));
        assert_eq!(img.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn test_draw_surface_translated() {
        let mut still = surface(4, 10);
        still.fill_rect(0.0, 0.0, 4.0, 10.0, INK);
        let mut s = surface(4, 10);
        s.draw_surface(&still, 0.0, 7.0, 4.0, 10.0, BlendMode::SourceOver);
        let img = s.to_image();
        let rows = (0..10).filter(|&y| inked(&img, 0, y)).count();
        assert_eq!(rows, 3);
        assert!(inked(&img, 0, 7));
        assert!(!inked(&img, 0, 6));
    }

    #[test]
    fn test_image_roundtrip_keeps_straight_alpha() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([200, 100, 50, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        let back = RasterSurface::from_image(&src).unwrap().into_image();
        assert_eq!(back, src);
    }

    #[test]
    fn test_fill_text_multiline_and_condensed() {
        let font = Font::new(Arc::new(BitmapFace::new().unwrap()), 12.0);
        let style = TextStyle {
            font: &font,
            color: INK,
            align: TextAlign::Left,
            max_width: Some(30.0),
        };
        let mut s = surface(100, 60);
        s.fill_text("HHHHHHHHHH\nHH", 0.0, 12.0, &style);
        let img = s.to_image();

        let inked_cols = |rows: std::ops::Range<u32>| {
            (0..100u32)
                .filter(|&x| rows.clone().any(|y| inked(&img, x, y)))
                .max()
        };
        // First line condensed from 60px into 30px
        assert!(inked_cols(0..13).unwrap() < 30);
        // Second line drawn one line height lower
        assert!(inked_cols(14..30).is_some());
    }

    #[test]
    fn test_fill_text_zero_width_draws_nothing() {
        let font = Font::new(Arc::new(BitmapFace::new().unwrap()), 12.0);
        let style = TextStyle {
            font: &font,
            color: INK,
            align: TextAlign::Center,
            max_width: Some(0.0),
        };
        let mut s = surface(40, 20);
        s.fill_text("HI", 20.0, 12.0, &style);
        assert!(s.to_image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_clear() {
        let mut s = surface(3, 3);
        s.fill_rect(0.0, 0.0, 3.0, 3.0, INK);
        s.clear();
        assert!(s.to_image().pixels().all(|p| p.0[3] == 0));
    }
}

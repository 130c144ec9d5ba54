//! Static citation frame.
//!
//! Draws every element of a citation onto a fresh surface, in a fixed order
//! so later elements paint over earlier ones.

use super::surface::{RasterSurface, TextAlign, TextStyle};
use crate::assets::Assets;
use crate::citation::Citation;
use crate::error::Result;
use crate::layout::{self, Layout, Resolution};
use crate::logos::{self, TINT_OPACITY};
use image::RgbaImage;
use tiny_skia::BlendMode;

/// A rendered still together with the layout outcome that produced it.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: RgbaImage,
    pub resolution: Resolution,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Render the static citation.
///
/// The surface is created at the resolved height, which may be taller than
/// the configured one when the reason is auto-resized.
pub fn render_frame(citation: &Citation, assets: &Assets) -> Result<Frame> {
    citation.geometry.validate()?;
    let font = assets.font(citation.geometry.font_size)?;
    let resolution = layout::resolve(citation, &font);
    let layout = Layout::with_height(citation, &font, resolution.height);
    let logo = assets.logo()?;

    let mut surface = RasterSurface::new(citation.width(), resolution.height)?;
    draw_background(&mut surface, &layout);
    draw_logo(&mut surface, &layout, logo)?;
    draw_borders(&mut surface, &layout);
    draw_separators(&mut surface, &layout);
    draw_right_edge(&mut surface, &layout);
    draw_barcode(&mut surface, &layout);
    draw_text(&mut surface, &layout, &resolution.wrapped_reason);

    Ok(Frame {
        image: surface.into_image(),
        resolution,
    })
}

fn draw_background(surface: &mut RasterSurface, layout: &Layout<'_>) {
    let color = layout.citation().palette.background;
    surface.fill_rect(0.0, 0.0, layout.width(), layout.height(), color);
}

fn draw_logo(surface: &mut RasterSurface, layout: &Layout<'_>, logo: &RgbaImage) -> Result<()> {
    let tinted = logos::tint(logo, layout.citation().palette.foreground, TINT_OPACITY)?;
    let (x, y, w, h) = layout.logo_rect(logo.width(), logo.height());
    surface.draw_image(&tinted, x, y, w, h, BlendMode::SourceOver)
}

/// Dotted frame around the panel.
fn draw_borders(surface: &mut RasterSurface, layout: &Layout<'_>) {
    let c = layout.citation();
    let fg = c.palette.foreground;
    let (w, h) = (layout.width(), layout.height());
    let d = c.geometry.top_bottom_dot_size;
    let s = c.geometry.side_dot_size;

    surface.stroke_line((0.0, d / 2.0), (w, d / 2.0), fg, d, &[d, d]);
    surface.stroke_line((d, h - d / 2.0), (w, h - d / 2.0), fg, d, &[d, d]);

    let left = layout.side_dots_left() + s / 2.0;
    let right = w - layout.side_dots_right() - s / 2.0;
    let (top, bottom) = (layout.side_dots_top(), h - d);
    for x in [left, right] {
        surface.stroke_line((x, top), (x, bottom), fg, s, &[s, s * 2.0]);
    }
}

fn draw_separators(surface: &mut RasterSurface, layout: &Layout<'_>) {
    let c = layout.citation();
    let sep = c.geometry.separator_dot_size;
    let (x0, x1) = (layout.separator_left(), layout.width() - layout.separator_right());

    let top = layout.top_separator_y() + sep / 2.0;
    let bottom = layout.bottom_separator_y() - sep / 2.0;
    for y in [top, bottom] {
        surface.stroke_line((x0, y), (x1, y), c.palette.font, sep, &[sep, sep]);
    }
}

fn draw_right_edge(surface: &mut RasterSurface, layout: &Layout<'_>) {
    let c = layout.citation();
    let d = c.geometry.top_bottom_dot_size;
    let x = layout.width() - d / 2.0;
    surface.stroke_line((x, 0.0), (x, layout.height()), c.palette.foreground, d, &[]);
}

fn draw_barcode(surface: &mut RasterSurface, layout: &Layout<'_>) {
    let c = layout.citation();
    let bw = c.geometry.barcode_width;
    let bh = c.geometry.barcode_height;
    let (x, top) = (layout.barcode_x(), layout.barcode_top());

    for (i, on) in c.barcode().strips().enumerate() {
        let color = if on { c.palette.font } else { c.palette.background };
        let cx = x + bw * i as f32 + bw / 2.0;
        surface.stroke_line((cx, top), (cx, top + bh), color, bw, &[]);
    }

    surface.fill_rect(layout.barcode_mark_x(), top, bw * 2.0, bh / 2.0, c.palette.font);
}

fn draw_text(surface: &mut RasterSurface, layout: &Layout<'_>, wrapped_reason: &str) {
    let c = layout.citation();
    let left = TextStyle {
        font: layout.font(),
        color: c.palette.font,
        align: TextAlign::Left,
        max_width: Some(layout.title_max_width()),
    };
    surface.fill_text(&c.title, layout.text_left(), layout.title_baseline(), &left);

    let reason = TextStyle {
        max_width: Some(layout.reason_max_width()),
        ..left.clone()
    };
    surface.fill_text(wrapped_reason, layout.text_left(), layout.reason_baseline(), &reason);

    let penalty = TextStyle {
        align: TextAlign::Center,
        ..reason
    };
    let (px, py) = layout.penalty_anchor();
    surface.fill_text(&c.penalty, px, py, &penalty);
}

//! # Layout Engine
//!
//! Every position on the citation is derived from the canvas size, the
//! geometry knobs, the barcode length and font metrics. The values form a
//! dependency graph, expressed here as methods on [`Layout`] rather than
//! stored fields, so nothing can go stale when the height changes during
//! auto-resize.
//!
//! ## Anatomy
//!
//! ```text
//! ┌··························································┐│
//! ·  ▪  M.O.A. CITATION                         ▬ ▌▌ ▌▌▌  ▪    │
//! ·  ▪  ··················································  ▪    │  top separator
//! ·  ▪  reason text, wrapped                              ▪    │
//! ·  ▪  ...                                               ▪    │
//! ·  ▪  ··················(logo)························  ▪    │  bottom separator
//! ·  ▪            LAST WARNING - NO PENALTY               ▪    │
//! └··························································┘│
//! ```
//!
//! Vertical positions measured from the bottom (`*_from_bottom`) are
//! distances; the drawing code subtracts them from the height.

pub mod resize;

pub use resize::{Resolution, resolve};

use crate::citation::{Citation, Geometry};
use crate::font::Font;
use crate::text;

/// Derived positions for one citation at one canvas height.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    citation: &'a Citation,
    font: &'a Font,
    height: f32,
}

impl<'a> Layout<'a> {
    /// Layout at the citation's configured height.
    pub fn new(citation: &'a Citation, font: &'a Font) -> Self {
        Self::with_height(citation, font, citation.height())
    }

    /// Layout at an explicit canvas height (used after auto-resize).
    pub fn with_height(citation: &'a Citation, font: &'a Font, height: u32) -> Self {
        Self {
            citation,
            font,
            height: height as f32,
        }
    }

    fn g(&self) -> &Geometry {
        &self.citation.geometry
    }

    pub fn citation(&self) -> &'a Citation {
        self.citation
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }

    pub fn width(&self) -> f32 {
        self.citation.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    // ------------------------------------------------------------------
    // Border dots
    // ------------------------------------------------------------------

    pub fn side_dots_left(&self) -> f32 {
        self.g().side_dot_spacing
    }

    pub fn side_dots_top(&self) -> f32 {
        self.g().side_dot_spacing + self.g().top_bottom_dot_size
    }

    pub fn side_dots_right(&self) -> f32 {
        self.g().side_dot_spacing + self.g().top_bottom_dot_size + 2.0
    }

    // ------------------------------------------------------------------
    // Separators
    // ------------------------------------------------------------------

    pub fn separator_left(&self) -> f32 {
        self.side_dots_left() + self.g().side_dot_size + 6.0
    }

    pub fn separator_right(&self) -> f32 {
        self.side_dots_right() + self.g().side_dot_size + 6.0
    }

    /// Height of the title block; supports multi-line titles.
    pub fn title_height(&self) -> f32 {
        text::block_height(&self.citation.title, self.font)
    }

    /// Top separator y, below a band twice the title height.
    pub fn top_separator_y(&self) -> f32 {
        self.g().top_bottom_dot_size + self.title_height() * 2.0 + 4.0
    }

    /// Bottom separator distance from the bottom edge.
    ///
    /// Depends only on the font size: the penalty is a single line.
    pub fn bottom_separator_from_bottom(&self) -> f32 {
        self.g().top_bottom_dot_size + self.g().font_size * 2.0 + 10.0
    }

    pub fn bottom_separator_y(&self) -> f32 {
        self.height - self.bottom_separator_from_bottom()
    }

    // ------------------------------------------------------------------
    // Barcode
    // ------------------------------------------------------------------

    pub fn barcode_from_right(&self) -> f32 {
        self.side_dots_right() + self.g().side_dot_size + 8.0
    }

    pub fn barcode_top(&self) -> f32 {
        self.g().top_bottom_dot_size * 3.0
    }

    /// Total width of all strips.
    pub fn barcode_strip_width(&self) -> f32 {
        self.citation.barcode().len() as f32 * self.g().barcode_width
    }

    /// Left edge of the barcode, anchored to the right side.
    pub fn barcode_x(&self) -> f32 {
        self.width() - self.barcode_from_right() - self.barcode_strip_width()
    }

    /// Left edge of the small mark drawn before the barcode.
    pub fn barcode_mark_x(&self) -> f32 {
        self.barcode_x() - self.g().barcode_width * 3.0
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    pub fn text_left(&self) -> f32 {
        self.g().side_dot_spacing + self.g().side_dot_size + 12.0
    }

    /// Baseline of the first title line.
    pub fn title_baseline(&self) -> f32 {
        self.g().top_bottom_dot_size + self.g().font_size + 2.0
    }

    /// Width left for the title once the barcode region is reserved.
    pub fn title_max_width(&self) -> f32 {
        let g = self.g();
        self.width()
            - (self.barcode_from_right()
                + self.barcode_strip_width()
                + g.barcode_width * 3.0
                + self.text_left()
                + g.font_size)
    }

    /// Baseline of the first reason line.
    pub fn reason_baseline(&self) -> f32 {
        let ascent = self.font.measure(&self.citation.reason).ascent;
        self.top_separator_y() + self.g().font_size / 2.0 + ascent + 2.0
    }

    pub fn reason_max_width(&self) -> f32 {
        self.width() - (self.text_left() + self.side_dots_right() + self.g().side_dot_size)
    }

    /// Space between the separators available to the reason text.
    pub fn reason_max_height(&self) -> f32 {
        self.height
            - (self.top_separator_y() + self.bottom_separator_from_bottom() + self.g().font_size)
    }

    pub fn penalty_from_bottom(&self) -> f32 {
        self.bottom_separator_from_bottom() - self.g().font_size - 10.0
    }

    /// Penalty anchor: horizontally centered, nudged 3px left.
    pub fn penalty_anchor(&self) -> (f32, f32) {
        (self.width() / 2.0 - 3.0, self.height - self.penalty_from_bottom())
    }

    // ------------------------------------------------------------------
    // Logo
    // ------------------------------------------------------------------

    /// Destination rectangle `(x, y, w, h)` of a `logo_w × logo_h` logo:
    /// centered horizontally, straddling the bottom separator.
    pub fn logo_rect(&self, logo_w: u32, logo_h: u32) -> (f32, f32, f32, f32) {
        let scale = self.g().logo_scale;
        let (w, h) = (logo_w as f32 * scale, logo_h as f32 * scale);
        let x = self.width() / 2.0 - w / 2.0 - 1.0;
        let y = self.height - (self.bottom_separator_from_bottom() + h / 2.0) + 4.0;
        (x, y, w, h)
    }
}

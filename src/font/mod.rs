//! # Fonts and Text Measurement
//!
//! Text is measured and rasterized through the [`Typeface`] trait, which has
//! two implementations:
//!
//! | Face | Source | Use |
//! |------|--------|-----|
//! | [`TtfFace`] | TrueType/OpenType file via `ab_glyph` | the `BMmini.ttf` asset |
//! | [`BitmapFace`] | Spleen bitmap font embedded via `spleen-font` | built-in assets, tests |
//!
//! A [`Font`] pairs a face with a pixel size, the equivalent of a CSS font
//! string such as `16px BMmini`. Faces are registered under a family name in
//! a [`FontRegistry`], which can resolve those strings.

mod bitmap;
mod ttf;

pub use bitmap::BitmapFace;
pub use ttf::TtfFace;

use crate::error::{CitationError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Extra pixels added between lines on top of ink ascent + descent.
pub const LINE_GAP: f32 = 2.0;

/// Result of measuring a string.
///
/// `ascent` and `descent` are the actual ink extents above and below the
/// baseline over every glyph in the string (zero for an empty string).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Sum of glyph advances
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    /// Height of one line: `ascent + descent + 2`.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + LINE_GAP
    }
}

/// A source of glyph metrics and coverage.
pub trait Typeface: Send + Sync {
    /// Face name, for diagnostics.
    fn name(&self) -> &str;

    /// Measure `text` set at `size` pixels per em.
    fn measure(&self, text: &str, size: f32) -> TextMetrics;

    /// Rasterize one line of `text` with the pen starting at `(0, 0)` on the
    /// baseline. Horizontal positions are multiplied by `x_scale` (used to
    /// condense text into a maximum width). `plot` receives pixel
    /// coordinates relative to the origin and a coverage in `0.0..=1.0`.
    fn rasterize(&self, text: &str, size: f32, x_scale: f32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// A typeface at a specific pixel size.
#[derive(Clone)]
pub struct Font {
    face: Arc<dyn Typeface>,
    size: f32,
}

impl Font {
    pub fn new(face: Arc<dyn Typeface>, size: f32) -> Self {
        Self { face, size }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn face(&self) -> &dyn Typeface {
        self.face.as_ref()
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        self.face.measure(text, self.size)
    }

    /// Line height of `text` measured as a whole.
    pub fn line_height(&self, text: &str) -> f32 {
        self.measure(text).line_height()
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Font({}px {})", self.size, self.face.name())
    }
}

/// Maps logical family names to loaded faces.
#[derive(Default, Clone)]
pub struct FontRegistry {
    faces: HashMap<String, Arc<dyn Typeface>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a face under `family`, replacing any previous entry.
    pub fn register(&mut self, family: impl Into<String>, face: Arc<dyn Typeface>) {
        self.faces.insert(family.into(), face);
    }

    /// Load a TrueType/OpenType file and register it under `family`.
    pub fn register_from_path(&mut self, path: impl AsRef<Path>, family: impl Into<String>) -> Result<()> {
        let face = TtfFace::from_path(path)?;
        self.register(family, Arc::new(face));
        Ok(())
    }

    pub fn get(&self, family: &str) -> Option<Arc<dyn Typeface>> {
        self.faces.get(family).cloned()
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.faces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a [`Font`] for `family` at `size` pixels.
    pub fn font(&self, family: &str, size: f32) -> Result<Font> {
        let face = self
            .get(family)
            .ok_or_else(|| CitationError::Font(format!("no font registered as '{}'", family)))?;
        Ok(Font::new(face, size))
    }

    /// Resolve a font string of the form `"16px BMmini"`.
    pub fn resolve(&self, descriptor: &str) -> Result<Font> {
        let malformed = || CitationError::Font(format!("malformed font string '{}'", descriptor));
        let (size, family) = descriptor.trim().split_once(' ').ok_or_else(malformed)?;
        let size: f32 = size
            .strip_suffix("px")
            .and_then(|s| s.parse().ok())
            .filter(|s: &f32| *s > 0.0)
            .ok_or_else(malformed)?;
        self.font(family.trim(), size)
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("families", &self.families())
            .finish()
    }
}

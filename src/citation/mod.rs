//! # Citation Model
//!
//! The single renderable record: canvas size, barcode, the three text
//! fields, and the style knobs that feed the layout engine.
//!
//! ```
//! use citation::{Barcode, Citation};
//!
//! let mut citation = Citation::new(400, 200, Barcode::new([1u8, 0, 1, 1, 0])?)?;
//! citation.title = "M.O.A. CITATION".into();
//! citation.reason = "Protocol Violated.\nEntry Permit: Invalid Name".into();
//! citation.resize_reason = true;
//!
//! citation.set_width(101)?;
//! assert_eq!(citation.width(), 102);
//! assert!(citation.set_height(90).is_err());
//! # Ok::<(), citation::CitationError>(())
//! ```
//!
//! A `Citation` is never mutated by rendering: the auto-resized height is a
//! render-local value, so the same citation can be rendered repeatedly.

mod barcode;
mod palette;

pub use barcode::Barcode;
pub use palette::{Color, Palette};

use crate::assets::Assets;
use crate::error::{CitationError, Result};
use crate::render::{self, RenderOptions};
use serde::{Deserialize, Serialize};

/// Smallest accepted canvas width.
pub const MIN_WIDTH: u32 = 100;

/// Smallest accepted canvas height.
pub const MIN_HEIGHT: u32 = 110;

/// Dot sizes, spacings and scales consumed by the layout engine.
///
/// All values are in pixels except `logo_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Dot size of the dotted lines along the top and bottom edges
    pub top_bottom_dot_size: f32,
    /// Dot size of the dotted lines along the left and right sides
    pub side_dot_size: f32,
    /// Inset of the side dots from the canvas edge
    pub side_dot_spacing: f32,
    /// Dot size of the two horizontal separators
    pub separator_dot_size: f32,
    /// Width of one barcode strip
    pub barcode_width: f32,
    /// Height of the barcode; the mark beside it is half of this
    pub barcode_height: f32,
    pub font_size: f32,
    pub logo_scale: f32,
}

impl Geometry {
    /// Check that every knob is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        let knobs = [
            ("top_bottom_dot_size", self.top_bottom_dot_size),
            ("side_dot_size", self.side_dot_size),
            ("side_dot_spacing", self.side_dot_spacing),
            ("separator_dot_size", self.separator_dot_size),
            ("barcode_width", self.barcode_width),
            ("barcode_height", self.barcode_height),
            ("font_size", self.font_size),
            ("logo_scale", self.logo_scale),
        ];
        for (field, value) in knobs {
            if !value.is_finite() || value < 0.0 {
                return Err(CitationError::InvalidGeometry { field, value });
            }
        }
        Ok(())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            top_bottom_dot_size: 2.0,
            side_dot_size: 6.0,
            side_dot_spacing: 4.0,
            separator_dot_size: 2.0,
            barcode_width: 2.0,
            barcode_height: 12.0,
            font_size: 16.0,
            logo_scale: 1.0,
        }
    }
}

/// A parody bureaucratic citation.
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    width: u32,
    height: u32,
    barcode: Barcode,

    pub title: String,
    /// Body text; wrapped to the interior width when drawn
    pub reason: String,
    pub penalty: String,

    pub palette: Palette,
    pub geometry: Geometry,

    /// Grow the canvas height when the wrapped reason overflows
    pub resize_reason: bool,
    /// Maximum grown height; ignored unless greater than `height`
    pub resize_limit: u32,
}

impl Citation {
    /// Create a citation with default content and style.
    ///
    /// Width and height go through the same validation as
    /// [`set_width`](Self::set_width) and [`set_height`](Self::set_height).
    pub fn new(width: u32, height: u32, barcode: Barcode) -> Result<Self> {
        let mut citation = Self {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
            barcode,
            title: "M.O.A. CITATION".to_string(),
            reason: "Protocol Violated.\nEntry Permit: Invalid Name".to_string(),
            penalty: "LAST WARNING - NO PENALTY".to_string(),
            palette: Palette::default(),
            geometry: Geometry::default(),
            resize_reason: false,
            resize_limit: 0,
        };
        citation.set_width(width)?;
        citation.set_height(height)?;
        Ok(citation)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The configured height (before any auto-resize).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn barcode(&self) -> &Barcode {
        &self.barcode
    }

    /// Set the width. Fails below 100; odd values are bumped to the next even number.
    pub fn set_width(&mut self, value: u32) -> Result<()> {
        self.width = normalize_dimension("width", value, MIN_WIDTH)?;
        Ok(())
    }

    /// Set the height. Fails below 110; odd values are bumped to the next even number.
    pub fn set_height(&mut self, value: u32) -> Result<()> {
        self.height = normalize_dimension("height", value, MIN_HEIGHT)?;
        Ok(())
    }

    pub fn set_barcode(&mut self, barcode: Barcode) {
        self.barcode = barcode;
    }

    /// Render with the given assets. See [`render::render`].
    pub fn render(&self, assets: &Assets, options: &RenderOptions) -> Result<Vec<u8>> {
        render::render(self, assets, options)
    }
}

fn normalize_dimension(field: &'static str, value: u32, min: u32) -> Result<u32> {
    if value < min {
        return Err(CitationError::InvalidDimension { field, value, min });
    }
    if value % 2 != 0 {
        let even = value
            .checked_add(1)
            .ok_or(CitationError::DimensionTooLarge { field, value })?;
        log::debug!("{} {} is not even, added one to it", field, value);
        return Ok(even);
    }
    Ok(value)
}

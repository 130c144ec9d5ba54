//! # Logos
//!
//! The citation logo is a monochrome-alpha image: only its alpha channel
//! matters, because it is always colorized with the palette's foreground
//! color before being drawn (see [`tint`]).
//!
//! Asset directories ship a `logo.png`; when no asset directory is used,
//! the procedurally generated [`Seal`] stands in for it.
//!
//! ```
//! use citation::logos::{Seal, tint};
//! use citation::Color;
//!
//! let seal = Seal::image();
//! let tinted = tint(&seal, Color::rgb(0xBF, 0xA8, 0xA8), 0.5)?;
//! assert_eq!(tinted.dimensions(), seal.dimensions());
//! # Ok::<(), citation::CitationError>(())
//! ```

pub mod seal;

pub use seal::Seal;

use crate::citation::Color;
use crate::error::Result;
use crate::render::BlendMode;
use crate::render::surface::RasterSurface;
use image::RgbaImage;

/// Opacity of the tint layer used for the citation logo.
pub const TINT_OPACITY: f32 = 0.5;

/// Colorize a monochrome-alpha image.
///
/// Paints the image area with `color` at `opacity`, then composites the
/// image with destination-atop: the result keeps the image's alpha, and its
/// color is the tint mixed with the image's own color.
pub fn tint(image: &RgbaImage, color: Color, opacity: f32) -> Result<RgbaImage> {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let mut layer = RasterSurface::new(image.width(), image.height())?;
    layer.fill_rect(0.0, 0.0, w, h, color.with_opacity(opacity));
    layer.draw_image(image, 0.0, 0.0, w, h, BlendMode::DestinationAtop)?;
    Ok(layer.into_image())
}

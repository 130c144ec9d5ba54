//! # Rendering
//!
//! Turns a [`Citation`] into image bytes.
//!
//! ## Modules
//!
//! - [`surface`]: raster canvas with lines, rects, text and images, on
//!   `tiny-skia`
//!
//! A static render draws one frame and encodes it as PNG. An animated render
//! draws the same frame once, then slides it in over a transparent canvas
//! and encodes the frames as GIF.

mod frame;
pub mod surface;

pub use tiny_skia::BlendMode;
pub use frame::{Frame, render_frame};

use crate::animation::{Checkpoints, SlideFrames, SlideIn};
use crate::assets::Assets;
use crate::citation::Citation;
use crate::encode::{self, GifSettings};
use crate::error::Result;
use crate::layout::Layout;
use std::path::PathBuf;

/// How a citation is rendered and where the bytes go.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Also write the encoded bytes to this file
    pub output: Option<PathBuf>,
    /// Produce a slide-in GIF instead of a PNG still
    pub animated: bool,
    /// Explicit per-frame offsets, bypassing the checkpoint slide
    pub offsets: Option<Vec<f32>>,
    pub slide: SlideIn,
    pub gif: GifSettings,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output: None,
            animated: false,
            offsets: None,
            slide: SlideIn::default(),
            gif: GifSettings::default(),
        }
    }
}

impl RenderOptions {
    /// Animated output at `frame_rate` frames per second.
    pub fn animated(frame_rate: u32) -> Self {
        Self {
            animated: true,
            gif: GifSettings {
                frame_rate,
                ..GifSettings::default()
            },
            ..Self::default()
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}

/// Render `citation` to PNG (static) or GIF (animated) bytes.
///
/// When `options.output` is set the bytes are also written there.
pub fn render(citation: &Citation, assets: &Assets, options: &RenderOptions) -> Result<Vec<u8>> {
    let frame = render_frame(citation, assets)?;

    let bytes = if options.animated {
        let offsets = match &options.offsets {
            Some(offsets) => offsets.clone(),
            None => {
                let font = assets.font(citation.geometry.font_size)?;
                let layout = Layout::with_height(citation, &font, frame.height());
                options.slide.offsets(Checkpoints::for_layout(&layout).as_slice())
            }
        };
        log::debug!("animating {} frames", offsets.len());
        encode::encode_gif(SlideFrames::new(&frame.image, offsets)?, &options.gif)?
    } else {
        encode::encode_png(&frame.image)?
    };

    if let Some(path) = &options.output {
        std::fs::write(path, &bytes)?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(bytes)
}

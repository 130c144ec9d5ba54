//! # Slide-in Animation
//!
//! The animated citation slides up from the bottom edge, stopping briefly at
//! a few checkpoints on the way.
//!
//! Each frame is described by an **offset**: how many rows of the citation
//! are revealed. A frame with offset `o` draws the static citation at
//! `y = height - o`, so offset `height` shows the whole ticket.
//!
//! ```
//! use citation::animation::{SlideIn, interpolate};
//!
//! assert_eq!(interpolate(0.0, 10.0, 1), vec![10.0]);
//!
//! let offsets = SlideIn::default().offsets(&[6.0, 38.0, 92.0, 146.0, 200.0]);
//! assert_eq!(offsets.len(), 3 * (12 + 1) + 12 + 60);
//! ```

use crate::error::Result;
use crate::layout::Layout;
use crate::render::BlendMode;
use crate::render::surface::RasterSurface;
use image::RgbaImage;

/// Quadratic ease-out used between checkpoints.
///
/// `1.5t²` below `t = 0.5`, `-1 + (4 - 2t)t` from there on. The two halves
/// do not meet exactly at 0.5, which gives the slide a small kick mid-segment.
pub fn ease_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        1.5 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// `frames` eased values from `start` to `end`, both ends included.
///
/// A single frame yields `[end]`; zero frames yields nothing.
pub fn interpolate(start: f32, end: f32, frames: usize) -> Vec<f32> {
    match frames {
        0 => Vec::new(),
        1 => vec![end],
        n => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                start + (end - start) * ease_out_quad(t)
            })
            .collect(),
    }
}

/// Offsets the slide pauses at, ending at the full height.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoints(Vec<f32>);

impl Checkpoints {
    /// Side-dot top, top separator, two thirds of the remaining body, and
    /// finally the full height.
    pub fn for_layout(layout: &Layout<'_>) -> Self {
        let h = layout.height();
        let top = layout.top_separator_y();
        let third = (h - top) / 3.0;
        Self(vec![layout.side_dots_top(), top, top + third, top + third * 2.0, h])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Frame timing of the slide-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIn {
    /// Frames spent moving between two checkpoints
    pub frames_per_segment: usize,
    /// Frames held at each intermediate checkpoint
    pub pause_frames: usize,
    /// Frames held on the finished citation
    pub final_pause_frames: usize,
}

impl Default for SlideIn {
    fn default() -> Self {
        Self {
            frames_per_segment: 12,
            pause_frames: 1,
            final_pause_frames: 60,
        }
    }
}

impl SlideIn {
    /// Per-frame offsets through `checkpoints`.
    ///
    /// Every segment is followed by a short pause, except the last, which is
    /// followed by the long final pause.
    pub fn offsets(&self, checkpoints: &[f32]) -> Vec<f32> {
        let segments = checkpoints.len().saturating_sub(1);
        let mut offsets = Vec::new();
        for (i, pair) in checkpoints.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            offsets.extend(interpolate(from, to, self.frames_per_segment));
            let hold = if i + 1 == segments {
                self.final_pause_frames
            } else {
                self.pause_frames
            };
            offsets.extend(std::iter::repeat_n(to, hold));
        }
        offsets
    }
}

/// Iterator over animation frames of a static citation.
pub struct SlideFrames {
    still: RasterSurface,
    offsets: std::vec::IntoIter<f32>,
    canvas: RasterSurface,
}

impl SlideFrames {
    pub fn new(still: &RgbaImage, offsets: Vec<f32>) -> Result<Self> {
        Ok(Self {
            still: RasterSurface::from_image(still)?,
            offsets: offsets.into_iter(),
            canvas: RasterSurface::new(still.width(), still.height())?,
        })
    }
}

impl Iterator for SlideFrames {
    type Item = RgbaImage;

    fn next(&mut self) -> Option<RgbaImage> {
        let offset = self.offsets.next()?;
        let (w, h) = (self.still.width() as f32, self.still.height() as f32);
        self.canvas.clear();
        self.canvas
            .draw_surface(&self.still, 0.0, (h - offset).round(), w, h, BlendMode::SourceOver);
        Some(self.canvas.to_image())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

impl ExactSizeIterator for SlideFrames {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::{Barcode, Citation};
    use crate::font::Font;
    use crate::layout::tests::Fixed;
    use image::Rgba;
    use std::sync::Arc;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.25), 0.09375);
        assert_eq!(ease_out_quad(0.5), 0.5);
    }

    #[test]
    fn test_interpolate_hits_both_ends() {
        let v = interpolate(10.0, 20.0, 12);
        assert_eq!(v.len(), 12);
        assert_eq!(v[0], 10.0);
        assert_eq!(v[11], 20.0);
        assert!(v.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_interpolate_degenerate() {
        assert!(interpolate(0.0, 5.0, 0).is_empty());
        assert_eq!(interpolate(0.0, 5.0, 1), vec![5.0]);
        assert_eq!(interpolate(0.0, 5.0, 2), vec![0.0, 5.0]);
    }

    #[test]
    fn test_frame_count_formula() {
        let slide = SlideIn::default();
        let offsets = slide.offsets(&[6.0, 38.0, 92.0, 146.0, 200.0]);
        assert_eq!(offsets.len(), 111);
        assert_eq!(offsets[0], 6.0);
        // short pause after the first segment
        assert_eq!(offsets[11], 38.0);
        assert_eq!(offsets[12], 38.0);
        assert_eq!(offsets[13], 38.0);
        assert!(offsets[51..].iter().all(|&o| o == 200.0));
    }

    #[test]
    fn test_frame_count_independent_of_height() {
        let slide = SlideIn::default();
        let short = slide.offsets(&[6.0, 38.0, 92.0, 146.0, 200.0]);
        let tall = slide.offsets(&[6.0, 38.0, 300.0, 600.0, 900.0]);
        assert_eq!(short.len(), tall.len());
    }

    #[test]
    fn test_offsets_too_few_checkpoints() {
        assert!(SlideIn::default().offsets(&[]).is_empty());
        assert!(SlideIn::default().offsets(&[5.0]).is_empty());
    }

    #[test]
    fn test_checkpoints_for_layout() {
        let c = Citation::new(400, 200, Barcode::new([1u8]).unwrap()).unwrap();
        let f = Font::new(Arc::new(Fixed), 16.0);
        let cp = Checkpoints::for_layout(&Layout::new(&c, &f));
        assert_eq!(cp.as_slice(), &[6.0, 38.0, 92.0, 146.0, 200.0]);
    }

    #[test]
    fn test_slide_frames_reveal_from_bottom() {
        let still = RgbaImage::from_pixel(4, 10, Rgba([1, 2, 3, 255]));
        let frames: Vec<_> = SlideFrames::new(&still, vec![0.0, 3.0, 10.0]).unwrap().collect();
        assert_eq!(frames.len(), 3);

        let opaque_rows = |img: &RgbaImage| (0..10).filter(|&y| img.get_pixel(0, y).0[3] == 255).count();
        assert_eq!(opaque_rows(&frames[0]), 0);
        assert_eq!(opaque_rows(&frames[1]), 3);
        assert_eq!(opaque_rows(&frames[2]), 10);
        // revealed rows sit at the bottom
        assert_eq!(frames[1].get_pixel(0, 9).0[3], 255);
        assert_eq!(frames[1].get_pixel(0, 6).0[3], 0);
    }
}

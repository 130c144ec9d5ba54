//! Auto-resize: grow the canvas so the wrapped reason fits between the
//! separators.
//!
//! ## Protocol
//!
//! 1. Wrap the reason at `reason_max_width`.
//! 2. If the wrapped block is taller than `reason_max_height`, grow the
//!    height by the difference (rounded up to whole pixels).
//! 3. If `resize_limit` is above the configured height, never grow past it.
//!    Text that still does not fit simply overflows.
//!
//! This is a single correction pass. Only the bottom-separator chain depends
//! on the height, so one pass is enough for the usual case; the result is not
//! re-wrapped at the new height.

use super::Layout;
use crate::citation::Citation;
use crate::font::Font;
use crate::text;

/// Outcome of resolving the render height.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Height the canvas is created at
    pub height: u32,
    /// Height configured on the citation
    pub original_height: u32,
    /// Reason text wrapped at the reason width
    pub wrapped_reason: String,
    /// Whether `resize_limit` cut the growth short
    pub clamped: bool,
}

impl Resolution {
    pub fn resized(&self) -> bool {
        self.height != self.original_height
    }

    pub fn reason_lines(&self) -> usize {
        text::line_count(&self.wrapped_reason)
    }
}

/// Resolve the height a citation will be rendered at.
///
/// Without `resize_reason` the configured height is returned unchanged. The
/// resolved height is never smaller than the configured one.
pub fn resolve(citation: &Citation, font: &Font) -> Resolution {
    let original_height = citation.height();
    let layout = Layout::new(citation, font);
    let wrapped_reason = text::wrap(&citation.reason, font, layout.reason_max_width());

    let mut resolution = Resolution {
        height: original_height,
        original_height,
        wrapped_reason,
        clamped: false,
    };

    if !citation.resize_reason {
        return resolution;
    }

    let max_height = layout.reason_max_height();
    if text::text_fits_height(&resolution.wrapped_reason, font, max_height) {
        return resolution;
    }

    let needed = text::block_height(&resolution.wrapped_reason, font) - max_height;
    let mut height = original_height + needed.ceil() as u32;

    if citation.resize_limit > original_height && height > citation.resize_limit {
        log::debug!(
            "reason needs height {} but resize limit is {}, clamping",
            height,
            citation.resize_limit
        );
        height = citation.resize_limit;
        resolution.clamped = true;
    }

    log::debug!(
        "resizing citation from {} to {} to fit {} reason lines",
        original_height,
        height,
        resolution.reason_lines()
    );
    resolution.height = height;
    resolution
}

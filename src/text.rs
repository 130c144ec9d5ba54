//! # Text Wrapping and Fit Checks
//!
//! Greedy word wrapping against a pixel width, and the height comparison the
//! auto-resize protocol is built on.
//!
//! ## Wrapping rules
//!
//! - Explicit `\n` breaks are kept; each line is split on single spaces.
//! - Words accumulate until appending one would exceed `max_width`; the line
//!   is committed without it and that word starts the next line.
//! - A word wider than `max_width` on its own is emitted alone, never split.
//! - Each line is trimmed, and so is the final result.
//!
//! Wrapping never fails: text that cannot fit still produces a best-effort
//! result and overflow shows up only through [`text_fits_height`].

use crate::font::Font;

pub use crate::font::TextMetrics;

/// Wrap `text` so each line measures at most `max_width` pixels.
///
/// The only lines allowed to exceed `max_width` are single words that are
/// wider than `max_width` by themselves.
pub fn wrap(text: &str, font: &Font, max_width: f32) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in text.split('\n') {
        let mut current: Vec<&str> = Vec::new();
        for word in line.split(' ') {
            current.push(word);
            if current.len() > 1 && font.measure(&current.join(" ")).width > max_width {
                current.pop();
                lines.push(current.join(" ").trim().to_string());
                current.clear();
                current.push(word);
            }
        }
        lines.push(current.join(" ").trim().to_string());
    }

    lines.join("\n").trim().to_string()
}

/// Number of lines `text` is drawn on.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Height of `text` drawn as a block: one line height, measured on the
/// whole string, per line.
pub fn block_height(text: &str, font: &Font) -> f32 {
    font.line_height(text) * line_count(text) as f32
}

/// Whether `text` drawn as a block fits in `max_height` pixels.
pub fn text_fits_height(text: &str, font: &Font, max_height: f32) -> bool {
    block_height(text, font) <= max_height
}

/// Whether `text` measures at most `max_width` pixels wide.
pub fn text_fits_width(text: &str, font: &Font, max_width: f32) -> bool {
    font.measure(text).width <= max_width
}

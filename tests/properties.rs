//! # Layout Properties
//!
//! Wrapping and auto-resize invariants, checked with the embedded bitmap
//! font over a spread of inputs.

use citation::font::Font;
use citation::layout::{self, Layout};
use citation::text;
use citation::{Assets, Barcode, Citation};

const SAMPLES: &[&str] = &[
    "",
    "x",
    "Protocol Violated.\nEntry Permit: Invalid Name",
    "Glory to Arstotzka",
    "Supercalifragilisticexpialidociousnessinglyextraordinarily long",
    "a b c d e f g h i j k l m n o p q r s t u v w x y z a b c d e f g h i j k l m n o p",
    "The quick brown fox jumps over the lazy dog while the border guard checks papers",
];

fn font(size: f32) -> Font {
    Assets::builtin().unwrap().font(size).unwrap()
}

fn citation(reason: &str) -> Citation {
    let mut c = Citation::new(400, 200, Barcode::new([1u8, 0, 1]).unwrap()).unwrap();
    c.reason = reason.to_string();
    c
}

#[test]
fn test_wrap_is_idempotent() {
    let font = font(16.0);
    for width in [40.0, 120.0, 364.0] {
        for sample in SAMPLES {
            let once = text::wrap(sample, &font, width);
            let twice = text::wrap(&once, &font, width);
            assert_eq!(once, twice, "sample {:?} at width {}", sample, width);
        }
    }
}

#[test]
fn test_wrapped_lines_respect_width() {
    let font = font(16.0);
    for width in [40.0, 120.0, 364.0] {
        for sample in SAMPLES {
            for line in text::wrap(sample, &font, width).lines() {
                let fits = font.measure(line).width <= width;
                assert!(fits || !line.contains(' '), "line {:?} exceeds {}", line, width);
            }
        }
    }
}

#[test]
fn test_fits_height_is_monotonic() {
    let font = font(16.0);
    for sample in SAMPLES {
        let wrapped = text::wrap(sample, &font, 120.0);
        let mut fitted = false;
        for height in (0..400).step_by(5) {
            let fits = text::text_fits_height(&wrapped, &font, height as f32);
            assert!(!fitted || fits, "{:?} stopped fitting at {}", sample, height);
            fitted |= fits;
        }
    }
}

#[test]
fn test_resize_never_shrinks() {
    let font = font(16.0);
    for sample in SAMPLES {
        let long = sample.repeat(6);
        for reason in [sample.to_string(), long] {
            let mut c = citation(&reason);
            c.resize_reason = true;
            assert!(layout::resolve(&c, &font).height >= c.height());
        }
    }
}

#[test]
fn test_resize_clamps_to_limit() {
    let font = font(16.0);
    let mut c = citation(&"Unauthorized-Contraband ".repeat(20));
    c.resize_reason = true;
    c.resize_limit = 230;

    let resolution = layout::resolve(&c, &font);
    assert_eq!(resolution.height, 230);
    assert!(resolution.clamped);
}

#[test]
fn test_resized_reason_fits() {
    let font = font(16.0);
    let mut c = citation(&"Unauthorized-Contraband ".repeat(20));
    c.resize_reason = true;

    let resolution = layout::resolve(&c, &font);
    assert!(resolution.resized());
    let grown = Layout::with_height(&c, &font, resolution.height);
    assert!(text::text_fits_height(&resolution.wrapped_reason, &font, grown.reason_max_height()));
}

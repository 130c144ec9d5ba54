//! # Seal Logo Generator
//!
//! Generates the built-in citation seal: a five-pointed star inside a ring.
//! Used when no `logo.png` asset is available.

use image::{Rgba, RgbaImage};
use std::f32::consts::{PI, TAU};

/// Seal logo generator.
pub struct Seal;

impl Seal {
    /// Logo size in pixels (width and height).
    pub const SIZE: u32 = 32;

    /// Generate the seal as a monochrome-alpha image.
    ///
    /// Inked pixels are opaque black, everything else is transparent.
    pub fn image() -> RgbaImage {
        let size = Self::SIZE;
        let center = size as f32 / 2.0;
        let ring_outer = center;
        let ring_inner = ring_outer - 2.0;
        let star_outer = ring_inner - 2.0;
        let star_inner = star_outer * 0.382;

        RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            let on_ring = dist <= ring_outer && dist >= ring_inner;
            if on_ring || is_inside_star(dx, dy, star_outer, star_inner) {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }
}

/// Whether a point (relative to the center) falls inside a five-pointed star
/// with its top point facing up.
fn is_inside_star(dx: f32, dy: f32, outer_r: f32, inner_r: f32) -> bool {
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > outer_r {
        return false;
    }

    let sector = TAU / 5.0;
    let half = sector / 2.0;
    let local = (dy.atan2(dx) + PI / 2.0).rem_euclid(TAU).rem_euclid(sector);

    // Edge radius runs outer -> inner -> outer across a sector
    let t = if local < half {
        local / half
    } else {
        1.0 - (local - half) / half
    };
    dist <= outer_r * (1.0 - t) + inner_r * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p.0[3] > 0).count()
    }

    #[test]
    fn test_seal_dimensions() {
        let img = Seal::image();
        assert_eq!(img.dimensions(), (Seal::SIZE, Seal::SIZE));
    }

    #[test]
    fn test_seal_center_and_corner() {
        let img = Seal::image();
        let c = Seal::SIZE / 2;
        assert_eq!(img.get_pixel(c, c).0[3], 255);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_seal_ring_is_inked() {
        let img = Seal::image();
        // Middle of the left edge sits on the ring
        assert_eq!(img.get_pixel(0, Seal::SIZE / 2).0[3], 255);
        assert_eq!(img.get_pixel(1, Seal::SIZE / 2).0[3], 255);
    }

    #[test]
    fn test_seal_is_partly_transparent() {
        let img = Seal::image();
        let total = (Seal::SIZE * Seal::SIZE) as usize;
        let count = inked(&img);
        assert!(count > total / 5, "seal has too few pixels: {count}");
        assert!(count < total * 3 / 4, "seal has too many pixels: {count}");
    }
}

//! # Image Encoding
//!
//! PNG for stills, GIF for the slide-in animation.

use crate::error::Result;
use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::png::PngEncoder;
use image::{Delay, ExtendedColorType, ImageEncoder, RgbaImage};
use std::io::Write;

/// Encode an RGBA image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    PngEncoder::new(&mut png_bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

/// GIF output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifSettings {
    /// Frames per second
    pub frame_rate: u32,
    /// Quantizer speed, 1 (best) to 30 (fastest)
    pub quality: u8,
    /// Loop forever instead of playing once
    pub repeat: bool,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self {
            frame_rate: 10,
            quality: 5,
            repeat: true,
        }
    }
}

impl GifSettings {
    fn speed(&self) -> i32 {
        self.quality.clamp(1, 30) as i32
    }

    fn delay(&self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.frame_rate.max(1))
    }
}

/// Streaming GIF encoder. Fully transparent pixels become the GIF's
/// transparent color.
pub struct GifSequence<W: Write> {
    encoder: GifEncoder<W>,
    delay: Delay,
    frames: usize,
}

impl<W: Write> GifSequence<W> {
    pub fn new(writer: W, settings: &GifSettings) -> Result<Self> {
        let mut encoder = GifEncoder::new_with_speed(writer, settings.speed());
        let repeat = if settings.repeat {
            Repeat::Infinite
        } else {
            Repeat::Finite(0)
        };
        encoder.set_repeat(repeat)?;
        Ok(Self {
            encoder,
            delay: settings.delay(),
            frames: 0,
        })
    }

    pub fn add_frame(&mut self, image: RgbaImage) -> Result<()> {
        self.encoder
            .encode_frame(image::Frame::from_parts(image, 0, 0, self.delay))?;
        self.frames += 1;
        log::debug!("encoded frame {}", self.frames);
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush the trailer and return the frame count.
    pub fn finish(self) -> Result<usize> {
        let frames = self.frames;
        drop(self.encoder);
        log::info!("GIF finished with {} frames", frames);
        Ok(frames)
    }
}

/// Encode a sequence of frames into GIF bytes.
pub fn encode_gif<I>(frames: I, settings: &GifSettings) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = RgbaImage>,
{
    let mut gif_bytes = Vec::new();
    {
        let mut sequence = GifSequence::new(&mut gif_bytes, settings)?;
        for frame in frames {
            sequence.add_frame(frame)?;
        }
        sequence.finish()?;
    }
    Ok(gif_bytes)
}

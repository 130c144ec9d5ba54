//! # Assets
//!
//! Fonts and the logo a citation is drawn with.
//!
//! An asset directory must contain `BMmini.ttf` and `logo.png`. Both are
//! checked when [`Assets`] is created, so a bad directory fails before any
//! rendering starts. The logo is decoded lazily on first use and cached.
//!
//! [`Assets::builtin`] needs no files: it uses the embedded Spleen bitmap
//! font and the procedural [`Seal`] logo.

use crate::error::{CitationError, Result};
use crate::font::{BitmapFace, Font, FontRegistry};
use crate::logos::Seal;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Default asset directory, relative to the working directory.
pub const DEFAULT_DIR: &str = "assets";
pub const FONT_FILE: &str = "BMmini.ttf";
pub const LOGO_FILE: &str = "logo.png";
/// Family the asset font is registered under.
pub const FONT_FAMILY: &str = "BMmini";
/// Family of the embedded bitmap font.
pub const BUILTIN_FAMILY: &str = "Spleen";

#[derive(Debug, Clone)]
enum LogoSource {
    File(PathBuf),
    Builtin,
}

/// Loaded fonts plus a lazily decoded logo.
#[derive(Debug)]
pub struct Assets {
    fonts: FontRegistry,
    family: String,
    logo_source: LogoSource,
    logo: OnceLock<RgbaImage>,
}

impl Assets {
    /// Load assets from `dir`.
    ///
    /// Fails with [`CitationError::MissingAsset`] if the directory or either
    /// required file is missing.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CitationError::MissingAsset(dir.to_path_buf()));
        }
        let font_path = dir.join(FONT_FILE);
        let logo_path = dir.join(LOGO_FILE);
        for path in [&font_path, &logo_path] {
            if !path.is_file() {
                return Err(CitationError::MissingAsset(path.clone()));
            }
        }

        let mut fonts = FontRegistry::new();
        fonts.register_from_path(&font_path, FONT_FAMILY)?;
        log::debug!("registered {} from {}", FONT_FAMILY, font_path.display());

        Ok(Self {
            fonts,
            family: FONT_FAMILY.to_string(),
            logo_source: LogoSource::File(logo_path),
            logo: OnceLock::new(),
        })
    }

    /// Assets that need no files on disk.
    pub fn builtin() -> Result<Self> {
        let mut fonts = FontRegistry::new();
        fonts.register(BUILTIN_FAMILY, Arc::new(BitmapFace::new()?));
        Ok(Self {
            fonts,
            family: BUILTIN_FAMILY.to_string(),
            logo_source: LogoSource::Builtin,
            logo: OnceLock::new(),
        })
    }

    /// Replace the logo with an already decoded image.
    pub fn with_logo(mut self, logo: RgbaImage) -> Self {
        self.logo = OnceLock::from(logo);
        self
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Family text is drawn with.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The text font at `size` pixels.
    pub fn font(&self, size: f32) -> Result<Font> {
        self.fonts.font(&self.family, size)
    }

    /// The logo, decoded on first call.
    pub fn logo(&self) -> Result<&RgbaImage> {
        if let Some(logo) = self.logo.get() {
            return Ok(logo);
        }
        let decoded = match &self.logo_source {
            LogoSource::File(path) => {
                log::debug!("loading logo from {}", path.display());
                image::open(path)?.to_rgba8()
            }
            LogoSource::Builtin => Seal::image(),
        };
        Ok(self.logo.get_or_init(|| decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_assets() {
        let assets = Assets::builtin().unwrap();
        assert_eq!(assets.family(), BUILTIN_FAMILY);
        let font = assets.font(16.0).unwrap();
        assert_eq!(font.size(), 16.0);
        assert_eq!(assets.logo().unwrap().dimensions(), (Seal::SIZE, Seal::SIZE));
    }

    #[test]
    fn test_logo_is_cached() {
        let assets = Assets::builtin().unwrap();
        let first = assets.logo().unwrap() as *const RgbaImage;
        let second = assets.logo().unwrap() as *const RgbaImage;
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_logo_overrides() {
        let assets = Assets::builtin().unwrap().with_logo(RgbaImage::new(4, 2));
        assert_eq!(assets.logo().unwrap().dimensions(), (4, 2));
    }

    #[test]
    fn test_missing_directory() {
        let err = Assets::from_dir("/nonexistent/citation-assets").unwrap_err();
        assert!(matches!(err, CitationError::MissingAsset(_)));
    }

    #[test]
    fn test_missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::new(1, 1).save(dir.path().join(LOGO_FILE)).unwrap();
        match Assets::from_dir(dir.path()).unwrap_err() {
            CitationError::MissingAsset(path) => assert!(path.ends_with(FONT_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_logo_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FONT_FILE), b"not a font").unwrap();
        match Assets::from_dir(dir.path()).unwrap_err() {
            CitationError::MissingAsset(path) => assert!(path.ends_with(LOGO_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparseable_font() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FONT_FILE), b"not a font").unwrap();
        RgbaImage::new(1, 1).save(dir.path().join(LOGO_FILE)).unwrap();
        assert!(matches!(Assets::from_dir(dir.path()), Err(CitationError::Font(_))));
    }
}

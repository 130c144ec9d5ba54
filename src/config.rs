//! # Citation Parameters
//!
//! JSON parameter files describing one citation, in the shape the original
//! print script read:
//!
//! ```
//! use citation::config::{CitationParams, FileType};
//!
//! let params: CitationParams = r#"{
//!     "width": 400,
//!     "height": 200,
//!     "barcode": [1, 0, 1, 1, 0],
//!     "violation": "Protocol Violated.",
//!     "reason": "Entry Permit: Invalid Name",
//!     "fileType": "gif"
//! }"#.parse()?;
//!
//! assert_eq!(params.file_type, FileType::Gif);
//! let citation = params.to_citation()?;
//! assert_eq!(citation.reason, "Protocol Violated.\nEntry Permit: Invalid Name");
//! assert!(citation.resize_reason);
//! # Ok::<(), citation::CitationError>(())
//! ```

use crate::citation::{Barcode, Citation, Palette};
use crate::error::{CitationError, Result};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

fn default_true() -> bool {
    true
}

/// Output format selected by a parameter file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Png,
    Gif,
}

impl FileType {
    pub fn extension(self) -> &'static str {
        match self {
            FileType::Png => "png",
            FileType::Gif => "gif",
        }
    }

    pub fn is_animated(self) -> bool {
        self == FileType::Gif
    }
}

/// One citation as described in a JSON parameter file.
///
/// Text fields left out keep the citation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationParams {
    pub width: u32,
    pub height: u32,
    pub barcode: Barcode,
    #[serde(default)]
    pub title: Option<String>,
    /// Prepended to the reason on its own line
    #[serde(default)]
    pub violation: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub penalty: Option<String>,
    #[serde(default)]
    pub file_type: FileType,
    #[serde(default = "default_true")]
    pub resize_reason: bool,
    #[serde(default)]
    pub resize_limit: u32,
    #[serde(default)]
    pub palette: Option<Palette>,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub frame_rate: Option<u32>,
}

impl CitationParams {
    /// Read parameters from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        json.parse()
    }

    /// Build the citation, validating dimensions.
    pub fn to_citation(&self) -> Result<Citation> {
        let mut citation = Citation::new(self.width, self.height, self.barcode.clone())?;

        if let Some(title) = &self.title {
            citation.title = title.clone();
        }
        let reason = self.reason.as_deref().unwrap_or(&citation.reason);
        citation.reason = match &self.violation {
            Some(violation) => format!("{}\n{}", violation, reason),
            None => reason.to_string(),
        };
        if let Some(penalty) = &self.penalty {
            citation.penalty = penalty.clone();
        }
        if let Some(palette) = self.palette {
            citation.palette = palette;
        }
        if let Some(size) = self.font_size {
            if size <= 0.0 {
                return Err(CitationError::Font(format!("font size must be positive, got {}", size)));
            }
            citation.geometry.font_size = size;
        }
        citation.resize_reason = self.resize_reason;
        citation.resize_limit = self.resize_limit;

        Ok(citation)
    }

    /// Render options matching the file type and frame rate.
    pub fn render_options(&self) -> RenderOptions {
        match (self.file_type, self.frame_rate) {
            (FileType::Gif, Some(rate)) => RenderOptions::animated(rate),
            (FileType::Gif, None) => RenderOptions::animated(RenderOptions::default().gif.frame_rate),
            (FileType::Png, _) => RenderOptions::default(),
        }
    }

    /// File name the CLI writes to when no output is given.
    pub fn default_output(&self) -> String {
        format!("citation.{}", self.file_type.extension())
    }
}

impl FromStr for CitationParams {
    type Err = CitationError;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

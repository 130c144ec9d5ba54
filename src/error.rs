//! # Error Types
//!
//! This module defines error types used throughout the citation library.
//!
//! Invalid configuration is rejected at the point of construction or
//! mutation. Text that does not fit its box is *not* an error: overflow is
//! accepted visually and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for citation operations
#[derive(Debug, Error)]
pub enum CitationError {
    /// Width or height below its minimum
    #[error("Invalid {field}: {value} is smaller than the minimum of {min}")]
    InvalidDimension {
        field: &'static str,
        value: u32,
        min: u32,
    },

    /// Odd width or height with no even value above it
    #[error("Invalid {field}: {value} is too large")]
    DimensionTooLarge { field: &'static str, value: u32 },

    /// Barcode digit other than 0 or 1
    #[error("Invalid barcode: {0} is not a binary digit (barcodes can only contain ones and zeros)")]
    InvalidBarcode(i64),

    /// Non-finite or negative geometry knob
    #[error("Invalid geometry: {field} must be a finite, non-negative number (got {value})")]
    InvalidGeometry { field: &'static str, value: f32 },

    /// A drawing surface could not be allocated
    #[error("Cannot create a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    /// Unparseable color string
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Required font, logo or asset directory is absent
    #[error("Missing asset: {} is nowhere to be found", .0.display())]
    MissingAsset(PathBuf),

    /// Font loading or lookup error
    #[error("Font error: {0}")]
    Font(String),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Malformed citation parameters
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = CitationError> = std::result::Result<T, E>;

//! # Citation - M.O.A. Citation Renderer
//!
//! Citation renders parody bureaucratic citation tickets, the kind handed out
//! at an immigration checkpoint. It provides:
//!
//! - **Layout engine**: every position derived from size, geometry and font
//! - **Auto-resize**: the canvas grows until a long reason fits
//! - **Frame renderer**: borders, separators, barcode, logo and text
//! - **Animation**: an eased slide-in encoded as GIF
//!
//! ## Quick Start
//!
//! ```
//! use citation::{Assets, Barcode, Citation, RenderOptions};
//!
//! let mut citation = Citation::new(400, 200, Barcode::new([1u8, 0, 1, 1, 0])?)?;
//! citation.reason = "Protocol Violated.\nEntry Permit: Invalid Name".into();
//! citation.resize_reason = true;
//!
//! let assets = Assets::builtin()?;
//! let png = citation.render(&assets, &RenderOptions::default())?;
//! assert_eq!(&png[1..4], b"PNG");
//!
//! # Ok::<(), citation::CitationError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`citation`] | The citation record, barcode and colors |
//! | [`layout`] | Derived positions and auto-resize |
//! | [`render`] | Drawing surface, frame renderer, output |
//! | [`animation`] | Easing, checkpoints and slide-in frames |
//! | [`encode`] | PNG and GIF encoding |
//! | [`assets`] | Fonts and logo |
//! | [`config`] | JSON parameter files |
//! | [`error`] | Error types |

pub mod animation;
pub mod assets;
pub mod citation;
pub mod config;
pub mod encode;
pub mod error;
pub mod font;
pub mod layout;
pub mod logos;
pub mod render;
pub mod text;

// Re-exports for convenience
pub use assets::Assets;
pub use citation::{Barcode, Citation, Color, Geometry, Palette};
pub use error::CitationError;
pub use render::{RenderOptions, render};

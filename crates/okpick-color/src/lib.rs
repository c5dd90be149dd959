//! # okpick-color
//!
//! Unified color picker API for the okpick workspace.
//!
//! This crate ties the conversion crates together behind a registry of
//! picker color spaces and adds the operations a picker front end needs on
//! top of raw conversions.
//!
//! # Modules
//!
//! - [`space`] - Registry of [`ColorSpace`](space::ColorSpace) conversion tables
//! - [`contrast`] - WCAG relative luminance and contrast ratio
//! - [`render`] - Gradient bitmaps and the background render worker
//!
//! # Quick Start
//!
//! ```rust
//! use okpick_color::prelude::*;
//!
//! let okhsv = ColorSpace::get(ColorSpaceId::Okhsv);
//! let orange = Color::new(255.0, 128.0, 0.0);
//!
//! let hsv = (okhsv.from_srgb)(orange);
//! let back = (okhsv.to_srgb)(hsv);
//! assert!(back.max_abs_diff(orange) < 0.5);
//!
//! let hex = rgb_to_hex(back);
//! assert_eq!(hex, "#ff8000");
//! ```
//!
//! # Sub-crates
//!
//! The conversion crates are re-exported so one dependency is enough:
//!
//! - [`transfer`] - sRGB transfer functions
//! - [`oklab`] - Oklab, gamut geometry, Okhsv, Okhsl, Oklch
//! - [`legacy`] - HSL, HSV and hex
//! - [`math`] - Matrices and interpolation helpers
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for gradient requests and core types

#![warn(missing_docs)]

pub mod contrast;
pub mod render;
pub mod space;

pub use okpick_legacy as legacy;
pub use okpick_math as math;
pub use okpick_oklab as oklab;
pub use okpick_transfer as transfer;

pub use contrast::{ContrastLevel, contrast_ratio, contrast_ratio_srgb, relative_luminance};
pub use render::{Bitmap, GradientKind, GradientRequest, RenderWorker, render_gradient};
pub use space::{ColorSpace, ConvertFn, convert};

/// Prelude module for convenient imports.
///
/// ```rust
/// use okpick_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contrast::{ContrastLevel, contrast_ratio, contrast_ratio_srgb};
    pub use crate::render::{GradientKind, GradientRequest, RenderWorker, render_gradient};
    pub use crate::space::{ColorSpace, convert};
    pub use okpick_core::{Color, ColorSpaceId, Error, Result};
    pub use okpick_legacy::{hex_to_rgb, rgb_to_hex};
}

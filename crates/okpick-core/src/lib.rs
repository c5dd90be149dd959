//! # okpick-core
//!
//! Core types for the okpick color engine.
//!
//! This crate provides the foundational types used throughout the okpick workspace:
//!
//! - [`Color`], [`ColorWithAlpha`] - Plain color triples whose meaning depends on the space
//! - [`ColorSpaceId`] - Tag identifying a picker color space, with per-space metadata
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Crate Structure
//!
//! This crate is the foundation of okpick and has no internal dependencies.
//! All other okpick crates depend on `okpick-core`:
//!
//! ```text
//! okpick-core (this crate)
//!    ^
//!    |
//!    +-- okpick-math (glam matrices, scalar helpers)
//!    +-- okpick-transfer (sRGB transfer functions)
//!    +-- okpick-oklab (Oklab, Okhsv, Okhsl, Oklch)
//!    +-- okpick-legacy (HSL, HSV, hex)
//!    +-- okpick-color (registry, contrast, gradient rendering)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Color`], [`ColorWithAlpha`] and [`ColorSpaceId`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod colorspace;
pub mod error;

// Re-exports for convenience
pub use color::*;
pub use colorspace::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use okpick_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{luminance_rec709, Color, ColorWithAlpha, REC709_LUMA};
    pub use crate::colorspace::{Axis, ColorSpaceId};
    pub use crate::error::{Error, Result};
}

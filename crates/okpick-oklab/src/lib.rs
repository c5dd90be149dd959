//! # okpick-oklab
//!
//! Perceptual color spaces built on Oklab.
//!
//! # Modules
//!
//! - [`lab`] - Oklab primitives and the `toe` lightness curve
//! - [`gamut`] - sRGB gamut geometry: cusp, boundary intersection, clipping
//! - [`okhsv`] - Okhsv <-> sRGB
//! - [`okhsl`] - Okhsl <-> sRGB
//! - [`oklch`] - Oklch <-> sRGB with gamut clipping
//!
//! # Conventions
//!
//! sRGB colors are [`Color`](okpick_core::Color) triples in 0..255.
//! Okhsv and Okhsl components are in [0, 1] with hue as a fraction of a turn.
//! Oklch is ordered `(l, c, h)`.
//!
//! Conversions are pure functions. Inputs are not range checked; degenerate
//! inputs (black, white, grays) take explicit short cuts instead of dividing
//! by zero, so every function returns finite values for finite input.
//!
//! # Usage
//!
//! ```rust
//! use okpick_core::Color;
//! use okpick_oklab::{okhsl_to_srgb, srgb_to_okhsl};
//!
//! let orange = Color::new(255.0, 128.0, 0.0);
//! let hsl = srgb_to_okhsl(orange);
//! let back = okhsl_to_srgb(hsl);
//! assert!(back.max_abs_diff(orange) < 0.5);
//! ```
//!
//! # Reference
//!
//! Bjorn Ottosson, "Okhsv and Okhsl: two new color spaces for color picking" (2021)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::excessive_precision)]

pub mod gamut;
pub mod lab;
pub mod okhsl;
pub mod okhsv;
pub mod oklch;

pub use gamut::{
    Cs, Cusp, DEFAULT_CLIP_ALPHA, GamutClip, St, compute_max_saturation, find_cusp,
    find_gamut_intersection, get_cs, get_st_max, get_st_mid,
};
pub use lab::{
    Lab, linear_srgb_to_oklab, oklab_to_linear_srgb, oklab_to_srgb, srgb_to_oklab, toe, toe_inv,
};
pub use okhsl::{okhsl_to_srgb, srgb_to_okhsl};
pub use okhsv::{okhsv_to_srgb, srgb_to_okhsv};
pub use oklch::{Lch, oklch_to_srgb, oklch_to_srgb_with, srgb_to_oklch};

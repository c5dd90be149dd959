//! # okpick-legacy
//!
//! Classic (non-perceptual) color models and hex strings.
//!
//! - [`hsv`] - hexcone HSV <-> RGB
//! - [`hsl`] - bi-hexcone HSL <-> RGB
//! - [`hex`] - `#rgb` / `#rrggbb` parsing and formatting
//!
//! RGB is a [`Color`](okpick_core::Color) in 0..255, HSV/HSL components are
//! in [0, 1]. The formulas work directly on encoded sRGB values, which is why
//! equal steps in these spaces do not look equal.
//!
//! # Usage
//!
//! ```rust
//! use okpick_core::Color;
//! use okpick_legacy::{hex_to_rgb, rgb_to_hsv};
//!
//! let red = hex_to_rgb("#f00").unwrap();
//! assert_eq!(red, Color::new(255.0, 0.0, 0.0));
//! assert_eq!(rgb_to_hsv(red), Color::new(0.0, 1.0, 1.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hex;
pub mod hsl;
pub mod hsv;

pub use hex::{hex_to_rgb, rgb_to_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};

/// Hue in [0, 1) of normalized RGB, given its max, min and their difference.
///
/// Shared by HSV and HSL, which only differ in how they measure saturation
/// and brightness.
pub(crate) fn hexcone_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h / 6.0
}

//! # okpick-transfer
//!
//! Transfer functions for color encoding and decoding.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage or display. okpick works on sRGB displays only, so the sRGB
//! curve is the single canonical implementation used by every other crate
//! (Oklab conversions, legacy HSL/HSV, contrast ratio).
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Usage
//!
//! ```rust
//! use okpick_transfer::{srgb, srgb_decode, srgb_encode};
//!
//! // Decode sRGB to linear
//! let linear = srgb_decode(0.5);
//!
//! // Encode linear to sRGB
//! let encoded = srgb_encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! // 0..255 channel helpers
//! let lin = srgb::decode_u8(255.0);
//! assert!((lin - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `okpick-oklab` - sRGB <-> Oklab conversions
//! - `okpick-color` - relative luminance for contrast ratios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{decode as srgb_decode, encode as srgb_encode};

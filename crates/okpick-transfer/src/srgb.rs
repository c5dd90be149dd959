//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! Both directions are total over the reals and never clamp. Clamping, where
//! needed, happens at the space-conversion boundary.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use okpick_core::Color;

pub use self::{decode as eotf, encode as oetf};

/// Linear-light breakpoint of the encoding curve.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Encoded breakpoint of the decoding curve.
pub const ENCODED_BREAK: f64 = 0.04045;

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use okpick_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use okpick_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Decodes one 0..255 channel to linear light.
#[inline]
pub fn decode_u8(channel: f64) -> f64 {
    decode(channel / 255.0)
}

/// Encodes linear light to one 0..255 channel.
#[inline]
pub fn encode_u8(linear: f64) -> f64 {
    encode(linear) * 255.0
}

/// Decodes a 0..255 sRGB color to linear RGB in [0, 1].
#[inline]
pub fn linear_from_srgb(c: Color) -> [f64; 3] {
    [decode_u8(c[0]), decode_u8(c[1]), decode_u8(c[2])]
}

/// Encodes linear RGB to a 0..255 sRGB color.
#[inline]
pub fn srgb_from_linear(rgb: [f64; 3]) -> Color {
    Color::new(encode_u8(rgb[0]), encode_u8(rgb[1]), encode_u8(rgb[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let a = i as f64 / 1000.0;
            assert_abs_diff_eq!(eotf(oetf(a)), a, epsilon = 1e-9);
            assert_abs_diff_eq!(oetf(eotf(a)), a, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_branches_meet() {
        // Both pieces evaluated at the breakpoint agree to float tolerance.
        let lin = LINEAR_BREAK * 12.92;
        let pow = 1.055 * LINEAR_BREAK.powf(1.0 / 2.4) - 0.055;
        assert_abs_diff_eq!(lin, pow, epsilon = 1e-6);

        let lin = ENCODED_BREAK / 12.92;
        let pow = ((ENCODED_BREAK + 0.055) / 1.055).powf(2.4);
        assert_abs_diff_eq!(lin, pow, epsilon = 1e-6);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_clamping() {
        assert!(oetf(-0.5) < 0.0);
        assert!(oetf(2.0) > 1.0);
        assert!(eotf(1.5) > 1.0);
    }

    #[test]
    fn test_u8_helpers() {
        let white = linear_from_srgb(Color::WHITE);
        for v in white {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12);
        }
        let back = srgb_from_linear([0.0, 0.5, 1.0]);
        assert_abs_diff_eq!(back[2], 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(decode_u8(encode_u8(0.5)), 0.5, epsilon = 1e-12);
    }
}

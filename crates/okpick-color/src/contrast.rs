//! WCAG contrast ratio.
//!
//! Relative luminance is the Rec.709 weighted sum of linear sRGB, and the
//! ratio is `(L_max + 0.05) / (L_min + 0.05)`, from 1 (identical) up to 21
//! (black on white).
//!
//! # Example
//!
//! ```rust
//! use okpick_color::contrast::{ContrastLevel, contrast_ratio_srgb};
//! use okpick_core::Color;
//!
//! let ratio = contrast_ratio_srgb(Color::ZERO, Color::WHITE);
//! assert!((ratio - 21.0).abs() < 1e-9);
//! assert_eq!(ContrastLevel::from_ratio(ratio), ContrastLevel::Aaa);
//! ```

use std::fmt;

use okpick_core::{Color, luminance_rec709};
use okpick_transfer::srgb;

use crate::space::ConvertFn;

/// Minimum ratio for normal text at level AA.
pub const WCAG_AA: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const WCAG_AAA: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Relative luminance of an sRGB color (0..255), in [0, 1].
///
/// Channels are clamped to 0..255 before decoding.
pub fn relative_luminance(rgb: Color) -> f64 {
    luminance_rec709(srgb::linear_from_srgb(rgb.clamp(0.0, 255.0)))
}

/// Contrast ratio between two colors of the same space.
///
/// `to_srgb` maps both colors to sRGB first. The result is symmetric and
/// never below 1.
pub fn contrast_ratio(a: Color, b: Color, to_srgb: ConvertFn) -> f64 {
    let la = relative_luminance(to_srgb(a));
    let lb = relative_luminance(to_srgb(b));
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Contrast ratio of two sRGB colors.
#[inline]
pub fn contrast_ratio_srgb(a: Color, b: Color) -> f64 {
    contrast_ratio(a, b, |c| c)
}

/// Highest WCAG level a ratio satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContrastLevel {
    /// Below 3:1.
    Fail,
    /// Large text only (3:1).
    AaLarge,
    /// Normal text, AA (4.5:1).
    Aa,
    /// Normal text, AAA (7:1).
    Aaa,
}

impl ContrastLevel {
    /// Classifies a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA {
            Self::Aaa
        } else if ratio >= WCAG_AA {
            Self::Aa
        } else if ratio >= WCAG_AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ColorSpace;
    use approx::assert_abs_diff_eq;
    use okpick_core::ColorSpaceId;

    #[test]
    fn test_luminance_endpoints() {
        assert_eq!(relative_luminance(Color::ZERO), 0.0);
        assert_abs_diff_eq!(relative_luminance(Color::WHITE), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            relative_luminance(Color::new(0.0, 255.0, 0.0)),
            0.7152,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_symmetry_and_identity() {
        let a = Color::new(20.0, 90.0, 200.0);
        let b = Color::new(240.0, 230.0, 10.0);
        assert_eq!(contrast_ratio_srgb(a, b), contrast_ratio_srgb(b, a));
        assert_eq!(contrast_ratio_srgb(a, a), 1.0);
        assert!(contrast_ratio_srgb(a, b) > 1.0);
    }

    #[test]
    fn test_through_space() {
        let okhsl = ColorSpace::get(ColorSpaceId::Okhsl);
        let black = Color::new(0.0, 0.0, 0.0);
        let white = Color::new(0.0, 0.0, 1.0);
        let ratio = contrast_ratio(black, white, okhsl.to_srgb);
        assert_abs_diff_eq!(ratio, 21.0, epsilon = 1e-9);
        assert_eq!(ratio, contrast_ratio(white, black, okhsl.to_srgb));
    }

    #[test]
    fn test_levels() {
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(12.0), ContrastLevel::Aaa);
        assert!(ContrastLevel::Aaa > ContrastLevel::Aa);
        assert_eq!(ContrastLevel::AaLarge.to_string(), "AA large");
    }
}

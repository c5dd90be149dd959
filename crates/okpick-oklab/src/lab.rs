//! Oklab primitives.
//!
//! Oklab is a perceptual color space built from linear sRGB in three steps:
//! a 3x3 matrix to a cone-like LMS space, a cube root per component, and a
//! second 3x3 matrix to (L, a, b).
//!
//! ```text
//! linear RGB --M1--> LMS --cbrt--> LMS' --M2--> Lab
//! Lab --M2^-1--> LMS' --cube--> LMS --M1^-1--> linear RGB
//! ```
//!
//! The `toe` curve remaps Oklab L into a lightness estimate that matches
//! CIELab L* more closely in the dark range. Okhsv and Okhsl use it for their
//! lightness/value axes.
//!
//! # Reference
//!
//! Bjorn Ottosson, "A perceptual color space for image processing" (2020)

use okpick_core::Color;
use okpick_math::{DMat3, DVec3, mat3_from_rows};
use okpick_transfer::srgb;

/// Linear sRGB to LMS.
pub const LINEAR_TO_LMS: DMat3 = mat3_from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Non-linear LMS' to Oklab.
pub const LMS_TO_LAB: DMat3 = mat3_from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Oklab to non-linear LMS'.
pub const LAB_TO_LMS: DMat3 = mat3_from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS to linear sRGB.
pub const LMS_TO_LINEAR: DMat3 = mat3_from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// Chroma below which a color counts as achromatic.
///
/// The matrices are rounded to ten digits, so sRGB grays land a few 1e-8
/// away from the neutral axis instead of on it. The smallest chroma an
/// 8-bit sRGB color can have off that axis is several orders larger.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// A color in Oklab.
///
/// `l` is perceived lightness, roughly [0, 1] for sRGB colors. `a` and `b` are
/// the green-red and blue-yellow opponent axes and stay below about 0.4 in
/// magnitude for displayable colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Lab {
    /// Creates a Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Builds a Lab color from lightness, chroma and a hue direction.
    #[inline]
    pub fn from_lc(l: f64, c: f64, a_: f64, b_: f64) -> Self {
        Self::new(l, c * a_, c * b_)
    }

    /// Chroma: distance from the neutral axis.
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Whether the color sits on the neutral axis, within [`ACHROMATIC_CHROMA`].
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.chroma() < ACHROMATIC_CHROMA
    }

    /// Unit hue direction `(a_, b_)` together with the chroma.
    ///
    /// Zero chroma yields the direction `(0, 0)` instead of dividing by zero.
    #[inline]
    pub fn hue_direction(&self) -> (f64, f64, f64) {
        let c = self.chroma();
        let a_ = if self.a == 0.0 { 0.0 } else { self.a / c };
        let b_ = if self.b == 0.0 { 0.0 } else { self.b / c };
        (c, a_, b_)
    }

    /// Hue as a fraction of a full turn, in [0, 1].
    ///
    /// The angle is measured from the positive a axis.
    #[inline]
    pub fn hue(&self) -> f64 {
        0.5 + 0.5 * (-self.b).atan2(-self.a) / std::f64::consts::PI
    }

    /// Converts to a vector (L, a, b).
    #[inline]
    pub fn to_vec3(self) -> DVec3 {
        DVec3::new(self.l, self.a, self.b)
    }
}

impl From<DVec3> for Lab {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Unit hue direction for a hue expressed as a fraction of a turn.
#[inline]
pub fn hue_to_direction(h: f64) -> (f64, f64) {
    let angle = 2.0 * std::f64::consts::PI * h;
    (angle.cos(), angle.sin())
}

/// Converts linear sRGB to Oklab.
///
/// # Example
///
/// ```rust
/// use okpick_oklab::lab::linear_srgb_to_oklab;
///
/// let white = linear_srgb_to_oklab([1.0, 1.0, 1.0]);
/// assert!((white.l - 1.0).abs() < 1e-6);
/// assert!(white.a.abs() < 1e-6);
/// ```
pub fn linear_srgb_to_oklab(rgb: [f64; 3]) -> Lab {
    let lms = LINEAR_TO_LMS * DVec3::from(rgb);
    Lab::from(LMS_TO_LAB * lms.map(f64::cbrt))
}

/// Converts Oklab to linear sRGB without any clamping.
///
/// Out-of-gamut colors produce channels below 0 or above 1. The gamut search
/// needs the raw values; everything else goes through [`oklab_to_linear_srgb`].
pub fn oklab_to_linear_srgb_unclamped(lab: Lab) -> DVec3 {
    let lms_ = LAB_TO_LMS * lab.to_vec3();
    LMS_TO_LINEAR * lms_.map(|v| v * v * v)
}

/// Converts Oklab to linear sRGB.
///
/// Negative channels are floored at 0; the top is left open.
pub fn oklab_to_linear_srgb(lab: Lab) -> [f64; 3] {
    oklab_to_linear_srgb_unclamped(lab).max(DVec3::ZERO).to_array()
}

/// Converts a 0..255 sRGB color to Oklab.
pub fn srgb_to_oklab(c: Color) -> Lab {
    linear_srgb_to_oklab(srgb::linear_from_srgb(c))
}

/// Converts Oklab to a 0..255 sRGB color, clamping each channel to [0, 255].
pub fn oklab_to_srgb(lab: Lab) -> Color {
    srgb::srgb_from_linear(oklab_to_linear_srgb(lab)).clamp(0.0, 255.0)
}

const K1: f64 = 0.206;
const K2: f64 = 0.03;
const K3: f64 = (1.0 + K1) / (1.0 + K2);

/// Maps Oklab lightness to the perceptual lightness used by Okhsv/Okhsl.
#[inline]
pub fn toe(x: f64) -> f64 {
    let d = K3 * x - K1;
    0.5 * (d + (d * d + 4.0 * K2 * K3 * x).sqrt())
}

/// Inverse of [`toe`].
#[inline]
pub fn toe_inv(y: f64) -> f64 {
    (y * y + K1 * y) / (K3 * (y + K2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        let red = linear_srgb_to_oklab([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(red.l, 0.6279554, epsilon = 1e-4);
        assert_abs_diff_eq!(red.a, 0.2248631, epsilon = 1e-4);
        assert_abs_diff_eq!(red.b, 0.1258463, epsilon = 1e-4);

        let black = linear_srgb_to_oklab([0.0, 0.0, 0.0]);
        assert_eq!(black, Lab::default());
    }

    #[test]
    fn test_linear_roundtrip() {
        for rgb in [[0.2, 0.5, 0.9], [1.0, 0.0, 0.0], [0.01, 0.02, 0.0]] {
            let back = oklab_to_linear_srgb(linear_srgb_to_oklab(rgb));
            // ten-digit matrices invert each other to about 1e-7
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_floor_at_zero() {
        let raw = oklab_to_linear_srgb_unclamped(Lab::new(0.5, 0.4, 0.0));
        assert!(raw.min_element() < 0.0);

        let floored = oklab_to_linear_srgb(Lab::new(0.5, 0.4, 0.0));
        assert!(floored.iter().all(|&v| v >= 0.0));
        assert!(floored.iter().any(|&v| v == 0.0));
        // no clamping at the top
        assert!(oklab_to_linear_srgb(Lab::new(1.2, 0.0, 0.0))[0] > 1.0);
    }

    #[test]
    fn test_negative_cube_root() {
        // sign-preserving cube root keeps slightly out-of-gamut input finite
        let lab = linear_srgb_to_oklab([-0.1, 0.5, 0.5]);
        assert!(lab.to_vec3().is_finite());
    }

    #[test]
    fn test_hue_direction_guard() {
        let (c, a_, b_) = Lab::new(0.5, 0.0, 0.0).hue_direction();
        assert_eq!((c, a_, b_), (0.0, 0.0, 0.0));

        let (c, a_, b_) = Lab::new(0.5, 0.03, -0.04).hue_direction();
        assert_abs_diff_eq!(c, 0.05, epsilon = 1e-12);
        assert_abs_diff_eq!(a_ * a_ + b_ * b_, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for v in 0..=255 {
            let lab = srgb_to_oklab(Color::splat(v as f64));
            assert!(lab.is_achromatic(), "{v}: {lab:?}");
        }
        // the least saturated colors an 8-bit picker can produce
        for rgb in [[128.0, 128.0, 129.0], [1.0, 0.0, 0.0], [254.0, 255.0, 255.0]] {
            let lab = srgb_to_oklab(Color::from(rgb));
            assert!(!lab.is_achromatic(), "{rgb:?}: {lab:?}");
        }
    }

    #[test]
    fn test_hue_fraction() {
        let (a_, b_) = hue_to_direction(0.25);
        let h = Lab::new(0.5, 0.1 * a_, 0.1 * b_).hue();
        assert_abs_diff_eq!(h, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_toe_inverse() {
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            assert_abs_diff_eq!(toe_inv(toe(x)), x, epsilon = 1e-9);
            assert_abs_diff_eq!(toe(toe_inv(x)), x, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(toe(0.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(toe(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_toe_monotonic() {
        let mut prev = toe(0.0);
        for i in 1..=100 {
            let y = toe(i as f64 / 100.0);
            assert!(y > prev);
            prev = y;
        }
    }
}

//! Plain color value types.
//!
//! [`Color`] is an ordered triple of `f64`. It carries no color space tag: the
//! meaning of its components depends on which function produced it.
//!
//! | Space | Components | Range |
//! |-------|------------|-------|
//! | sRGB | r, g, b | [0, 255] |
//! | Okhsv / Hsv | h, s, v | [0, 1], h is a fraction of a turn |
//! | Okhsl / Hsl | h, s, l | [0, 1], h is a fraction of a turn |
//! | Oklch | l, c, h | l in [0, 1], c >= 0, h is a fraction of a turn |
//!
//! Conversions always return a new value; nothing here is mutated in place.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the relative luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f64; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Relative luminance of a *linear* RGB triple.
///
/// # Example
/// ```
/// use okpick_core::luminance_rec709;
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// assert!((luma - 0.3353).abs() < 1e-4);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f64; 3]) -> f64 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// An ordered triple of floating-point components.
///
/// # Example
///
/// ```rust
/// use okpick_core::Color;
///
/// let red = Color::new(255.0, 0.0, 0.0);
/// assert_eq!(red[0], 255.0);
/// assert_eq!(red.to_array(), [255.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub [f64; 3]);

impl Color {
    /// Black in sRGB, or the all-zero point of any space.
    pub const ZERO: Self = Self([0.0; 3]);

    /// sRGB white (255, 255, 255).
    pub const WHITE: Self = Self([255.0; 3]);

    /// Creates a color from three components.
    #[inline]
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self([c0, c1, c2])
    }

    /// Creates a color with all three components equal.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self([v, v, v])
    }

    /// Returns the components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Applies `f` to every component and returns the result.
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }

    /// Clamps every component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: f64, max: f64) -> Self {
        self.map(|v| v.max(min).min(max))
    }

    /// Returns `true` if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Largest absolute per-component difference to `other`.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        (0..3)
            .map(|i| (self.0[i] - other.0[i]).abs())
            .fold(0.0, f64::max)
    }

    /// Quantizes sRGB components (0..255) to bytes with rounding and clamping.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        [q(self.0[0]), q(self.0[1]), q(self.0[2])]
    }

    /// Creates an sRGB color from bytes.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }
}

impl Index<usize> for Color {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Self(arr)
    }
}

impl From<Color> for [f64; 3] {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// A [`Color`] with an alpha scalar in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorWithAlpha {
    /// Color components.
    pub color: Color,
    /// Opacity in [0, 1].
    pub alpha: f64,
}

impl ColorWithAlpha {
    /// Creates a color with the given alpha.
    #[inline]
    pub const fn new(color: Color, alpha: f64) -> Self {
        Self { color, alpha }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Returns a copy with the color replaced and the alpha kept.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Default for ColorWithAlpha {
    fn default() -> Self {
        Self::opaque(Color::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_index_and_array() {
        let c = Color::new(1.0, 2.0, 3.0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[2], 3.0);
        let arr: [f64; 3] = c.into();
        assert_eq!(Color::from(arr), c);
    }

    #[test]
    fn test_to_rgb8_rounds_and_clamps() {
        let c = Color::new(-3.0, 127.5, 300.0);
        assert_eq!(c.to_rgb8(), [0, 128, 255]);
        assert_eq!(Color::from_rgb8([1, 2, 3]), Color::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Color::new(10.0, 20.0, 30.0);
        let b = Color::new(10.5, 19.0, 30.25);
        assert_relative_eq!(a.max_abs_diff(b), 1.0);
    }

    #[test]
    fn test_luminance_white_is_one() {
        assert_relative_eq!(luminance_rec709([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_with_alpha() {
        let c = ColorWithAlpha::new(Color::splat(0.5), 0.25);
        let d = c.with_color(Color::ZERO);
        assert_eq!(d.alpha, 0.25);
        assert_eq!(ColorWithAlpha::default().alpha, 1.0);
    }
}

//! Oklch: the polar form of Oklab.
//!
//! Components are ordered `(l, c, h)`: Oklab lightness, chroma and hue as a
//! fraction of a turn. Unlike Okhsv and Okhsl, chroma is absolute, so most
//! `(l, c, h)` triples fall outside sRGB. Those are brought back with
//! [`GamutClip::PreserveChroma`], which keeps hue and lightness and gives
//! up chroma.

use okpick_core::Color;
use okpick_math::fract;
use okpick_transfer::srgb;

use crate::gamut::GamutClip;
use crate::lab::{Lab, hue_to_direction, oklab_to_linear_srgb_unclamped, srgb_to_oklab};

/// A color in Oklch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Oklab lightness.
    pub l: f64,
    /// Chroma, `sqrt(a^2 + b^2)`.
    pub c: f64,
    /// Hue in [0, 1).
    pub h: f64,
}

impl Lch {
    /// Creates an Lch color.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Converts to rectangular Oklab.
    pub fn to_lab(self) -> Lab {
        let (a_, b_) = hue_to_direction(self.h);
        Lab::from_lc(self.l, self.c, a_, b_)
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        if lab.is_achromatic() {
            return Self::new(lab.l, 0.0, 0.0);
        }
        let h = fract(lab.b.atan2(lab.a) / std::f64::consts::TAU);
        Self::new(lab.l, lab.chroma(), h)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        lch.to_lab()
    }
}

/// Converts sRGB in 0..255 to Oklch `(l, c, h)`.
///
/// Colors within [`ACHROMATIC_CHROMA`](crate::lab::ACHROMATIC_CHROMA) of the
/// neutral axis get chroma 0 and hue 0.
pub fn srgb_to_oklch(rgb: Color) -> Color {
    let lch = Lch::from(srgb_to_oklab(rgb));
    Color::new(lch.l, lch.c, lch.h)
}

/// Converts Oklch `(l, c, h)` to sRGB in 0..255, clipping chroma when the
/// color lies outside sRGB.
pub fn oklch_to_srgb(lch: Color) -> Color {
    oklch_to_srgb_with(lch, GamutClip::PreserveChroma)
}

/// Like [`oklch_to_srgb`] with an explicit clipping strategy.
pub fn oklch_to_srgb_with(lch: Color, clip: GamutClip) -> Color {
    let [l, c, h] = lch.to_array();
    let rgb = oklab_to_linear_srgb_unclamped(Lch::new(l, c, h).to_lab()).to_array();
    srgb::srgb_from_linear(clip.apply(rgb)).clamp(0.0, 255.0)
}

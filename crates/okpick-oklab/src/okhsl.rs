//! Okhsl: hue, saturation and lightness on top of Oklab.
//!
//! Lightness is `toe(L)`, so l = 0 is black and l = 1 is white for every hue.
//! Saturation is a piecewise rational remap of chroma through three reference
//! chromas from [`get_cs`](crate::gamut::get_cs): `C_0` shapes the low end,
//! `C_mid` is reached at s = 0.8 and `C_max` (the gamut boundary) at s = 1.

use okpick_core::Color;
use okpick_transfer::srgb;

use crate::gamut::{Cs, get_cs};
use crate::lab::{Lab, hue_to_direction, linear_srgb_to_oklab, oklab_to_linear_srgb, toe, toe_inv};

const MID: f64 = 0.8;
const MID_INV: f64 = 1.25;

/// Chroma for saturation `s` given the reference chromas.
fn saturation_to_chroma(s: f64, cs: Cs) -> f64 {
    if s < MID {
        let t = MID_INV * s;

        let k_1 = MID * cs.c_0;
        let k_2 = 1.0 - k_1 / cs.c_mid;

        t * k_1 / (1.0 - k_2 * t)
    } else {
        let t = (s - MID) / (1.0 - MID);

        let k_0 = cs.c_mid;
        let k_1 = (1.0 - MID) * cs.c_mid * cs.c_mid * MID_INV * MID_INV / cs.c_0;
        let k_2 = 1.0 - k_1 / (cs.c_max - cs.c_mid);

        k_0 + t * k_1 / (1.0 - k_2 * t)
    }
}

/// Inverse of [`saturation_to_chroma`].
fn chroma_to_saturation(c: f64, cs: Cs) -> f64 {
    if c < cs.c_mid {
        let k_1 = MID * cs.c_0;
        let k_2 = 1.0 - k_1 / cs.c_mid;

        let t = c / (k_1 + k_2 * c);
        t * MID
    } else {
        let k_0 = cs.c_mid;
        let k_1 = (1.0 - MID) * cs.c_mid * cs.c_mid * MID_INV * MID_INV / cs.c_0;
        let k_2 = 1.0 - k_1 / (cs.c_max - cs.c_mid);

        let t = (c - k_0) / (k_1 + k_2 * (c - k_0));
        MID + (1.0 - MID) * t
    }
}

/// Converts Okhsl (components in [0, 1]) to sRGB in 0..255.
///
/// `l = 1` is white and `l = 0` is black regardless of hue and saturation.
/// The result is clamped to [0, 255].
///
/// # Example
///
/// ```rust
/// use okpick_core::Color;
/// use okpick_oklab::okhsl_to_srgb;
///
/// assert_eq!(okhsl_to_srgb(Color::new(0.0, 0.0, 1.0)), Color::WHITE);
/// assert_eq!(okhsl_to_srgb(Color::new(0.7, 1.0, 0.0)), Color::ZERO);
/// ```
pub fn okhsl_to_srgb(hsl: Color) -> Color {
    let [h, s, l] = hsl.to_array();

    if l == 1.0 {
        return Color::WHITE;
    } else if l == 0.0 {
        return Color::ZERO;
    }

    let (a_, b_) = hue_to_direction(h);
    let lightness = toe_inv(l);

    let cs = get_cs(lightness, a_, b_);
    let c = saturation_to_chroma(s, cs);

    let rgb = oklab_to_linear_srgb(Lab::from_lc(lightness, c, a_, b_));
    srgb::srgb_from_linear(rgb).clamp(0.0, 255.0)
}

/// Converts sRGB in 0..255 to Okhsl.
///
/// Black maps to `(0, 0, 0)` and white to `(0, 0, 1)`. Grays get hue 0 and
/// saturation 0.
pub fn srgb_to_okhsl(rgb: Color) -> Color {
    if rgb == Color::ZERO {
        return Color::ZERO;
    }
    if rgb == Color::WHITE {
        return Color::new(0.0, 0.0, 1.0);
    }

    let lab = linear_srgb_to_oklab(srgb::linear_from_srgb(rgb));
    if lab.is_achromatic() {
        return Color::new(0.0, 0.0, toe(lab.l));
    }

    let (c, a_, b_) = lab.hue_direction();
    let cs = get_cs(lab.l, a_, b_);
    let s = chroma_to_saturation(c, cs);

    Color::new(lab.hue(), s, toe(lab.l))
}

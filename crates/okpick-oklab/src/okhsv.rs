//! Okhsv: hue, saturation and value on top of Oklab.
//!
//! Value 1 is the top surface of the sRGB gamut and saturation 1 is its outer
//! edge, so every `(h, s, v)` in the unit cube is a displayable color. Hue is
//! the Oklab hue angle as a fraction of a turn.
//!
//! The mapping first places the color in an idealized gamut triangle
//! (L_v, C_v at v = 1), then compensates for the toe and for the curved top
//! of the real gamut with a single scale factor.

use okpick_core::Color;
use okpick_transfer::srgb;

use crate::gamut::find_cusp;
use crate::lab::{
    Lab, hue_to_direction, linear_srgb_to_oklab, oklab_to_linear_srgb,
    oklab_to_linear_srgb_unclamped, toe, toe_inv,
};

/// Saturation slope that spreads saturation evenly near gray.
const S_0: f64 = 0.5;

/// Scale that takes the point `(l_vt, c_vt)` of a hue slice onto the gamut top.
#[inline]
fn top_scale(lab_vt: Lab) -> f64 {
    let rgb = oklab_to_linear_srgb_unclamped(lab_vt);
    (1.0 / rgb.x.max(rgb.y).max(rgb.z.max(0.0))).cbrt()
}

/// Converts Okhsv (components in [0, 1]) to sRGB in 0..255.
///
/// Value 0 is black for every hue and saturation. The result is clamped to
/// [0, 255].
///
/// # Example
///
/// ```rust
/// use okpick_core::Color;
/// use okpick_oklab::okhsv_to_srgb;
///
/// let c = okhsv_to_srgb(Color::new(0.5, 0.0, 1.0));
/// assert!((c[0] - 255.0).abs() < 0.5);
/// ```
pub fn okhsv_to_srgb(hsv: Color) -> Color {
    let [h, s, v] = hsv.to_array();
    if v == 0.0 {
        return Color::ZERO;
    }

    let (a_, b_) = hue_to_direction(h);

    let st_max = find_cusp(a_, b_).to_st();
    let s_max = st_max.s;
    let t_max = st_max.t;
    let k = 1.0 - S_0 / s_max;

    // L and C at v = 1 on the idealized triangle
    let denom = S_0 + t_max - t_max * k * s;
    let l_v = 1.0 - s * S_0 / denom;
    let c_v = s * t_max * S_0 / denom;

    let mut l = v * l_v;
    let mut c = v * c_v;

    // toe and curved top
    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l_new = toe_inv(l);
    c *= l_new / l;
    l = l_new;

    let scale_l = top_scale(Lab::from_lc(l_vt, c_vt, a_, b_));
    l *= scale_l;
    c *= scale_l;

    let rgb = oklab_to_linear_srgb(Lab::from_lc(l, c, a_, b_));
    srgb::srgb_from_linear(rgb).clamp(0.0, 255.0)
}

/// Converts sRGB in 0..255 to Okhsv.
///
/// Black maps to `(0, 0, 0)` and white to `(0, 0, 1)`. Grays get hue 0 and
/// saturation 0.
pub fn srgb_to_okhsv(rgb: Color) -> Color {
    if rgb == Color::ZERO {
        return Color::ZERO;
    }
    if rgb == Color::WHITE {
        return Color::new(0.0, 0.0, 1.0);
    }

    let lab = linear_srgb_to_oklab(srgb::linear_from_srgb(rgb));
    if lab.is_achromatic() {
        // The gray axis is the s = 0 line; only the value is left to recover.
        let white_scale = top_scale(Lab::new(toe_inv(1.0), 0.0, 0.0));
        return Color::new(0.0, 0.0, toe(lab.l / white_scale));
    }

    let (c, a_, b_) = lab.hue_direction();
    let h = lab.hue();

    let st_max = find_cusp(a_, b_).to_st();
    let s_max = st_max.s;
    let t_max = st_max.t;
    let k = 1.0 - S_0 / s_max;

    let t = t_max / (c + lab.l * t_max);
    let l_v = t * lab.l;
    let c_v = t * c;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let scale_l = top_scale(Lab::from_lc(l_vt, c_vt, a_, b_));
    let l = toe(lab.l / scale_l);

    let v = l / l_v;
    let s = (S_0 + t_max) * c_v / ((t_max * S_0) + t_max * k * c_v);

    Color::new(h, s, v)
}

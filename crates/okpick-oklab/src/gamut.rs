//! sRGB gamut geometry in Oklab.
//!
//! For a fixed hue the sRGB gamut, sliced in the (L, C) plane, is close to a
//! triangle with corners at black, white and the *cusp*: the point of maximum
//! chroma. The lower edge (black to cusp) is exactly straight; the upper edge
//! (cusp to white) is slightly curved.
//!
//! ```text
//!  L
//!  1 +  white
//!    | \
//!    |   \   upper edge (curved)
//!    |     * cusp
//!    |   /
//!    | /     lower edge (straight)
//!  0 +-------------- C
//! ```
//!
//! All functions take a *normalized* hue direction `(a_, b_)` with
//! `a_^2 + b_^2 = 1`. The achromatic direction `(0, 0)` is accepted where noted
//! and yields zero chroma.
//!
//! The polynomial coefficients and branch thresholds were fitted offline
//! against sRGB and are reproduced exactly.

use okpick_math::{DVec3, saturate, sign};

use crate::lab::{
    LAB_TO_LMS, LMS_TO_LINEAR, Lab, linear_srgb_to_oklab, oklab_to_linear_srgb_unclamped,
};

/// Substitute correction for channels whose Halley step points the wrong way.
const NO_INTERSECTION: f64 = 1.0e6;

/// Chroma below which a color is treated as gray by the clipping functions.
const CLIP_EPSILON: f64 = 1.0e-5;

/// How far outside the unit cube linear sRGB may stray and still count as
/// in gamut. Matrix round trips of 8-bit colors overshoot by about 1e-8.
const GAMUT_EPSILON: f64 = 1.0e-6;

/// Default `alpha` of the adaptive clipping strategies.
pub const DEFAULT_CLIP_ALPHA: f64 = 0.05;

/// Lightness and chroma of the maximum-chroma point of a hue slice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cusp {
    /// Lightness at the cusp.
    pub l: f64,
    /// Chroma at the cusp.
    pub c: f64,
}

impl Cusp {
    /// Slopes of the gamut triangle edges, see [`St`].
    ///
    /// `t` is 0 when the cusp has no chroma.
    pub fn to_st(self) -> St {
        let t = if self.c == 0.0 { 0.0 } else { self.c / (1.0 - self.l) };
        St {
            s: self.c / self.l,
            t,
        }
    }
}

/// Edge slopes of the gamut triangle: `s = C / L`, `t = C / (1 - L)`.
///
/// The largest chroma inside the triangle at lightness `L` is
/// `min(L * s, (1 - L) * t)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct St {
    /// Slope of the lower edge.
    pub s: f64,
    /// Slope of the upper edge.
    pub t: f64,
}

/// Reference chromas at one lightness, used by Okhsl saturation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cs {
    /// Hue-independent chroma that anchors low saturation.
    pub c_0: f64,
    /// Smoothed mid-gamut chroma, reached at saturation 0.8.
    pub c_mid: f64,
    /// Gamut boundary chroma, reached at saturation 1.
    pub c_max: f64,
}

/// Per-channel polynomial for the saturation at which that channel hits zero.
struct MaxSaturationFit {
    k: [f64; 5],
    channel: usize,
}

const RED_FIT: MaxSaturationFit = MaxSaturationFit {
    k: [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
    channel: 0,
};

const GREEN_FIT: MaxSaturationFit = MaxSaturationFit {
    k: [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
    channel: 1,
};

const BLUE_FIT: MaxSaturationFit = MaxSaturationFit {
    k: [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
    channel: 2,
};

/// Derivative of the non-linear LMS' components with respect to chroma along
/// the hue direction.
#[inline]
fn lms_chroma_slope(a: f64, b: f64) -> DVec3 {
    LAB_TO_LMS * DVec3::new(0.0, a, b)
}

/// Largest saturation `S = C / L` of the hue `(a, b)` that stays inside sRGB.
///
/// Max saturation is reached when one of r, g or b goes below zero. A
/// polynomial picks the starting point for that channel, then one Halley step
/// refines it. The achromatic direction returns 0.
pub fn compute_max_saturation(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let fit = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        &RED_FIT
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        &GREEN_FIT
    } else {
        &BLUE_FIT
    };
    let k = &fit.k;
    let w = LMS_TO_LINEAR.row(fit.channel);

    let mut s = k[0] + k[1] * a + k[2] * b + k[3] * a * a + k[4] * a * b;

    let k_lms = lms_chroma_slope(a, b);

    let lms_ = DVec3::ONE + k_lms * s;
    let lms = lms_.map(|v| v * v * v);
    let lms_ds = DVec3::new(
        3.0 * k_lms.x * lms_.x * lms_.x,
        3.0 * k_lms.y * lms_.y * lms_.y,
        3.0 * k_lms.z * lms_.z * lms_.z,
    );
    let lms_ds2 = DVec3::new(
        6.0 * k_lms.x * k_lms.x * lms_.x,
        6.0 * k_lms.y * k_lms.y * lms_.y,
        6.0 * k_lms.z * k_lms.z * lms_.z,
    );

    let f = w.dot(lms);
    let f1 = w.dot(lms_ds);
    let f2 = w.dot(lms_ds2);

    s -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    s
}

/// Finds the cusp of the hue `(a_, b_)`.
///
/// The color at maximum saturation and L = 1 is scaled down until its
/// largest linear channel is exactly 1.
pub fn find_cusp(a_: f64, b_: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a_, b_);

    let rgb_at_max = oklab_to_linear_srgb_unclamped(Lab::new(1.0, s_cusp * a_, s_cusp * b_));
    let l_cusp = (1.0 / rgb_at_max.max_element()).cbrt();
    Cusp {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Intersects a line with the sRGB gamut boundary.
///
/// The line runs from `(L0, 0)` to `(L1, C1)` in the (L, C) plane of the hue
/// `(a_, b_)`:
///
/// ```text
/// L = L0 * (1 - t) + t * L1
/// C = t * C1
/// ```
///
/// Returns `t` at the boundary. When `cusp` is `None` it is computed from
/// the hue.
pub fn find_gamut_intersection(
    a_: f64,
    b_: f64,
    l1: f64,
    c1: f64,
    l0: f64,
    cusp: Option<Cusp>,
) -> f64 {
    let cusp = cusp.unwrap_or_else(|| find_cusp(a_, b_));

    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // Lower half: the edge is a straight line through black.
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // Upper half: intersect with the triangle first...
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    // ...then one Halley step per channel against the real boundary.
    let dl = l1 - l0;
    let dc = c1;

    let k_lms = lms_chroma_slope(a_, b_);
    let lms_dt = DVec3::splat(dl) + k_lms * dc;

    let l = l0 * (1.0 - t) + t * l1;
    let c = t * c1;

    let lms_ = DVec3::splat(l) + k_lms * c;
    let lms = lms_.map(|v| v * v * v);
    let ldt = DVec3::new(
        3.0 * lms_dt.x * lms_.x * lms_.x,
        3.0 * lms_dt.y * lms_.y * lms_.y,
        3.0 * lms_dt.z * lms_.z * lms_.z,
    );
    let ldt2 = DVec3::new(
        6.0 * lms_dt.x * lms_dt.x * lms_.x,
        6.0 * lms_dt.y * lms_dt.y * lms_.y,
        6.0 * lms_dt.z * lms_dt.z * lms_.z,
    );

    let correction = (0..3)
        .map(|channel| {
            let w = LMS_TO_LINEAR.row(channel);
            let f = w.dot(lms) - 1.0;
            let f1 = w.dot(ldt);
            let f2 = w.dot(ldt2);

            let u = f1 / (f1 * f1 - 0.5 * f * f2);
            if u >= 0.0 { -f * u } else { NO_INTERSECTION }
        })
        .fold(NO_INTERSECTION, f64::min);

    t += correction;
    t
}

/// Triangle slopes of the hue `(a_, b_)` from its cusp.
pub fn get_st_max(a_: f64, b_: f64, cusp: Option<Cusp>) -> St {
    cusp.unwrap_or_else(|| find_cusp(a_, b_)).to_st()
}

/// Smooth approximation of the cusp slopes.
///
/// Only used to shape the middle of the Okhsl saturation curve. It is not a
/// bound: near some hues `s_mid` exceeds `s_max`.
pub fn get_st_mid(a_: f64, b_: f64) -> St {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b_
                + a_ * (-2.19557347
                    + 1.75198401 * b_
                    + a_ * (-2.13704948 - 10.02301043 * b_
                        + a_ * (-4.24894561 + 5.38770819 * b_ + 4.69891013 * a_))));

    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b_
                + a_ * (0.40370612
                    + 0.90148123 * b_
                    + a_ * (-0.27087943
                        + 0.61223990 * b_
                        + a_ * (0.00299215 - 0.45399568 * b_ - 0.14661872 * a_))));

    St { s, t }
}

/// Reference chromas at lightness `l` for the hue `(a_, b_)`.
pub fn get_cs(l: f64, a_: f64, b_: f64) -> Cs {
    let cusp = find_cusp(a_, b_);

    let c_max = find_gamut_intersection(a_, b_, l, 1.0, l, Some(cusp));
    let st_max = cusp.to_st();

    // Compensates for the curved upper edge.
    let k = c_max / (l * st_max.s).min((1.0 - l) * st_max.t);

    let c_mid = {
        let st_mid = get_st_mid(a_, b_);

        // soft minimum of the two edges
        let c_a = l * st_mid.s;
        let c_b = (1.0 - l) * st_mid.t;
        0.9 * k * (1.0 / (1.0 / c_a.powi(4) + 1.0 / c_b.powi(4))).sqrt().sqrt()
    };

    let c_0 = {
        // Hue independent, roughly the average slopes.
        let c_a = l * 0.4;
        let c_b = (1.0 - l) * 0.8;
        (1.0 / (1.0 / (c_a * c_a) + 1.0 / (c_b * c_b))).sqrt()
    };

    Cs { c_0, c_mid, c_max }
}

/// Strategy for mapping an out-of-gamut color back into sRGB.
///
/// Every strategy moves the color along a line in the (L, C) plane of its
/// own hue toward a target lightness `L0` until it meets the boundary. They
/// differ in how `L0` is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GamutClip {
    /// Keep lightness when it is in [0, 1], only reduce chroma.
    #[default]
    PreserveChroma,
    /// Project toward L = 0.5.
    ProjectToMid,
    /// Project toward the cusp lightness of the hue.
    ProjectToCusp,
    /// Blend between preserving lightness and projecting to 0.5.
    AdaptiveMid {
        /// Larger values pull harder toward L = 0.5.
        alpha: f64,
    },
    /// Blend between preserving lightness and projecting to the cusp.
    AdaptiveCusp {
        /// Larger values pull harder toward the cusp lightness.
        alpha: f64,
    },
}

impl GamutClip {
    /// Clips linear sRGB with this strategy.
    pub fn apply(self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            Self::PreserveChroma => gamut_clip_preserve_chroma(rgb),
            Self::ProjectToMid => gamut_clip_project_to_0_5(rgb),
            Self::ProjectToCusp => gamut_clip_project_to_l_cusp(rgb),
            Self::AdaptiveMid { alpha } => gamut_clip_adaptive_l0_0_5(rgb, alpha),
            Self::AdaptiveCusp { alpha } => gamut_clip_adaptive_l0_l_cusp(rgb, alpha),
        }
    }
}

/// Whether linear sRGB lies inside the unit cube, up to rounding noise.
#[inline]
pub fn in_gamut(rgb: [f64; 3]) -> bool {
    rgb.iter().all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v))
}

/// Shared body of the clipping strategies.
///
/// `target` receives `(L, C, cusp)` and returns `L0`.
fn clip_toward<F>(rgb: [f64; 3], target: F) -> [f64; 3]
where
    F: FnOnce(f64, f64, Cusp) -> f64,
{
    if in_gamut(rgb) {
        return rgb.map(saturate);
    }

    let lab = linear_srgb_to_oklab(rgb);
    let c = lab.chroma();
    if c < CLIP_EPSILON {
        // gray: only lightness can be out of range
        return rgb.map(saturate);
    }
    let a_ = lab.a / c;
    let b_ = lab.b / c;

    let cusp = find_cusp(a_, b_);
    let l0 = target(lab.l, c, cusp);

    let t = find_gamut_intersection(a_, b_, lab.l, c, l0, Some(cusp));
    let l_clipped = l0 * (1.0 - t) + t * lab.l;
    let c_clipped = t * c;

    oklab_to_linear_srgb_unclamped(Lab::from_lc(l_clipped, c_clipped, a_, b_))
        .map(saturate)
        .to_array()
}

/// Reduces chroma at constant lightness; lightness outside [0, 1] is clamped.
pub fn gamut_clip_preserve_chroma(rgb: [f64; 3]) -> [f64; 3] {
    clip_toward(rgb, |l, _, _| saturate(l))
}

/// Projects toward L = 0.5.
pub fn gamut_clip_project_to_0_5(rgb: [f64; 3]) -> [f64; 3] {
    clip_toward(rgb, |_, _, _| 0.5)
}

/// Projects toward the cusp lightness of the color's hue.
pub fn gamut_clip_project_to_l_cusp(rgb: [f64; 3]) -> [f64; 3] {
    clip_toward(rgb, |_, _, cusp| cusp.l)
}

/// Adaptive projection around L = 0.5.
pub fn gamut_clip_adaptive_l0_0_5(rgb: [f64; 3], alpha: f64) -> [f64; 3] {
    clip_toward(rgb, |l, c, _| {
        let ld = l - 0.5;
        let e1 = 0.5 + ld.abs() + alpha * c;
        0.5 * (1.0 + sign(ld) * (e1 - (e1 * e1 - 2.0 * ld.abs()).sqrt()))
    })
}

/// Adaptive projection around the cusp lightness.
pub fn gamut_clip_adaptive_l0_l_cusp(rgb: [f64; 3], alpha: f64) -> [f64; 3] {
    clip_toward(rgb, |l, c, cusp| {
        let ld = l - cusp.l;
        let k = 2.0 * if ld > 0.0 { 1.0 - cusp.l } else { cusp.l };

        let e1 = 0.5 * k + ld.abs() + alpha * c / k;
        cusp.l + 0.5 * (sign(ld) * (e1 - (e1 * e1 - 2.0 * k * ld.abs()).sqrt()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::{hue_to_direction, oklab_to_linear_srgb};
    use approx::assert_abs_diff_eq;

    fn direction_of(rgb: [f64; 3]) -> (Lab, f64, f64) {
        let lab = linear_srgb_to_oklab(rgb);
        let (_, a_, b_) = lab.hue_direction();
        (lab, a_, b_)
    }

    #[test]
    fn test_max_saturation_achromatic() {
        assert_eq!(compute_max_saturation(0.0, 0.0), 0.0);
        let cusp = find_cusp(0.0, 0.0);
        assert_eq!(cusp.c, 0.0);
        let st = get_st_max(0.0, 0.0, None);
        assert_eq!(st.t, 0.0);
        assert!(st.s.is_finite());
    }

    #[test]
    fn test_cusp_of_primaries() {
        // A primary sits exactly on the cusp of its own hue.
        for rgb in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
            let (lab, a_, b_) = direction_of(rgb);
            let cusp = find_cusp(a_, b_);
            assert_abs_diff_eq!(cusp.l, lab.l, epsilon = 1e-3);
            assert_abs_diff_eq!(cusp.c, lab.chroma(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_cusp_touches_boundary() {
        for i in 0..72 {
            let (a_, b_) = hue_to_direction(i as f64 / 72.0);
            let cusp = find_cusp(a_, b_);
            let rgb = oklab_to_linear_srgb_unclamped(Lab::from_lc(cusp.l, cusp.c, a_, b_));
            assert_abs_diff_eq!(rgb.max_element(), 1.0, epsilon = 1e-9);
            assert!(rgb.min_element().abs() < 0.05, "hue {i}: {rgb:?}");
        }
    }

    #[test]
    fn test_intersection_at_cusp_lightness() {
        let (a_, b_) = hue_to_direction(0.3);
        let cusp = find_cusp(a_, b_);
        let t = find_gamut_intersection(a_, b_, cusp.l, 1.0, cusp.l, Some(cusp));
        assert_abs_diff_eq!(t, cusp.c, epsilon = 1e-12);
        // same answer when the cusp is computed internally
        let t2 = find_gamut_intersection(a_, b_, cusp.l, 1.0, cusp.l, None);
        assert_abs_diff_eq!(t, t2, epsilon = 1e-15);
    }

    #[test]
    fn test_intersection_lower_half_is_exact() {
        let (_, a_, b_) = direction_of([1.0, 0.0, 0.0]);
        let c_max = find_gamut_intersection(a_, b_, 0.3, 1.0, 0.3, None);
        let rgb = oklab_to_linear_srgb_unclamped(Lab::from_lc(0.3, c_max, a_, b_));
        assert_abs_diff_eq!(rgb.min_element(), 0.0, epsilon = 1e-3);
        assert!(rgb.max_element() < 1.0);
    }

    #[test]
    fn test_intersection_upper_half() {
        let (_, a_, b_) = direction_of([1.0, 0.0, 0.0]);
        let c_max = find_gamut_intersection(a_, b_, 0.9, 1.0, 0.9, None);
        let rgb = oklab_to_linear_srgb_unclamped(Lab::from_lc(0.9, c_max, a_, b_));
        assert_abs_diff_eq!(rgb.max_element(), 1.0, epsilon = 5e-3);
    }

    #[test]
    fn test_st_mid_is_positive() {
        for i in 0..360 {
            let (a_, b_) = hue_to_direction(i as f64 / 360.0);
            let mid = get_st_mid(a_, b_);
            assert!(mid.s.is_finite() && mid.s > 0.0, "hue {i}: {mid:?}");
            assert!(mid.t.is_finite() && mid.t > 0.0, "hue {i}: {mid:?}");
        }
    }

    #[test]
    fn test_cs_ordering() {
        for i in 0..12 {
            let (a_, b_) = hue_to_direction(i as f64 / 12.0);
            for l in [0.2, 0.5, 0.8] {
                let cs = get_cs(l, a_, b_);
                assert!(cs.c_0 > 0.0 && cs.c_mid > 0.0);
                assert!(cs.c_mid < cs.c_max);
            }
        }
    }

    #[test]
    fn test_clip_in_gamut_unchanged() {
        let rgb = [0.2, 0.4, 0.6];
        for clip in [
            GamutClip::PreserveChroma,
            GamutClip::ProjectToMid,
            GamutClip::ProjectToCusp,
            GamutClip::AdaptiveMid { alpha: DEFAULT_CLIP_ALPHA },
            GamutClip::AdaptiveCusp { alpha: DEFAULT_CLIP_ALPHA },
        ] {
            assert_eq!(clip.apply(rgb), rgb);
        }
    }

    #[test]
    fn test_clip_rounding_overshoot_is_saturated() {
        let rgb = [1.0 + 3e-8, 0.5, -2e-8];
        assert!(in_gamut(rgb));
        for clip in [
            GamutClip::PreserveChroma,
            GamutClip::ProjectToMid,
            GamutClip::ProjectToCusp,
            GamutClip::AdaptiveMid { alpha: DEFAULT_CLIP_ALPHA },
            GamutClip::AdaptiveCusp { alpha: DEFAULT_CLIP_ALPHA },
        ] {
            assert_eq!(clip.apply(rgb), [1.0, 0.5, 0.0], "{clip:?}");
        }
        assert!(!in_gamut([1.0 + 1e-4, 0.5, 0.5]));
    }

    #[test]
    fn test_clip_out_of_gamut() {
        let out = oklab_to_linear_srgb_unclamped(Lab::new(0.6, 0.3, 0.1)).to_array();
        assert!(!in_gamut(out));
        for clip in [
            GamutClip::PreserveChroma,
            GamutClip::ProjectToMid,
            GamutClip::ProjectToCusp,
            GamutClip::AdaptiveMid { alpha: DEFAULT_CLIP_ALPHA },
            GamutClip::AdaptiveCusp { alpha: DEFAULT_CLIP_ALPHA },
        ] {
            let clipped = clip.apply(out);
            assert!(in_gamut(clipped), "{clip:?}: {clipped:?}");
        }

        // preserve chroma keeps the lightness
        let clipped = gamut_clip_preserve_chroma(out);
        assert_abs_diff_eq!(linear_srgb_to_oklab(clipped).l, 0.6, epsilon = 1e-2);
    }

    #[test]
    fn test_clip_gray() {
        let clipped = gamut_clip_preserve_chroma([1.5, 1.5, 1.5]);
        assert_eq!(clipped, [1.0, 1.0, 1.0]);
        let floored = oklab_to_linear_srgb(Lab::new(-0.1, 0.0, 0.0));
        assert!(in_gamut(floored));
    }
}

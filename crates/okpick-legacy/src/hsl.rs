//! Bi-hexcone HSL.

use okpick_core::Color;

use crate::hexcone_hue;

/// Converts RGB (0..255) to HSL (0..1).
pub fn rgb_to_hsl(rgb: Color) -> Color {
    let [r, g, b] = rgb.map(|v| v / 255.0).to_array();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    Color::new(hexcone_hue(r, g, b, max, delta), s, l)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t - t.floor();
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL (0..1) to RGB (0..255).
pub fn hsl_to_rgb(hsl: Color) -> Color {
    let [h, s, l] = hsl.to_array();
    if s == 0.0 {
        return Color::splat(l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

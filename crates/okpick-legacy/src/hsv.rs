//! Hexcone HSV.

use okpick_core::Color;

use crate::hexcone_hue;

/// Converts RGB (0..255) to HSV (0..1).
///
/// Grays get hue 0 and saturation 0; black also gets value 0.
pub fn rgb_to_hsv(rgb: Color) -> Color {
    let [r, g, b] = rgb.map(|v| v / 255.0).to_array();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Color::new(hexcone_hue(r, g, b, max, delta), s, max)
}

/// Converts HSV (0..1) to RGB (0..255).
///
/// Hue wraps, so `h = 1.0` is the same red as `h = 0.0`.
pub fn hsv_to_rgb(hsv: Color) -> Color {
    let [h, s, v] = hsv.to_array();
    let h6 = (h - h.floor()) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // A hue just below zero wraps to exactly 1.0, which lands on sector 6.
    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::new(r * 255.0, g * 255.0, b * 255.0)
}

//! Color space registry.
//!
//! Each [`ColorSpaceId`] resolves to one static [`ColorSpace`]: a table of
//! plain function pointers plus the axis metadata from `okpick-core`. The
//! registry is immutable; callers keep the active space themselves and pass
//! it where it is needed.
//!
//! # Example
//!
//! ```rust
//! use okpick_color::space::ColorSpace;
//! use okpick_core::{Color, ColorSpaceId};
//!
//! let okhsl = ColorSpace::get(ColorSpaceId::Okhsl);
//! let red = Color::new(255.0, 0.0, 0.0);
//! let hsl = (okhsl.from_srgb)(red);
//! let shown = (okhsl.to_display_units)(hsl);
//! assert!(shown[0] > 29.0 && shown[0] < 30.0); // degrees
//! ```

use std::fmt::Write as _;

use okpick_core::{Axis, Color, ColorSpaceId, Error, Result};
use okpick_legacy::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
use okpick_oklab::{
    okhsl_to_srgb, okhsv_to_srgb, oklch_to_srgb, srgb_to_okhsl, srgb_to_okhsv, srgb_to_oklch,
};

/// A pure color conversion.
pub type ConvertFn = fn(Color) -> Color;

/// Conversion table and metadata of one picker color space.
#[derive(Debug)]
pub struct ColorSpace {
    /// Identifier.
    pub id: ColorSpaceId,
    /// sRGB (0..255) to this space.
    pub from_srgb: ConvertFn,
    /// This space to sRGB (0..255).
    pub to_srgb: ConvertFn,
    /// Internal [0, 1] components to display units (degrees, percent).
    pub to_display_units: ConvertFn,
    /// Display units back to internal components.
    pub from_display_units: ConvertFn,
}

fn scale_axes(c: Color, axes: &[Axis; 3], forward: bool) -> Color {
    let mut out = c.to_array();
    for (v, axis) in out.iter_mut().zip(axes) {
        *v = if forward { axis.to_display(*v) } else { axis.from_display(*v) };
    }
    Color(out)
}

fn hsx_to_display(c: Color) -> Color {
    scale_axes(c, ColorSpaceId::Okhsv.axes(), true)
}

fn hsx_from_display(c: Color) -> Color {
    scale_axes(c, ColorSpaceId::Okhsv.axes(), false)
}

fn lch_to_display(c: Color) -> Color {
    scale_axes(c, ColorSpaceId::Oklch.axes(), true)
}

fn lch_from_display(c: Color) -> Color {
    scale_axes(c, ColorSpaceId::Oklch.axes(), false)
}

static OKHSV: ColorSpace = ColorSpace {
    id: ColorSpaceId::Okhsv,
    from_srgb: srgb_to_okhsv,
    to_srgb: okhsv_to_srgb,
    to_display_units: hsx_to_display,
    from_display_units: hsx_from_display,
};

static OKHSL: ColorSpace = ColorSpace {
    id: ColorSpaceId::Okhsl,
    from_srgb: srgb_to_okhsl,
    to_srgb: okhsl_to_srgb,
    to_display_units: hsx_to_display,
    from_display_units: hsx_from_display,
};

static OKLCH: ColorSpace = ColorSpace {
    id: ColorSpaceId::Oklch,
    from_srgb: srgb_to_oklch,
    to_srgb: oklch_to_srgb,
    to_display_units: lch_to_display,
    from_display_units: lch_from_display,
};

static HSV: ColorSpace = ColorSpace {
    id: ColorSpaceId::Hsv,
    from_srgb: rgb_to_hsv,
    to_srgb: hsv_to_rgb,
    to_display_units: hsx_to_display,
    from_display_units: hsx_from_display,
};

static HSL: ColorSpace = ColorSpace {
    id: ColorSpaceId::Hsl,
    from_srgb: rgb_to_hsl,
    to_srgb: hsl_to_rgb,
    to_display_units: hsx_to_display,
    from_display_units: hsx_from_display,
};

impl ColorSpace {
    /// Looks up the conversion table of `id`.
    pub fn get(id: ColorSpaceId) -> &'static ColorSpace {
        match id {
            ColorSpaceId::Okhsv => &OKHSV,
            ColorSpaceId::Okhsl => &OKHSL,
            ColorSpaceId::Oklch => &OKLCH,
            ColorSpaceId::Hsv => &HSV,
            ColorSpaceId::Hsl => &HSL,
        }
    }

    /// Every registered space, in menu order.
    pub fn all() -> impl Iterator<Item = &'static ColorSpace> {
        ColorSpaceId::ALL.into_iter().map(Self::get)
    }

    /// Axis descriptors in component order.
    #[inline]
    pub fn axes(&self) -> &'static [Axis; 3] {
        self.id.axes()
    }

    /// Lowercase name, e.g. `"okhsv"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Converts a color of this space into `target`.
    pub fn convert_to(&self, target: &ColorSpace, color: Color) -> Color {
        if self.id == target.id {
            return color;
        }
        (target.from_srgb)((self.to_srgb)(color))
    }

    /// Parses `"a,b,c"` in display units into internal components.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when there are not exactly three numbers.
    pub fn parse_display(&self, text: &str) -> Result<Color> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::invalid_argument(format!(
                "expected 3 comma-separated {} components, got {:?}",
                self.id.label(),
                text
            )));
        }
        let mut out = [0.0; 3];
        for (slot, part) in out.iter_mut().zip(&parts) {
            let v: f64 = part.parse().map_err(|_| {
                Error::invalid_argument(format!("invalid number {part:?} in {text:?}"))
            })?;
            if !v.is_finite() {
                return Err(Error::invalid_argument(format!("non-finite number in {text:?}")));
            }
            *slot = v;
        }
        Ok((self.from_display_units)(Color(out)))
    }

    /// Formats internal components in display units, e.g. `"H 29.2 S 100.0 L 56.8"`.
    pub fn format_display(&self, color: Color) -> String {
        let shown = (self.to_display_units)(color);
        let mut out = String::new();
        for (i, axis) in self.axes().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{} {:.1}", axis.label, shown[i]);
        }
        out
    }
}

/// Converts `color` between two spaces through sRGB.
#[inline]
pub fn convert(color: Color, from: ColorSpaceId, to: ColorSpaceId) -> Color {
    ColorSpace::get(from).convert_to(ColorSpace::get(to), color)
}

//! Color space identifiers and per-space metadata.
//!
//! A picker works in exactly one color space at a time. [`ColorSpaceId`] is the
//! tag for that space; it is passed explicitly wherever the active space
//! matters and is small enough to travel inside worker messages.
//!
//! The conversion functions themselves live in `okpick-oklab` and
//! `okpick-legacy`; `okpick-color` maps each id to its function table. This
//! module only knows the static facts about each space: component order,
//! display ranges, slider steps, and when a component stops carrying meaning.
//!
//! # Supported Color Spaces
//!
//! | Id | Components | Hue axis | Notes |
//! |----|------------|----------|-------|
//! | [`Okhsv`](ColorSpaceId::Okhsv) | h, s, v | 0 | perceptual HSV on Oklab |
//! | [`Okhsl`](ColorSpaceId::Okhsl) | h, s, l | 0 | perceptual HSL on Oklab |
//! | [`Oklch`](ColorSpaceId::Oklch) | l, c, h | 2 | polar Oklab |
//! | [`Hsv`](ColorSpaceId::Hsv) | h, s, v | 0 | classic HSV |
//! | [`Hsl`](ColorSpaceId::Hsl) | h, s, l | 0 | classic HSL |
//!
//! # Usage
//!
//! ```
//! use okpick_core::{Color, ColorSpaceId};
//!
//! let space: ColorSpaceId = "okhsl".parse().unwrap();
//! assert_eq!(space, ColorSpaceId::Okhsl);
//!
//! // Lightness 1 is white whatever the hue and saturation are.
//! assert!(space.hue_is_free(Color::new(0.3, 0.8, 1.0)));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

/// Static description of one component axis of a color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// Short label shown next to the slider ("H", "S", ...).
    pub label: &'static str,
    /// Multiplier from the internal value to display units (degrees, percent).
    pub display_scale: f64,
    /// Largest internal value the slider reaches.
    pub slider_max: f64,
    /// Slider step in display units.
    pub step: f64,
    /// Whether the axis is periodic (hue).
    pub wraps: bool,
}

impl Axis {
    const fn hue() -> Self {
        Self {
            label: "H",
            display_scale: 360.0,
            slider_max: 1.0,
            step: 1.0,
            wraps: true,
        }
    }

    const fn percent(label: &'static str) -> Self {
        Self {
            label,
            display_scale: 100.0,
            slider_max: 1.0,
            step: 0.1,
            wraps: false,
        }
    }

    /// Converts an internal value to display units.
    #[inline]
    pub fn to_display(&self, v: f64) -> f64 {
        v * self.display_scale
    }

    /// Converts a display-unit value back to the internal range.
    #[inline]
    pub fn from_display(&self, v: f64) -> f64 {
        v / self.display_scale
    }
}

const HSV_AXES: [Axis; 3] = [Axis::hue(), Axis::percent("S"), Axis::percent("V")];
const HSL_AXES: [Axis; 3] = [Axis::hue(), Axis::percent("S"), Axis::percent("L")];
const LCH_AXES: [Axis; 3] = [
    Axis::percent("L"),
    Axis {
        label: "C",
        display_scale: 100.0,
        slider_max: 0.37,
        step: 0.1,
        wraps: false,
    },
    Axis::hue(),
];

/// Identifier of a picker color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpaceId {
    /// Okhsv: hue, saturation, value on top of Oklab.
    #[default]
    Okhsv,
    /// Okhsl: hue, saturation, lightness on top of Oklab.
    Okhsl,
    /// Oklch: lightness, chroma, hue (polar Oklab).
    Oklch,
    /// Classic hexcone HSV.
    Hsv,
    /// Classic bi-hexcone HSL.
    Hsl,
}

impl ColorSpaceId {
    /// All known spaces, in menu order.
    pub const ALL: [Self; 5] = [Self::Okhsv, Self::Okhsl, Self::Oklch, Self::Hsv, Self::Hsl];

    /// Lowercase identifier used in files, messages and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Okhsv => "okhsv",
            Self::Okhsl => "okhsl",
            Self::Oklch => "oklch",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
        }
    }

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Okhsv => "OkHSV",
            Self::Okhsl => "OkHSL",
            Self::Oklch => "OkLCH",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
        }
    }

    /// Whether the space is built on Oklab.
    pub const fn is_perceptual(self) -> bool {
        matches!(self, Self::Okhsv | Self::Okhsl | Self::Oklch)
    }

    /// Axis descriptors in component order.
    pub const fn axes(self) -> &'static [Axis; 3] {
        match self {
            Self::Okhsv | Self::Hsv => &HSV_AXES,
            Self::Okhsl | Self::Hsl => &HSL_AXES,
            Self::Oklch => &LCH_AXES,
        }
    }

    /// Index of the hue component.
    pub const fn hue_axis(self) -> usize {
        match self {
            Self::Oklch => 2,
            _ => 0,
        }
    }

    /// Index of the saturation (or chroma) component.
    pub const fn saturation_axis(self) -> usize {
        1
    }

    /// Index of the value / lightness component.
    pub const fn lightness_axis(self) -> usize {
        match self {
            Self::Oklch => 0,
            _ => 2,
        }
    }

    /// Returns `true` when changing the hue of `color` does not change the sRGB result.
    ///
    /// That is the case for achromatic colors and for the black/white endpoints.
    pub fn hue_is_free(self, color: Color) -> bool {
        color[self.saturation_axis()] <= 0.0 || self.saturation_is_free(color)
    }

    /// Returns `true` when changing the saturation (chroma) of `color` does not
    /// change the sRGB result.
    pub fn saturation_is_free(self, color: Color) -> bool {
        let l = color[self.lightness_axis()];
        match self {
            Self::Okhsv | Self::Hsv => l <= 0.0,
            Self::Okhsl | Self::Hsl | Self::Oklch => l <= 0.0 || l >= 1.0,
        }
    }

    /// Wraps the hue component into [0, 1).
    pub fn normalize_hue(self, color: Color) -> Color {
        let mut c = color.to_array();
        let h = self.hue_axis();
        c[h] = c[h] - c[h].floor();
        Color(c)
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == lower)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "unknown color space {s:?} (expected one of: okhsv, okhsl, oklch, hsv, hsl)"
                ))
            })
    }
}

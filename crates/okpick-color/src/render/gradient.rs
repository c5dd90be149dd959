//! Gradient bitmaps for picker sliders and areas.
//!
//! A gradient sweeps one or two axes of a color space across the bitmap and
//! converts every pixel to sRGB through the registry. Rows are rendered in
//! parallel with rayon.

use okpick_core::{Color, ColorSpaceId, Error, Result};
use okpick_math::sample_position;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::space::ColorSpace;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 16384;

/// Which axes a gradient sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GradientKind {
    /// x sweeps saturation (chroma), y sweeps value/lightness from top (max)
    /// to bottom (0). Hue is fixed.
    #[default]
    SaturationValue,
    /// x sweeps hue over a full turn.
    Hue,
    /// x sweeps value/lightness from 0 to max.
    Lightness,
    /// x sweeps saturation (chroma) from 0 to max.
    Saturation,
}

impl GradientKind {
    /// All kinds.
    pub const ALL: [Self; 4] = [
        Self::SaturationValue,
        Self::Hue,
        Self::Lightness,
        Self::Saturation,
    ];

    /// Short name used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SaturationValue => "sv",
            Self::Hue => "hue",
            Self::Lightness => "lightness",
            Self::Saturation => "saturation",
        }
    }

    /// Whether every row of the bitmap is the same.
    pub const fn is_one_dimensional(self) -> bool {
        !matches!(self, Self::SaturationValue)
    }

    /// Parses a CLI name.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "unknown gradient kind {name:?} \
                     (expected one of: sv, hue, lightness, saturation)"
                ))
            })
    }
}

/// One gradient to render.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientRequest {
    /// Space whose axes are swept.
    pub space: ColorSpaceId,
    /// Axes to sweep.
    pub kind: GradientKind,
    /// Base color in `space`; supplies the components that stay fixed.
    pub base: Color,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GradientRequest {
    /// Creates a request.
    pub fn new(
        space: ColorSpaceId,
        kind: GradientKind,
        base: Color,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            space,
            kind,
            base,
            width,
            height,
        }
    }

    /// Checks the dimensions and returns the RGBA8 byte count.
    pub fn byte_len(&self) -> Result<usize> {
        let (w, h) = (self.width, self.height);
        if w == 0 || h == 0 {
            return Err(Error::invalid_dimensions(w, h, "width and height must be > 0"));
        }
        if w > MAX_DIMENSION || h > MAX_DIMENSION {
            return Err(Error::invalid_dimensions(
                w,
                h,
                format!("dimensions are limited to {MAX_DIMENSION}"),
            ));
        }
        (w as usize)
            .checked_mul(h as usize)
            .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| Error::invalid_dimensions(w, h, "bitmap size overflows"))
    }

    /// Color (in `space`) at normalized position `(u, v)`, both in [0, 1].
    ///
    /// `v = 0` is the top row.
    pub fn color_at(&self, u: f64, v: f64) -> Color {
        let id = self.space;
        let axes = id.axes();
        let hue = id.hue_axis();
        let sat = id.saturation_axis();
        let light = id.lightness_axis();

        let mut c = self.base.to_array();
        match self.kind {
            GradientKind::SaturationValue => {
                c[sat] = u * axes[sat].slider_max;
                c[light] = (1.0 - v) * axes[light].slider_max;
            }
            GradientKind::Hue => c[hue] = u * axes[hue].slider_max,
            GradientKind::Lightness => c[light] = u * axes[light].slider_max,
            GradientKind::Saturation => c[sat] = u * axes[sat].slider_max,
        }
        Color(c)
    }
}

/// An RGBA8 bitmap, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// RGBA of pixel `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = self.pixels.get(i..i + BYTES_PER_PIXEL)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

fn fill_row(request: &GradientRequest, space: &ColorSpace, y: u32, row: &mut [u8]) {
    let v = sample_position(y, request.height);
    for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let u = sample_position(x as u32, request.width);
        let rgb = (space.to_srgb)(request.color_at(u, v)).to_rgb8();
        px[..3].copy_from_slice(&rgb);
        px[3] = 255;
    }
}

/// Renders a gradient to an RGBA8 bitmap.
///
/// Colors outside sRGB are clamped per channel.
///
/// # Errors
///
/// [`Error::InvalidDimensions`] for empty or oversized bitmaps.
///
/// # Example
///
/// ```rust
/// use okpick_color::render::{GradientKind, GradientRequest, render_gradient};
/// use okpick_core::{Color, ColorSpaceId};
///
/// let req = GradientRequest::new(
///     ColorSpaceId::Okhsv,
///     GradientKind::Hue,
///     Color::new(0.0, 1.0, 1.0),
///     64,
///     4,
/// );
/// let bmp = render_gradient(&req).unwrap();
/// assert_eq!(bmp.pixels.len(), 64 * 4 * 4);
/// ```
pub fn render_gradient(request: &GradientRequest) -> Result<Bitmap> {
    let len = request.byte_len()?;
    let space = ColorSpace::get(request.space);
    let stride = request.width as usize * BYTES_PER_PIXEL;
    let mut pixels = vec![0u8; len];

    if request.kind.is_one_dimensional() {
        let mut first = vec![0u8; stride];
        fill_row(request, space, 0, &mut first);
        pixels
            .par_chunks_mut(stride)
            .for_each(|row| row.copy_from_slice(&first));
    } else {
        pixels
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill_row(request, space, y as u32, row));
    }

    Ok(Bitmap {
        width: request.width,
        height: request.height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(space: ColorSpaceId, kind: GradientKind, base: Color) -> GradientRequest {
        GradientRequest::new(space, kind, base, 16, 8)
    }

    #[test]
    fn test_dimensions_rejected() {
        let mut req = request(ColorSpaceId::Okhsv, GradientKind::Hue, Color::new(0.0, 1.0, 1.0));
        req.width = 0;
        assert!(matches!(render_gradient(&req), Err(Error::InvalidDimensions { .. })));
        req.width = MAX_DIMENSION + 1;
        assert!(matches!(render_gradient(&req), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_sv_corners() {
        let base = Color::new(0.0, 0.5, 0.5);
        let req = request(ColorSpaceId::Hsv, GradientKind::SaturationValue, base);
        let bmp = render_gradient(&req).unwrap();
        // top left: s = 0, v = 1 -> white
        assert_eq!(bmp.pixel(0, 0), Some([255, 255, 255, 255]));
        // top right: s = 1, v = 1 -> pure red
        assert_eq!(bmp.pixel(15, 0), Some([255, 0, 0, 255]));
        // bottom row is black
        assert_eq!(bmp.pixel(7, 7), Some([0, 0, 0, 255]));
        assert_eq!(bmp.pixel(16, 0), None);
    }

    #[test]
    fn test_one_dimensional_rows_match() {
        let req = request(ColorSpaceId::Okhsl, GradientKind::Hue, Color::new(0.0, 0.8, 0.6));
        let bmp = render_gradient(&req).unwrap();
        let stride = bmp.stride();
        let first = &bmp.pixels[..stride];
        for row in bmp.pixels.chunks(stride) {
            assert_eq!(row, first);
        }
        // hue sweep wraps: both ends are the same color
        assert_eq!(bmp.pixel(0, 0), bmp.pixel(15, 0));
    }

    #[test]
    fn test_lightness_sweep_is_monotonic() {
        let req = request(ColorSpaceId::Okhsl, GradientKind::Lightness, Color::new(0.3, 0.5, 0.5));
        let bmp = render_gradient(&req).unwrap();
        assert_eq!(bmp.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(bmp.pixel(15, 0), Some([255, 255, 255, 255]));
        let mut prev = 0u32;
        for x in 0..16 {
            let p = bmp.pixel(x, 3).unwrap();
            let sum = p[0] as u32 + p[1] as u32 + p[2] as u32;
            assert!(sum >= prev);
            prev = sum;
        }
    }

    #[test]
    fn test_oklch_chroma_axis() {
        let req = request(ColorSpaceId::Oklch, GradientKind::Saturation, Color::new(0.7, 0.0, 0.1));
        let c = req.color_at(1.0, 0.0);
        assert_eq!(c[1], 0.37);
        assert_eq!(c[0], 0.7);
        assert!(render_gradient(&req).is_ok());
    }

    #[test]
    fn test_kind_names() {
        for kind in GradientKind::ALL {
            assert_eq!(GradientKind::from_name(kind.name()).unwrap(), kind);
        }
        assert!(GradientKind::from_name("diagonal").unwrap_err().is_invalid_argument());
    }
}

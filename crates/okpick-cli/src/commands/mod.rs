//! CLI command implementations

pub mod contrast;
pub mod convert;
pub mod gradient;
pub mod spaces;

use anyhow::{Context, Result};
use okpick_color::legacy::hex_to_rgb;
use okpick_color::render::Bitmap;
use okpick_color::space::ColorSpace;
use okpick_core::{Color, ColorSpaceId};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Parses a color space name.
pub fn parse_space(name: &str) -> Result<ColorSpaceId> {
    name.parse::<ColorSpaceId>()
        .with_context(|| format!("Invalid color space: {name}"))
}

/// Parses user input into sRGB (0..255).
///
/// `from` is either `hex` or a space name; for a space, `text` holds its
/// components in display units.
pub fn parse_color(text: &str, from: &str) -> Result<Color> {
    if from.eq_ignore_ascii_case("hex") {
        return hex_to_rgb(text).with_context(|| format!("Invalid hex color: {text}"));
    }
    let space = ColorSpace::get(parse_space(from)?);
    let color = space
        .parse_display(text)
        .with_context(|| format!("Invalid {} color: {text}", space.id.label()))?;
    Ok((space.to_srgb)(color))
}

/// Writes an RGBA8 bitmap as PNG.
pub fn write_png(path: &Path, bitmap: &Bitmap) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), bitmap.width, bitmap.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to write PNG header: {}", path.display()))?;
    writer
        .write_image_data(&bitmap.pixels)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to finish: {}", path.display()))
}

//! Color conversion command.
//!
//! Parses a hex string or a component triple and prints the color in the
//! requested spaces, in display units.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use okpick_color::legacy::rgb_to_hex;
use okpick_color::space::ColorSpace;
use okpick_core::{Color, ColorSpaceId};
use serde::Serialize;
use tracing::{debug, trace};

#[derive(Serialize)]
struct Report {
    input: String,
    hex: String,
    srgb: [u8; 3],
    spaces: Vec<SpaceReport>,
}

#[derive(Serialize)]
struct SpaceReport {
    space: ColorSpaceId,
    components: Color,
    display: Color,
}

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, from = %args.from, "convert::run");

    let srgb = super::parse_color(&args.color, &args.from)?;
    let targets: Vec<ColorSpaceId> = if args.to.is_empty() {
        ColorSpaceId::ALL.to_vec()
    } else {
        args.to
            .iter()
            .map(|name| super::parse_space(name))
            .collect::<Result<_>>()?
    };
    debug!(?srgb, targets = targets.len(), "parsed input");

    let spaces: Vec<SpaceReport> = targets
        .into_iter()
        .map(|id| {
            let space = ColorSpace::get(id);
            let components = id.normalize_hue((space.from_srgb)(srgb));
            SpaceReport {
                space: id,
                components,
                display: (space.to_display_units)(components),
            }
        })
        .collect();

    let report = Report {
        input: args.color,
        hex: rgb_to_hex(srgb),
        srgb: srgb.to_rgb8(),
        spaces,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    println!("{:<7}{}", "hex", report.hex);
    if verbose > 0 {
        let [r, g, b] = report.srgb;
        println!("{:<7}{r} {g} {b}", "rgb");
    }
    for s in &report.spaces {
        let space = ColorSpace::get(s.space);
        println!("{:<7}{}", s.space.name(), space.format_display(s.components));
    }
    Ok(())
}

//! Lists the color space registry.

use crate::SpacesArgs;
use anyhow::{Context, Result};
use okpick_color::space::ColorSpace;
use serde::Serialize;

#[derive(Serialize)]
struct AxisInfo {
    label: &'static str,
    max: f64,
    step: f64,
    wraps: bool,
}

#[derive(Serialize)]
struct SpaceInfo {
    name: &'static str,
    label: &'static str,
    perceptual: bool,
    axes: Vec<AxisInfo>,
}

/// Runs the spaces command.
pub fn run(args: SpacesArgs) -> Result<()> {
    let infos: Vec<SpaceInfo> = ColorSpace::all()
        .map(|space| SpaceInfo {
            name: space.name(),
            label: space.id.label(),
            perceptual: space.id.is_perceptual(),
            axes: space
                .axes()
                .iter()
                .map(|a| AxisInfo {
                    label: a.label,
                    max: a.to_display(a.slider_max),
                    step: a.step,
                    wraps: a.wraps,
                })
                .collect(),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&infos).context("Failed to serialize spaces")?;
        println!("{json}");
        return Ok(());
    }

    for info in &infos {
        let axes: Vec<String> = info
            .axes
            .iter()
            .map(|a| {
                let wrap = if a.wraps { ", wraps" } else { "" };
                format!("{} 0..{} step {}{wrap}", a.label, a.max, a.step)
            })
            .collect();
        println!("{:<7}{:<7}{}", info.name, info.label, axes.join("  "));
    }
    Ok(())
}

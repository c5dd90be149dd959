//! Gradient rendering command.
//!
//! Renders through the background worker, the same path an interactive
//! picker uses, and writes the bitmap as PNG.

use crate::GradientArgs;
use anyhow::{Context, Result};
use okpick_color::render::{GradientKind, GradientRequest, RenderWorker};
use okpick_core::Color;
use tracing::{debug, info, trace};

/// Runs the gradient command.
pub fn run(args: GradientArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), "gradient::run");

    let space = super::parse_space(&args.space)?;
    let kind = GradientKind::from_name(&args.kind)
        .with_context(|| format!("Invalid gradient kind: {}", args.kind))?;

    let mut base = [0.0; 3];
    base[space.hue_axis()] = args.hue;
    base[space.saturation_axis()] = args.saturation;
    base[space.lightness_axis()] = args.lightness;

    let request = GradientRequest::new(space, kind, Color(base), args.width, args.height);
    info!(
        %space,
        kind = kind.name(),
        width = args.width,
        height = args.height,
        "Rendering gradient"
    );

    let mut worker = RenderWorker::spawn().context("Failed to start render worker")?;
    let out = worker.submit(request).and_then(|_| worker.wait());
    worker.shutdown();
    let out = out.context("Gradient rendering failed")?;
    debug!(generation = out.generation, bytes = out.bitmap.pixels.len(), "render finished");

    super::write_png(&args.output, &out.bitmap)?;

    if verbose > 0 {
        println!(
            "Wrote {}x{} {} gradient ({}) to {}",
            args.width,
            args.height,
            kind.name(),
            space,
            args.output.display()
        );
    }
    Ok(())
}

//! WCAG contrast command.

use crate::ContrastArgs;
use anyhow::Result;
use okpick_color::contrast::{ContrastLevel, contrast_ratio_srgb};
use tracing::{debug, trace};

/// Runs the contrast command.
pub fn run(args: ContrastArgs, verbose: u8) -> Result<()> {
    trace!(a = %args.a, b = %args.b, "contrast::run");

    let a = super::parse_color(&args.a, "hex")?;
    let b = super::parse_color(&args.b, "hex")?;
    let ratio = contrast_ratio_srgb(a, b);
    let level = ContrastLevel::from_ratio(ratio);
    debug!(ratio, %level, "contrast computed");

    println!("{ratio:.2}:1 ({level})");
    if verbose > 0 {
        println!(
            "  luminance: {:.4} / {:.4}",
            okpick_color::relative_luminance(a),
            okpick_color::relative_luminance(b)
        );
    }
    Ok(())
}

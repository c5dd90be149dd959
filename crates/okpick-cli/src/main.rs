//! okpick - perceptual color picker engine on the command line
//!
//! Converts colors between Okhsv, Okhsl, Oklch, HSV and HSL, checks WCAG
//! contrast and renders picker gradients to PNG.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "okpick")]
#[command(author, version, about = "Perceptual color picker engine")]
#[command(long_about = "
Converts colors between the Oklab based picker spaces (Okhsv, Okhsl, Oklch)
and classic HSV/HSL, checks WCAG contrast and renders picker gradients.

Examples:
  okpick convert '#ff8000'                      # Show a hex color in every space
  okpick convert '#ff8000' --to okhsl --json    # Machine-readable output
  okpick convert 30,100,60 --from okhsl         # Display units of the source space
  okpick contrast '#333' '#fafafa'              # WCAG contrast ratio
  okpick gradient --space okhsv --kind sv --hue 0.1 -W 256 -H 256 -o sv.png
  okpick spaces                                 # List spaces and their axes

Logging goes to stderr. RUST_LOG overrides the level chosen by -v.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color into one or more spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// WCAG contrast ratio of two hex colors
    Contrast(ContrastArgs),

    /// Render a picker gradient to PNG
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// List available color spaces
    Spaces(SpacesArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color: hex (#rgb, #rrggbb) or a comma-separated triple
    color: String,

    /// Space of the input: hex (default), okhsv, okhsl, oklch, hsv, hsl
    #[arg(short, long, default_value = "hex")]
    from: String,

    /// Target space(s); all spaces when omitted
    #[arg(short, long)]
    to: Vec<String>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ContrastArgs {
    /// First color (hex)
    a: String,

    /// Second color (hex)
    b: String,
}

#[derive(Args)]
struct GradientArgs {
    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Color space: okhsv, okhsl, oklch, hsv, hsl
    #[arg(short, long, default_value = "okhsv")]
    space: String,

    /// Gradient kind: sv, hue, lightness, saturation
    #[arg(short, long, default_value = "sv")]
    kind: String,

    /// Fixed hue in [0, 1)
    #[arg(long, default_value = "0.0")]
    hue: f64,

    /// Fixed saturation (chroma for oklch)
    #[arg(long, default_value = "1.0")]
    saturation: f64,

    /// Fixed value / lightness
    #[arg(long, alias = "value", default_value = "1.0")]
    lightness: f64,

    /// Width in pixels
    #[arg(short = 'W', long, default_value = "256")]
    width: u32,

    /// Height in pixels
    #[arg(short = 'H', long, default_value = "256")]
    height: u32,
}

#[derive(Args)]
struct SpacesArgs {
    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Contrast(args) => commands::contrast::run(args, cli.verbose),
        Commands::Gradient(args) => commands::gradient::run(args, cli.verbose),
        Commands::Spaces(args) => commands::spaces::run(args),
    }
}

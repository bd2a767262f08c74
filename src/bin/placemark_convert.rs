//! placemark-convert: Turn location JSON exports into KML placemarks
//!
//! The input format is chosen from the file name: `comic_route.json` is read
//! as a flat record array, `*.google` as a saved vendor response log. The
//! document is written next to the input with a `.kml` extension.
//!
//! Usage:
//!   # Convert the comic route export, writing comic_route.kml
//!   placemark-convert comic_route.json
//!
//!   # Convert saved places with a custom title and output path
//!   placemark-convert saved.google --title "Brussels" -o brussels.kml
//!
//!   # Read a renamed file by forcing its format
//!   placemark-convert --format comic-route murals.json

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use placemark::{convert_file, ConvertConfig, SourceKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "placemark-convert")]
#[command(about = "Convert location JSON exports into KML placemarks", long_about = None)]
struct Args {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (defaults to the input path with a .kml extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Input format, instead of guessing it from the file name
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Document title, instead of the one carried by the input
    #[arg(long)]
    title: Option<String>,

    /// Log decoding details
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Flat JSON array of records
    ComicRoute,
    /// Saved vendor responses, one per line
    Google,
}

impl From<Format> for SourceKind {
    fn from(format: Format) -> Self {
        match format {
            Format::ComicRoute => SourceKind::ComicRoute,
            Format::Google => SourceKind::TransportLog,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    // Build config
    let mut config = ConvertConfig::default();
    if let Some(title) = args.title {
        config.title_override = Some(title);
    }

    let conversion = convert_file(
        &args.input,
        args.output.as_deref(),
        args.format.map(SourceKind::from),
        &config,
    )
    .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    println!(
        "{} points written to {}",
        conversion.placemarks,
        conversion.output.display()
    );

    Ok(())
}

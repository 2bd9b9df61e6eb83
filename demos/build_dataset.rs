//! Build a rendering dataset from Munsell renotation data
//!
//! Reads the renotation table (`real.dat`) and writes a JSON dataset of
//! render-ready color records. By default only colors representable in
//! the sRGB gamut are kept and achromatic neutrals are appended.

use clap::{Parser, ValueEnum};
use munsell_solid_io::{json, renotation, DatasetBuilder, GamutKeep, JsonWriteOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Generate a rendering dataset from Munsell renotation data", long_about = None)]
struct Cli {
    /// Path to the renotation table
    #[arg(default_value = "real.dat")]
    input: PathBuf,

    /// Also include the original hue notation and xyY color data
    #[arg(short, long)]
    full: bool,

    /// Choose which colors to keep relative to the sRGB gamut
    #[arg(short = 'k', value_enum, default_value = "rgb")]
    keep: Keep,

    /// Output filename
    #[arg(short, long, default_value = "munsell_real.json")]
    output: PathBuf,

    /// Add indentation to make the resulting JSON human-readable
    #[arg(long)]
    indent: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Keep {
    /// Colors inside the sRGB gamut
    Rgb,
    /// Everything
    All,
    /// Colors outside the sRGB gamut
    Nonrgb,
}

impl From<Keep> for GamutKeep {
    fn from(keep: Keep) -> Self {
        match keep {
            Keep::Rgb => GamutKeep::InGamut,
            Keep::All => GamutKeep::All,
            Keep::Nonrgb => GamutKeep::OutOfGamut,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let entries = renotation::read_renotation(&cli.input)?;
    println!("Read {} renotation entries", entries.len());

    let records = DatasetBuilder::new()
        .keep(cli.keep.into())
        .full(cli.full)
        .build(&entries)?;

    json::write_samples(&records, &cli.output, &JsonWriteOptions { indent: cli.indent })?;

    println!("Processed {} colors", records.len());
    println!("Output: {}", cli.output.display());
    Ok(())
}

//! Offline baker for the GGX multiple-scattering energy tables.
//!
//! Run with: cargo run --release --bin bake_energy -- --format rust -o src/energy/data.rs

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use umbra_renderer::{BakeConfig, EnergyTables};

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum Format {
    /// Table data as JSON, loadable with `EnergyTables::from_json`
    #[default]
    Json,
    /// Rust source for the built-in table
    Rust,
}

#[derive(Parser, Debug)]
#[command(about = "Bake directional and average albedo tables for GGX")]
struct Args {
    #[arg(short, long)]
    /// Output file. Writes to stdout when omitted
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    #[arg(long, default_value_t = 32)]
    /// Roughness keys, at most 32
    roughness_steps: usize,

    #[arg(long, default_value_t = 32)]
    /// Cosine keys per roughness, at most 32
    cos_steps: usize,

    #[arg(long, default_value_t = 4096)]
    /// Monte Carlo samples per table entry
    samples: u32,

    #[arg(long, default_value_t)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = BakeConfig {
        roughness_steps: args.roughness_steps,
        cos_steps: args.cos_steps,
        samples: args.samples,
        seed: args.seed,
    };

    log::info!("Baking energy tables: {:?}", config);
    let tables = EnergyTables::bake(&config).context("baked tables failed validation")?;

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    match args.format {
        Format::Json => tables.to_json(&mut writer)?,
        Format::Rust => tables.to_rust(&mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        log::info!("Wrote {:?} tables to {}", args.format, path.display());
    }
    Ok(())
}

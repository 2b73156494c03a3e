//! Batch normalization of address files.
//!
//! Reads addresses as JSON lines or CSV, rewrites their administrative-area
//! fields to canonical display forms and writes them back in input order.

mod batch;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use regionnorm::config::Config;
use regionnorm::{AddressData, PreloadSupplier, RuleSupplier, Synonyms};

use crate::batch::{read_addresses, write_addresses, Format};

/// Inputs smaller than this get no progress bar
const PROGRESS_THRESHOLD: usize = 10_000;

#[derive(Parser, Debug)]
#[command(name = "normalize")]
#[command(about = "Normalize administrative-area fields of postal addresses")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Region data directory (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Region to load, repeatable (default: all regions in the data directory)
    #[arg(short, long = "region")]
    regions: Vec<String>,

    /// Input file, "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input and output format
    #[arg(long, value_enum, default_value = "jsonl")]
    format: Format,
}

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the addresses
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match (&args.config, &args.data_dir) {
        (Some(path), _) => Config::load_from_file(path)?,
        (None, Some(dir)) => Config::from_data_dir(dir.clone()),
        (None, None) => anyhow::bail!("Either --config or --data-dir is required"),
    };
    if let Some(dir) = &args.data_dir {
        config.global.data_dir = dir.clone();
    }
    if !args.regions.is_empty() {
        config.regions = args
            .regions
            .iter()
            .map(|code| regionnorm::config::RegionConfig { code: code.clone() })
            .collect();
    }

    let supplier = config.load_supplier()?;
    if supplier.loaded_regions().next().is_none() {
        anyhow::bail!(
            "No region data loaded from {}",
            config.global.data_dir.display()
        );
    }

    let addresses = if args.input == "-" {
        read_addresses(io::stdin().lock(), args.format)?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open input file {}", args.input))?;
        read_addresses(BufReader::new(file), args.format)?
    };
    info!("Read {} addresses", addresses.len());

    let (normalized, skipped) = normalize_all(&supplier, addresses);
    if skipped > 0 {
        warn!("{} addresses belong to regions without data and were left unchanged", skipped);
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_addresses(writer, args.format, normalized)?;

    info!("Done");
    Ok(())
}

/// Normalize every address whose region is loaded, in parallel.
///
/// Returns the addresses in input order and the number left unchanged.
fn normalize_all(
    supplier: &PreloadSupplier,
    addresses: Vec<AddressData>,
) -> (Vec<AddressData>, usize) {
    let pb = if addresses.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(addresses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let synonyms = Synonyms::new(supplier);
    let skipped = AtomicUsize::new(0);

    let normalized = addresses
        .into_par_iter()
        .map(|mut address| {
            if supplier.is_loaded(&address.region_code) {
                synonyms.normalize_for_display(&mut address);
            } else {
                skipped.fetch_add(1, Ordering::Relaxed);
            }
            pb.inc(1);
            address
        })
        .collect();

    pb.finish_and_clear();
    (normalized, skipped.into_inner())
}

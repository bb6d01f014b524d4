// Writes a random report file that `proccsv` can consume.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use proccsv::generator::{write_test_file, FileEncoding, GeneratorSettings};
use proccsv::SubdivisionTable;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate a synthetic ad report for proccsv.
#[derive(Parser, Debug)]
#[command(name = "testfilegen")]
#[command(version, about)]
struct Args {
    /// Number of lines to generate.
    #[arg(short, long, default_value_t = 10_000)]
    rows: usize,

    /// First possible date (YYYY-MM-DD).
    #[arg(long, default_value = "2018-01-01")]
    date_from: NaiveDate,

    /// Last possible date (YYYY-MM-DD).
    #[arg(long, default_value = "2019-02-01")]
    date_to: NaiveDate,

    /// Encoding of the generated file.
    #[arg(short, long, value_enum, default_value = "utf-8")]
    encoding: FileEncoding,

    /// Directory the file is written to.
    #[arg(long, default_value = "input")]
    output_dir: PathBuf,

    /// Seed for a reproducible file.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let settings = GeneratorSettings {
        rows: args.rows,
        date_from: args.date_from,
        date_to: args.date_to,
        encoding: args.encoding,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let table = SubdivisionTable::builtin();
    let path = write_test_file(&mut rng, &settings, table.names(), &args.output_dir)
        .with_context(|| format!("generate test file in {}", args.output_dir.display()))?;
    println!("Test csv file created! ({})", path.display());
    Ok(())
}

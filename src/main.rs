// Entry point and high-level CLI flow.
//
// - Pick the input file (from --input or interactively from --input-dir).
// - Decode, validate and aggregate it, listing rejected lines on stderr.
// - Write the aggregated report, print a summary and a short preview.
use anyhow::{Context, Result};
use clap::Parser;
use proccsv::config::{list_input_files, select_input, Args};
use proccsv::{loader, output, util, SubdivisionTable};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolve the input file, asking the user when none was given.
///
/// Returns `None` if the user quits the selection menu.
fn pick_input(args: &Args) -> Result<Option<PathBuf>> {
    if let Some(path) = &args.input {
        return Ok(Some(path.clone()));
    }
    let files = list_input_files(&args.input_dir)
        .with_context(|| format!("list input directory {}", args.input_dir.display()))?;
    if files.is_empty() {
        anyhow::bail!("no files in input directory {}", args.input_dir.display());
    }
    let stdin = io::stdin();
    let picked = select_input(&files, &mut stdin.lock(), &mut io::stdout())?;
    Ok(picked)
}

fn run() -> Result<()> {
    let args = Args::parse();
    let Some(input_path) = pick_input(&args)? else {
        return Ok(());
    };
    let output_path = args.output_path(&input_path);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let table = SubdivisionTable::builtin();
    info!(input = %input_path.display(), output = %output_path.display(), "processing");

    let (entries, report) = {
        let mut diagnostics = io::stderr().lock();
        loader::process_file(&input_path, &output_path, &table, &mut diagnostics)
            .with_context(|| format!("process {}", input_path.display()))?
    };

    println!(
        "Total number of invalid lines in the input file: {}",
        util::format_int(report.rejected_rows)
    );
    println!(
        "Aggregated {} valid rows into {} output rows ({})",
        util::format_int(report.accepted_rows),
        util::format_int(report.output_rows),
        output_path.display()
    );
    if args.preview > 0 {
        println!();
        output::preview_table_rows(&entries, args.preview);
    }
    if let Some(summary) = &args.summary {
        output::write_json(summary, &report)
            .with_context(|| format!("write summary {}", summary.display()))?;
    }
    println!("File processed!");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

//! `lipidgrep` — annotate lipid species names with reference identifiers.
//!
//! Reads a list of lipid names (as exported by an instrument) and a
//! tab-delimited reference database, matches them by canonical name, and
//! writes a tab-delimited identifier report next to the names file.
//!
//! # Usage
//!
//! ```
//! lipidgrep names.txt lipidmaps_targets.txt
//! lipidgrep --output annotated.tsv names.csv targets.txt
//! RUST_LOG=debug lipidgrep names.txt targets.txt
//! ```

mod output;
mod settings;

use std::{
  fs::File,
  io::{BufReader, BufWriter},
  path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, error::ErrorKind};
use lipidgrep_core::match_queries;
use lipidgrep_tsv::{ReportWriter, read_catalog, read_names};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Method signature is:\nLipidGrep [Lipid Names File Path] \
                     [Global Target List File Path]";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "lipidgrep",
  version,
  about = "Match lipid names to reference identifiers"
)]
struct Cli {
  /// File of lipid names separated by newlines, commas, tabs or semicolons.
  names: PathBuf,

  /// Tab-delimited reference database with a header row.
  catalog: PathBuf,

  /// Path to a TOML settings file.
  #[arg(short, long, value_name = "FILE", default_value = "lipidgrep.toml")]
  config: PathBuf,

  /// Write the report here instead of next to the names file.
  #[arg(short, long, value_name = "FILE")]
  output: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e)
      if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
    {
      e.exit()
    }
    Err(_) => {
      println!("{USAGE}");
      return Ok(());
    }
  };

  let settings = Settings::load(&cli.config)?;
  run(&cli, &settings)
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

fn run(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
  let catalog = {
    let file = File::open(&cli.catalog).with_context(|| {
      format!("failed to open reference catalog {}", cli.catalog.display())
    })?;
    read_catalog(BufReader::new(file)).with_context(|| {
      format!("failed to load reference catalog {}", cli.catalog.display())
    })?
  };

  let names = {
    let file = File::open(&cli.names).with_context(|| {
      format!("failed to open names file {}", cli.names.display())
    })?;
    read_names(BufReader::new(file)).with_context(|| {
      format!("failed to load names file {}", cli.names.display())
    })?
  };

  let report = match_queries(&catalog, &names);

  let path = cli
    .output
    .clone()
    .unwrap_or_else(|| output::report_path(&cli.names, &settings.output_suffix));
  let file = File::create(&path)
    .with_context(|| format!("failed to create report {}", path.display()))?;

  let mut writer =
    ReportWriter::new(BufWriter::new(file), settings.lipidmaps_url.as_str())
      .context("failed to write report header")?;
  writer
    .write_rows(&report.rows)
    .with_context(|| format!("failed to write report {}", path.display()))?;
  let rows = writer.rows_written();
  writer
    .finish()
    .with_context(|| format!("failed to flush report {}", path.display()))?;

  tracing::info!(
    queries = report.queries,
    matched = report.matched_queries(),
    unmatched = report.unmatched.len(),
    rows,
    report = %path.display(),
    "wrote identifier report"
  );

  Ok(())
}

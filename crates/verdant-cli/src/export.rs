//! # Export Subcommand
//!
//! `verdant export --snapshot <file> [--target <slug>] [--out-dir <dir>] [--date YYYY-MM-DD]`
//!
//! Writes the spreadsheet or a government-format CSV into the output
//! directory. An empty ledger prints a notice and writes nothing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use verdant_export::{export, ExportOutcome, ExportTarget};

use crate::config::CliConfig;
use crate::snapshot::load_snapshot;

/// Arguments for the export subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Ledger snapshot file (JSON or YAML).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Export target: `spreadsheet`, `brsr-core`, `cpcb-environment-statement`
    /// or `gst-hsn-register`. Defaults to `export.target`, then `spreadsheet`.
    #[arg(long)]
    pub target: Option<String>,

    /// Directory to write into. Defaults to `export.out_dir`, then the
    /// current directory.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Date embedded in the filename. Defaults to today (UTC).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Execute the export subcommand.
pub fn run_export(args: &ExportArgs, config: &CliConfig) -> Result<u8> {
    match export_snapshot(args, config)? {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", verdant_export::EMPTY_LEDGER_NOTICE),
    }
    Ok(0)
}

/// Export the snapshot and return the written path, or `None` for an
/// empty ledger.
pub fn export_snapshot(args: &ExportArgs, config: &CliConfig) -> Result<Option<PathBuf>> {
    let target = resolve_target(args.target.as_deref(), config)?;
    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.export.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let snapshot = load_snapshot(&args.snapshot)?;
    let artifact = match export(&snapshot.entries, target, date)? {
        ExportOutcome::Written(artifact) => artifact,
        ExportOutcome::Empty { notice } => {
            tracing::warn!(snapshot = %args.snapshot.display(), "{notice}");
            return Ok(None);
        }
    };

    let path = write_artifact(&out_dir, &artifact.filename, &artifact.bytes)?;
    tracing::info!(path = %path.display(), rows = artifact.row_count, "export saved");
    Ok(Some(path))
}

fn resolve_target(arg: Option<&str>, config: &CliConfig) -> Result<ExportTarget> {
    match arg.or(config.export.target.as_deref()) {
        Some(slug) => Ok(slug.parse()?),
        None => Ok(ExportTarget::default()),
    }
}

fn write_artifact(out_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;
    let path = out_dir.join(filename);
    std::fs::write(&path, bytes)
        .with_context(|| format!("failed to write export: {}", path.display()))?;
    Ok(path)
}

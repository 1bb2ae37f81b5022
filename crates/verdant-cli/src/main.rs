//! # verdant CLI entry point
//!
//! Parses command-line arguments, loads the optional config file, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verdant_cli::classify::{run_classify, run_classify_category, ClassifyArgs, ClassifyCategoryArgs};
use verdant_cli::config::CliConfig;
use verdant_cli::export::{run_export, ExportArgs};
use verdant_cli::gstin::{run_gstin, GstinArgs};
use verdant_cli::score::{run_score, ScoreArgs};

/// Verdant — carbon audit ledger toolchain.
///
/// Scores ledger credibility, labels entries against Indian and global
/// reporting frameworks, checks invoice GSTINs, and exports audit workbooks
/// and government CSVs.
#[derive(Parser, Debug)]
#[command(name = "verdant", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the credibility score and grade of a ledger snapshot.
    Score(ScoreArgs),

    /// Attach compliance labels to every entry of a ledger snapshot.
    Classify(ClassifyArgs),

    /// Print the compliance labels for a scope and optional category.
    ClassifyCategory(ClassifyCategoryArgs),

    /// GSTIN format validation and invoice acceptance.
    Gstin(GstinArgs),

    /// Export a ledger snapshot as an audit spreadsheet or government format.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Classify(args) => run_classify(args),
        Commands::ClassifyCategory(args) => run_classify_category(args),
        Commands::Gstin(args) => run_gstin(args, &config),
        Commands::Export(args) => run_export(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

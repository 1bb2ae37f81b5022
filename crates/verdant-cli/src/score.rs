//! # Score Subcommand
//!
//! `verdant score --snapshot <file>` prints the credibility result as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use verdant_credibility::{compute_credibility, CredibilityResult};

use crate::snapshot::load_snapshot;

/// Arguments for the score subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Ledger snapshot file (JSON or YAML).
    #[arg(long)]
    pub snapshot: PathBuf,
}

/// Execute the score subcommand.
pub fn run_score(args: &ScoreArgs) -> Result<u8> {
    let result = score_snapshot(args)?;
    crate::print_json(&result)?;
    Ok(0)
}

/// Load the snapshot and score it.
pub fn score_snapshot(args: &ScoreArgs) -> Result<CredibilityResult> {
    let snapshot = load_snapshot(&args.snapshot)?;
    Ok(compute_credibility(&snapshot.verifications, &snapshot.entries))
}

//! # verdant-cli — Command-Line Interface for the Verdant Ledger Engine
//!
//! Reads ledger snapshots from disk and hands them to the engine crates.
//! The snapshot file stands in for the store fetch; everything downstream
//! is a pure function of its contents.
//!
//! ## Subcommands
//!
//! - `verdant score` — Credibility score and grade for a snapshot.
//! - `verdant classify` — Compliance labels per entry, plus framework coverage.
//! - `verdant classify-category` — Labels for a scope and optional category.
//! - `verdant gstin` — GSTIN format validation and premium acceptance checks.
//! - `verdant export` — Audit spreadsheet and government-format CSV export.
//!
//! ```bash
//! verdant score --snapshot ledger.json
//! verdant classify-category --scope 1 --category fuel
//! verdant gstin check --invoice 27AAAPL1234C1Z5 --premium
//! verdant export --snapshot ledger.yaml --target brsr-core --out-dir exports
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here only load input,
//!   delegate to a domain crate, and print.
//! - Results go to stdout as pretty JSON. Logs go to stderr.

pub mod classify;
pub mod config;
pub mod export;
pub mod gstin;
pub mod score;
pub mod snapshot;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

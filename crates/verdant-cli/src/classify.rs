//! # Classify Subcommands
//!
//! - `verdant classify --snapshot <file>` labels every entry and reports how
//!   many entries each framework covers.
//! - `verdant classify-category --scope <n> [--category <c>]` prints the
//!   labels for one scope/category pair.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use verdant_compliance::{
    classify_ledger, framework_coverage, get_compliance_labels, ComplianceLabel,
    EntryClassification,
};
use verdant_core::EmissionScope;

use crate::snapshot::load_snapshot;

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Ledger snapshot file (JSON or YAML).
    #[arg(long)]
    pub snapshot: PathBuf,
}

/// Arguments for the classify-category subcommand.
#[derive(Args, Debug)]
pub struct ClassifyCategoryArgs {
    /// Emission scope (1, 2 or 3).
    #[arg(long)]
    pub scope: i64,

    /// Business category, e.g. `fuel` or `cloud`.
    #[arg(long)]
    pub category: Option<String>,
}

/// Classification report for a whole snapshot.
#[derive(Debug, Serialize)]
pub struct ClassificationReport {
    pub entries: Vec<EntryClassification>,
    /// Entries carrying at least one label per framework.
    pub coverage: BTreeMap<&'static str, usize>,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let report = classify_snapshot(args)?;
    crate::print_json(&report)?;
    Ok(0)
}

/// Load the snapshot and classify every entry.
pub fn classify_snapshot(args: &ClassifyArgs) -> Result<ClassificationReport> {
    let snapshot = load_snapshot(&args.snapshot)?;
    Ok(ClassificationReport {
        entries: classify_ledger(&snapshot.entries),
        coverage: framework_coverage(&snapshot.entries),
    })
}

/// Execute the classify-category subcommand.
pub fn run_classify_category(args: &ClassifyCategoryArgs) -> Result<u8> {
    let labels = category_labels(args)?;
    crate::print_json(&labels)?;
    Ok(0)
}

/// Resolve the labels for a scope and optional category.
pub fn category_labels(args: &ClassifyCategoryArgs) -> Result<Vec<ComplianceLabel>> {
    let scope = EmissionScope::try_from(args.scope).context("invalid --scope")?;
    Ok(get_compliance_labels(scope, args.category.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_category_labels() {
        let labels = category_labels(&ClassifyCategoryArgs {
            scope: 1,
            category: Some("fuel".into()),
        })
        .unwrap();
        assert!(labels.iter().any(|l| l.framework == "CPCB"));
        assert!(labels.iter().any(|l| l.framework == "GHG Protocol"));
    }

    #[test]
    fn unknown_category_is_empty() {
        let labels = category_labels(&ClassifyCategoryArgs {
            scope: 3,
            category: Some("crypto_mining".into()),
        })
        .unwrap();
        assert!(labels.is_empty());
    }

    #[test]
    fn scope_only_uses_scope_labels() {
        let labels = category_labels(&ClassifyCategoryArgs {
            scope: 2,
            category: None,
        })
        .unwrap();
        assert!(!labels.is_empty());
    }

    #[test]
    fn scope_out_of_range_is_error() {
        let err = category_labels(&ClassifyCategoryArgs {
            scope: 4,
            category: None,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains('4'));
    }
}

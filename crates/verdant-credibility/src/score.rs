//! # Score Computation
//!
//! Components, each a percentage:
//!
//! 1. **Verification average** — mean of verification-record scores that are
//!    present and `> 0`, ×100. A score of exactly `0` means "not yet scored"
//!    and is left out of the mean rather than counted as zero.
//! 2. **Green ratio** — entries flagged `is_green_benefit` over all entries.
//! 3. **Data completeness** — entries with vendor, invoice date, positive
//!    amount and HSN code all present, over all entries.
//! 4. **History depth** — positively scored records, saturating at
//!    [`HISTORY_SATURATION`].
//!
//! The composite is computed from the unrounded components, then rounded
//! and clamped. Breakdown values are rounded independently for display, so
//! they need not reproduce the composite exactly.

use serde::{Deserialize, Serialize};
use verdant_core::{LedgerEntry, VerificationRecord};

use crate::grade::CredibilityGrade;
use crate::weights::{
    COMPLETENESS_WEIGHT, GREEN_RATIO_WEIGHT, HISTORY_DEPTH_WEIGHT, HISTORY_SATURATION,
    VERIFICATION_WEIGHT,
};

/// Rounded component percentages, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityBreakdown {
    pub verification_avg: u8,
    pub green_ratio: u8,
    pub data_completeness: u8,
    pub history_depth: u8,
}

/// Composite credibility score with its grade and breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredibilityResult {
    /// Composite score, 0 through 100.
    pub score: u8,
    pub grade: CredibilityGrade,
    pub breakdown: CredibilityBreakdown,
}

/// Unrounded component percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Components {
    pub verification_avg: f64,
    pub green_ratio: f64,
    pub data_completeness: f64,
    pub history_depth: f64,
}

impl Components {
    /// Measure all four components over a snapshot.
    pub fn measure(records: &[VerificationRecord], entries: &[LedgerEntry]) -> Self {
        let positive: Vec<f64> = records
            .iter()
            .filter_map(VerificationRecord::verification_score)
            .filter(|s| *s > 0.0)
            .collect();

        let verification_avg = if positive.is_empty() {
            0.0
        } else {
            positive.iter().sum::<f64>() / positive.len() as f64 * 100.0
        };

        let depth = positive.len().min(HISTORY_SATURATION);
        let history_depth = depth as f64 / HISTORY_SATURATION as f64 * 100.0;

        Self {
            verification_avg,
            green_ratio: percent_of(entries, |e| e.is_green_benefit),
            data_completeness: percent_of(entries, is_complete),
            history_depth,
        }
    }

    /// Weighted sum before rounding.
    pub fn weighted_sum(&self) -> f64 {
        VERIFICATION_WEIGHT * self.verification_avg
            + GREEN_RATIO_WEIGHT * self.green_ratio
            + COMPLETENESS_WEIGHT * self.data_completeness
            + HISTORY_DEPTH_WEIGHT * self.history_depth
    }

    fn breakdown(&self) -> CredibilityBreakdown {
        CredibilityBreakdown {
            verification_avg: round_percent(self.verification_avg),
            green_ratio: round_percent(self.green_ratio),
            data_completeness: round_percent(self.data_completeness),
            history_depth: round_percent(self.history_depth),
        }
    }
}

/// Whether an entry carries all the invoice metadata the completeness
/// component asks for.
pub fn is_complete(entry: &LedgerEntry) -> bool {
    non_blank(entry.vendor.as_deref())
        && entry.invoice_date.is_some()
        && entry.amount.is_some_and(|a| a.is_finite() && a > 0.0)
        && non_blank(entry.hsn_code.as_deref())
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn percent_of(entries: &[LedgerEntry], pred: impl Fn(&LedgerEntry) -> bool) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let hits = entries.iter().filter(|e| pred(e)).count();
    hits as f64 / entries.len() as f64 * 100.0
}

fn round_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Compute the credibility score for one business's snapshot.
pub fn compute_credibility(
    records: &[VerificationRecord],
    entries: &[LedgerEntry],
) -> CredibilityResult {
    let components = Components::measure(records, entries);
    let score = round_percent(components.weighted_sum());
    let grade = CredibilityGrade::from_score(score);

    tracing::debug!(
        records = records.len(),
        entries = entries.len(),
        score,
        grade = %grade,
        "credibility computed"
    );

    CredibilityResult {
        score,
        grade,
        breakdown: components.breakdown(),
    }
}

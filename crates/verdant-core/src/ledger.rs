//! # Ledger Data Model
//!
//! The records the engines read from the ledger entry store.
//!
//! A [`LedgerEntry`] is one classified emission line derived from a source
//! document. A [`VerificationRecord`] is the coarser per-submission outcome
//! produced by the review workflow. Both arrive as an immutable
//! [`LedgerSnapshot`]; nothing in this workspace writes them back.
//!
//! Optional fields are common: low-quality extractions leave invoice
//! metadata blank, and unreviewed entries carry no verification score.
//! Consumers treat absence as "excluded", never as an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::VerdantError;
use crate::fiscal::FiscalPeriod;
use crate::identity::DocumentFingerprint;
use crate::lenient;

/// GHG Protocol emission scope.
///
/// Serialized as the bare integers `1`, `2`, `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmissionScope {
    /// Direct emissions from owned or controlled sources.
    Scope1,
    /// Indirect emissions from purchased energy.
    Scope2,
    /// All other indirect emissions in the value chain.
    Scope3,
}

impl EmissionScope {
    /// All scopes in numeric order.
    pub fn all() -> &'static [EmissionScope] {
        &[Self::Scope1, Self::Scope2, Self::Scope3]
    }

    /// The scope number, 1 through 3.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Scope1 => 1,
            Self::Scope2 => 2,
            Self::Scope3 => 3,
        }
    }
}

impl TryFrom<i64> for EmissionScope {
    type Error = VerdantError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Scope1),
            2 => Ok(Self::Scope2),
            3 => Ok(Self::Scope3),
            other => Err(VerdantError::InvalidScope(other)),
        }
    }
}

impl std::fmt::Display for EmissionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scope {}", self.as_u8())
    }
}

impl Serialize for EmissionScope {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for EmissionScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = i64::deserialize(deserializer)?;
        Self::try_from(n).map_err(serde::de::Error::custom)
    }
}

/// Review state of a ledger entry or verification submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Not yet reviewed.
    #[default]
    Pending,
    /// Reviewed and accepted.
    Verified,
    /// Flagged for a human to look at.
    NeedsReview,
    /// Reviewed and rejected.
    Rejected,
}

impl VerificationStatus {
    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::NeedsReview => "needs_review",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the automated validation pass over an extracted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// All checks passed.
    Passed,
    /// Checks passed with warnings.
    Warning,
    /// At least one check failed; see the entry's validation reason.
    Failed,
}

impl ValidationResult {
    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Warning => "warning",
            Self::Failed => "failed",
        }
    }
}

/// Likelihood that a green-benefit claim overstates its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreenwashingRisk {
    /// No indicators found.
    Low,
    /// Some indicators found.
    Medium,
    /// Strong indicators found.
    High,
}

impl GreenwashingRisk {
    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Sanitize a score that must lie in `[0, 1]`.
///
/// NaN, infinite, negative and greater-than-one values are treated as
/// absent rather than clamped.
pub fn unit_score(value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Some(v),
        Some(v) => {
            tracing::debug!(value = v, "unit score out of range, treating as absent");
            None
        }
        None => None,
    }
}

/// One classified emission line derived from a source document.
///
/// Optional numeric fields deserialize leniently: a value that is not a
/// usable number is read as absent instead of rejecting the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Store-assigned entry identifier.
    pub id: Uuid,
    /// Content hash of the source document. Not unique across entries.
    pub document_hash: DocumentFingerprint,

    // -- Invoice metadata --
    /// Invoice number as printed on the document.
    #[serde(default)]
    pub invoice_number: Option<String>,
    /// Supplier name.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Invoice issue date. Drives the fiscal period when no tags are stored.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    /// Invoice total in `currency`.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    /// ISO 4217 currency code of `amount`.
    #[serde(default)]
    pub currency: Option<String>,

    // -- Business taxonomy --
    /// Green benefit category (e.g. `renewable_energy`) for benefit entries.
    #[serde(default)]
    pub green_category: Option<String>,
    /// HSN/SAC code of the invoiced goods or service.
    #[serde(default)]
    pub hsn_code: Option<String>,
    /// GSTIN as extracted from the document; not format-checked.
    #[serde(default)]
    pub gstin: Option<String>,

    // -- Emission --
    /// GHG Protocol scope of the emission.
    pub scope: EmissionScope,
    /// Business category key (e.g. `fuel`, `cloud`). Blank when unclassified.
    #[serde(default)]
    pub category: String,
    /// Activity quantity the emission factor was applied to.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub activity_value: Option<f64>,
    /// Unit of `activity_value` (e.g. `litre`, `kWh`).
    #[serde(default)]
    pub activity_unit: Option<String>,
    /// kg CO₂e per unit of activity.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub emission_factor: Option<f64>,
    /// Publication the emission factor was taken from.
    #[serde(default)]
    pub factor_source: Option<String>,
    /// Emitted CO₂-equivalent in kilograms. Always `>= 0`.
    pub co2_kg: f64,
    /// Whether the entry records an emissions reduction.
    #[serde(default)]
    pub is_green_benefit: bool,

    // -- Verification --
    /// Extraction confidence, nominally in `[0, 1]`. Stored as received.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub confidence: Option<f64>,
    /// Review score, nominally in `[0, 1]`. Stored as received.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub verification_score: Option<f64>,
    /// Review workflow state.
    #[serde(default)]
    pub verification_status: VerificationStatus,
    /// Outcome of automated validation, when it has run.
    #[serde(default)]
    pub validation_result: Option<ValidationResult>,
    /// Explanation accompanying `validation_result`.
    #[serde(default)]
    pub validation_reason: Option<String>,
    /// Assessed greenwashing risk for benefit claims.
    #[serde(default)]
    pub greenwashing_risk: Option<GreenwashingRisk>,
    /// Version of the calculation methodology that produced `co2_kg`.
    #[serde(default)]
    pub methodology_version: Option<String>,

    // -- Timestamps and fiscal tags --
    /// When the entry was written to the store.
    pub created_at: DateTime<Utc>,
    /// When a reviewer verified the entry.
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    /// Stored financial year tag (starting calendar year).
    #[serde(default, deserialize_with = "lenient::opt_i32")]
    pub fiscal_year: Option<i32>,
    /// Stored financial quarter tag, 1 through 4.
    #[serde(default, deserialize_with = "lenient::opt_u8")]
    pub fiscal_quarter: Option<u8>,
}

impl LedgerEntry {
    /// Create an unreviewed entry with every optional field absent.
    pub fn new(
        document_hash: DocumentFingerprint,
        scope: EmissionScope,
        category: impl Into<String>,
        co2_kg: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_hash,
            invoice_number: None,
            vendor: None,
            invoice_date: None,
            amount: None,
            currency: None,
            green_category: None,
            hsn_code: None,
            gstin: None,
            scope,
            category: category.into(),
            activity_value: None,
            activity_unit: None,
            emission_factor: None,
            factor_source: None,
            co2_kg,
            is_green_benefit: false,
            confidence: None,
            verification_score: None,
            verification_status: VerificationStatus::Pending,
            validation_result: None,
            validation_reason: None,
            greenwashing_risk: None,
            methodology_version: None,
            created_at,
            verified_at: None,
            fiscal_year: None,
            fiscal_quarter: None,
        }
    }

    /// The financial period for this entry.
    ///
    /// Stored tags win when both are present and well-formed; otherwise the
    /// period is derived from the invoice date.
    pub fn fiscal_period(&self) -> Option<FiscalPeriod> {
        if let (Some(year), Some(quarter)) = (self.fiscal_year, self.fiscal_quarter) {
            if let Some(period) = FiscalPeriod::from_tags(year, quarter) {
                return Some(period);
            }
        }
        self.invoice_date.map(FiscalPeriod::from_date)
    }

    /// Check the emission invariant `co2_kg >= 0` (and finite).
    ///
    /// # Errors
    ///
    /// Returns [`VerdantError::InvalidEmission`] naming the entry.
    pub fn check_invariants(&self) -> Result<(), VerdantError> {
        if !self.co2_kg.is_finite() {
            return Err(VerdantError::InvalidEmission {
                entry_id: self.id.to_string(),
                reason: format!("co2_kg is not finite: {}", self.co2_kg),
            });
        }
        if self.co2_kg < 0.0 {
            return Err(VerdantError::InvalidEmission {
                entry_id: self.id.to_string(),
                reason: format!("co2_kg is negative: {}", self.co2_kg),
            });
        }
        Ok(())
    }
}

/// Per-submission verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Record identifier; generated when the store omits it.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Review workflow state of the submission.
    #[serde(default)]
    pub status: VerificationStatus,
    /// Aggregate CO₂ across the submission, in kilograms.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_co2_kg: f64,
    /// Overall score in `[0, 1]`, or absent when not yet scored.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub verification_score: Option<f64>,
    /// When the submission was verified.
    pub created_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Create a record with the given score.
    pub fn new(
        status: VerificationStatus,
        verification_score: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            total_co2_kg: 0.0,
            verification_score,
            created_at,
        }
    }

    /// Verification score, with out-of-range values treated as absent.
    pub fn verification_score(&self) -> Option<f64> {
        unit_score(self.verification_score)
    }
}

/// A point-in-time read of one business's ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
    #[serde(default)]
    pub verifications: Vec<VerificationRecord>,
}

impl LedgerSnapshot {
    /// Check every entry's emission invariant, stopping at the first failure.
    pub fn check_invariants(&self) -> Result<(), VerdantError> {
        self.entries.iter().try_for_each(LedgerEntry::check_invariants)
    }

    /// Whether the snapshot holds neither entries nor verification records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.verifications.is_empty()
    }
}

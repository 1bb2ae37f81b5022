//! # Invoice Acceptance
//!
//! Decision table, evaluated top to bottom:
//!
//! | # | Condition | Valid | Reason |
//! |---|-----------|-------|--------|
//! | 1 | not premium | yes | `free_mode` |
//! | 2 | premium, no profile GSTIN | yes | `no_profile_gstin` |
//! | 3 | premium, profile, no invoice GSTIN | no | `no_invoice_gstin` |
//! | 4 | both present, equal after normalization | yes | `matched` |
//! | 5 | both present, unequal | no | `gstin_mismatch` |
//!
//! Rows 2–5 assume premium is already established by row 1, so the order
//! must not change. Row 2 is a soft warning: the invoice is accepted but the
//! user should complete their profile.

use serde::{Deserialize, Serialize};

use crate::present;

/// Why an invoice was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstinReason {
    /// Unrestricted mode; any invoice is accepted.
    FreeMode,
    /// Business profile has no GSTIN to compare against.
    NoProfileGstin,
    /// Invoice carries no GSTIN.
    NoInvoiceGstin,
    /// Invoice and profile GSTINs agree.
    Matched,
    /// Invoice and profile GSTINs differ.
    GstinMismatch,
}

impl GstinReason {
    /// The snake_case reason code, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeMode => "free_mode",
            Self::NoProfileGstin => "no_profile_gstin",
            Self::NoInvoiceGstin => "no_invoice_gstin",
            Self::Matched => "matched",
            Self::GstinMismatch => "gstin_mismatch",
        }
    }
}

impl std::fmt::Display for GstinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an invoice acceptance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstinValidationResult {
    pub valid: bool,
    pub reason: GstinReason,
    /// Human-readable explanation for display.
    pub message: String,
}

impl GstinValidationResult {
    fn accept(reason: GstinReason, message: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason,
            message: message.into(),
        }
    }

    fn reject(reason: GstinReason, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason,
            message: message.into(),
        }
    }

    /// Accepted, but the user should be prompted to act.
    pub fn is_soft_warning(&self) -> bool {
        self.valid && self.reason == GstinReason::NoProfileGstin
    }
}

/// Decide whether an invoice is accepted for the business profile.
///
/// Identifiers are compared after normalization (whitespace removed,
/// uppercased); `None` and blank strings both count as absent. Format
/// validity is not required for a match.
pub fn validate_invoice_for_premium(
    invoice_gstin: Option<&str>,
    profile_gstin: Option<&str>,
    is_premium: bool,
) -> GstinValidationResult {
    let result = decide(present(invoice_gstin), present(profile_gstin), is_premium);
    tracing::debug!(
        valid = result.valid,
        reason = %result.reason,
        is_premium,
        "invoice GSTIN acceptance decided"
    );
    result
}

fn decide(
    invoice: Option<String>,
    profile: Option<String>,
    is_premium: bool,
) -> GstinValidationResult {
    if !is_premium {
        return GstinValidationResult::accept(
            GstinReason::FreeMode,
            "Free mode: invoice accepted without GSTIN verification",
        );
    }
    let Some(profile) = profile else {
        return GstinValidationResult::accept(
            GstinReason::NoProfileGstin,
            "Add your GSTIN to the business profile to verify invoice ownership",
        );
    };
    let Some(invoice) = invoice else {
        return GstinValidationResult::reject(
            GstinReason::NoInvoiceGstin,
            "No GSTIN found on this invoice; it cannot be matched to your business",
        );
    };
    if invoice == profile {
        GstinValidationResult::accept(
            GstinReason::Matched,
            format!("Invoice GSTIN {invoice} matches your business profile"),
        )
    } else {
        GstinValidationResult::reject(
            GstinReason::GstinMismatch,
            format!("Invoice GSTIN {invoice} does not match your profile GSTIN {profile}"),
        )
    }
}

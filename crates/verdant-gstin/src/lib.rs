//! # verdant-gstin — GSTIN Identity Matching
//!
//! Decides whether a processed invoice belongs to the business profile,
//! keyed on India's GST Identification Number.
//!
//! - **Acceptance** (`acceptance.rs`): the five-branch decision table behind
//!   [`validate_invoice_for_premium`]. This is the one place where a derived
//!   value gates an external workflow (invoice acceptance).
//!
//! - **Extraction** (`extract.rs`): picks which of an invoice's supplier and
//!   buyer identifiers to compare against the profile.
//!
//! Format validation itself lives in `verdant-core` alongside the [`Gstin`]
//! newtype and is re-exported here.
//!
//! Both operations are state-free and never fail: every input, including
//! absent or blank identifiers, maps to a defined outcome.

pub mod acceptance;
pub mod extract;

pub use acceptance::{validate_invoice_for_premium, GstinReason, GstinValidationResult};
pub use extract::extract_invoice_gstin;
pub use verdant_core::identity::{is_valid_gstin, normalize_gstin, Gstin};

/// Normalize an optional identifier, mapping blank values to `None`.
pub(crate) fn present(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_gstin).filter(|s| !s.is_empty())
}

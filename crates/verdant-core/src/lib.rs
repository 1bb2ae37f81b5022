//! # verdant-core — Foundational Types for the Verdant Ledger Engine
//!
//! Defines the audit-ledger data model that every engine crate reads:
//! ledger entries, verification records, identifier newtypes, fiscal
//! periods, and the error hierarchy. Every other crate in the workspace
//! depends on `verdant-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `Gstin` and `DocumentFingerprint`
//!    validate at construction. No bare strings where a checked identifier
//!    is expected.
//!
//! 2. **Scope by construction.** `EmissionScope` has exactly three variants
//!    and rejects any other integer at deserialization time.
//!
//! 3. **Snapshots are values.** Engines receive `&[LedgerEntry]` and
//!    `&[VerificationRecord]` and never mutate them.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `verdant-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod fiscal;
pub mod identity;
pub mod ledger;
pub mod lenient;

// Re-export primary types for ergonomic imports.
pub use digest::sha256_hex;
pub use error::VerdantError;
pub use fiscal::FiscalPeriod;
pub use identity::{is_valid_gstin, normalize_gstin, DocumentFingerprint, Gstin};
pub use ledger::{
    unit_score, EmissionScope, GreenwashingRisk, LedgerEntry, LedgerSnapshot, ValidationResult,
    VerificationRecord, VerificationStatus,
};

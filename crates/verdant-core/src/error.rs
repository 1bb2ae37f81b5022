//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared by the Verdant crates. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The scoring, classification, and matching engines never return these:
//! they degrade to defined defaults. Errors surface only where data enters
//! the system (identifier construction, snapshot deserialization, invariant
//! checks on store records).

use thiserror::Error;

/// Top-level error type for the Verdant ledger engine.
#[derive(Error, Debug)]
pub enum VerdantError {
    /// Emission scope outside {1, 2, 3}.
    #[error("invalid emission scope {0}: expected 1, 2 or 3")]
    InvalidScope(i64),

    /// GSTIN failed the 15-character positional format check.
    #[error("invalid GSTIN format: {0:?}")]
    InvalidGstin(String),

    /// Document fingerprint is empty or not hexadecimal.
    #[error("invalid document fingerprint: {0:?}")]
    InvalidFingerprint(String),

    /// A ledger entry violates an emission invariant.
    #[error("invalid emission on entry {entry_id}: {reason}")]
    InvalidEmission {
        /// The offending entry.
        entry_id: String,
        /// What was wrong with it.
        reason: String,
    },
}

//! # Identity Newtypes
//!
//! Validated identifiers carried by ledger entries and business profiles.
//!
//! ## Validation
//!
//! String-based identifiers ([`Gstin`], [`DocumentFingerprint`]) validate
//! format at construction time and deserialize through the same check, so an
//! invalid value can never sit inside one of these types.
//!
//! ## GSTIN layout
//!
//! India's GST Identification Number is 15 characters:
//!
//! | Positions | Content |
//! |-----------|---------|
//! | 1–2 | State code (digits) |
//! | 3–7 | PAN letters |
//! | 8–11 | PAN digits |
//! | 12 | PAN check letter |
//! | 13 | Entity code (alphanumeric) |
//! | 14 | Literal `Z` |
//! | 15 | Checksum character (alphanumeric) |
//!
//! Only the positional format is checked. The checksum character is not
//! recomputed.

use serde::{Deserialize, Serialize};

use crate::digest::sha256_hex;
use crate::error::VerdantError;

/// Routes `Deserialize` through the type's validating `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Length of a GSTIN after normalization.
pub const GSTIN_LEN: usize = 15;

/// Normalize a GSTIN candidate: drop all whitespace and uppercase ASCII letters.
pub fn normalize_gstin(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Check the positional GSTIN format after normalization.
///
/// Returns `true` for any string that normalizes to
/// `DD LLLLL DDDD L A Z A` (D digit, L letter, A alphanumeric).
pub fn is_valid_gstin(raw: &str) -> bool {
    has_gstin_shape(&normalize_gstin(raw))
}

fn has_gstin_shape(s: &str) -> bool {
    let b = s.as_bytes();
    if !s.is_ascii() || b.len() != GSTIN_LEN {
        return false;
    }
    b[0..2].iter().all(u8::is_ascii_digit)
        && b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase()
        && is_upper_alnum(b[12])
        && b[13] == b'Z'
        && is_upper_alnum(b[14])
}

fn is_upper_alnum(c: u8) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// India Goods and Services Tax Identification Number.
///
/// Stored in normalized form (no whitespace, uppercase), so two `Gstin`
/// values compare equal exactly when their normalized strings match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Gstin(String);

impl_validating_deserialize!(Gstin);

impl Gstin {
    /// Create a GSTIN from a raw string, normalizing then validating format.
    ///
    /// # Errors
    ///
    /// Returns [`VerdantError::InvalidGstin`] if the normalized value does not
    /// match the 15-character layout.
    pub fn new(value: impl Into<String>) -> Result<Self, VerdantError> {
        let raw = value.into();
        let normalized = normalize_gstin(&raw);
        if !has_gstin_shape(&normalized) {
            return Err(VerdantError::InvalidGstin(raw));
        }
        Ok(Self(normalized))
    }

    /// Access the normalized GSTIN string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-digit state code prefix.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// The embedded ten-character PAN.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl std::fmt::Display for Gstin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Gstin {
    type Err = VerdantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Content hash of a source document, as lowercase hex.
///
/// Fingerprints are not unique across the ledger: a reprocessed document
/// produces a new entry carrying the same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DocumentFingerprint(String);

impl_validating_deserialize!(DocumentFingerprint);

impl DocumentFingerprint {
    /// Wrap an existing hex digest, lowercasing it.
    ///
    /// # Errors
    ///
    /// Returns [`VerdantError::InvalidFingerprint`] if the value is empty or
    /// contains non-hex characters.
    pub fn new(value: impl Into<String>) -> Result<Self, VerdantError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VerdantError::InvalidFingerprint(raw));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Fingerprint raw document bytes with SHA-256.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(sha256_hex(data))
    }

    /// Access the full hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first `len` hex characters (the whole digest if shorter).
    pub fn prefix(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }
}

impl std::fmt::Display for DocumentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

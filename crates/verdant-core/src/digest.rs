//! # Content Digest — Document Fingerprints
//!
//! Source documents are identified by the SHA-256 of their raw bytes. The
//! hex digest is what the store records as the document fingerprint, and
//! what the audit export truncates into its first column.

use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 of raw bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

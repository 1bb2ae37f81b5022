//! Ledger snapshot loading. JSON or YAML, chosen by file extension.

use std::path::Path;

use anyhow::{bail, Context, Result};
use verdant_core::LedgerSnapshot;

/// Read and check a ledger snapshot.
///
/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON. Entries
/// with a negative or non-finite `co2_kg` are rejected.
pub fn load_snapshot(path: &Path) -> Result<LedgerSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))?;

    let snapshot: LedgerSnapshot = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML snapshot: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON snapshot: {}", path.display()))?
    };

    if let Err(e) = snapshot.check_invariants() {
        bail!("invalid snapshot {}: {e}", path.display());
    }

    tracing::debug!(
        snapshot = %path.display(),
        entries = snapshot.entries.len(),
        verifications = snapshot.verifications.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("yaml" | "yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_by_extension() {
        assert!(is_yaml(Path::new("ledger.yaml")));
        assert!(is_yaml(Path::new("ledger.YML")));
        assert!(!is_yaml(Path::new("ledger.json")));
        assert!(!is_yaml(Path::new("ledger")));
    }

    #[test]
    fn empty_json_object_is_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_snapshot(&path).unwrap().is_empty());
    }

    #[test]
    fn negative_emission_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(
            &path,
            "entries:\n\
             - id: 6f1c1d36-8a7e-4f2b-9d0a-3c1e5b7a9f20\n  \
               document_hash: ab12\n  \
               scope: 1\n  \
               category: fuel\n  \
               co2_kg: -4.0\n  \
               created_at: 2025-06-01T00:00:00Z\n",
        )
        .unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("negative"), "{err}");
    }

    #[test]
    fn malformed_json_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ entries: ").unwrap();
        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}

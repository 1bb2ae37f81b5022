//! # Classification
//!
//! Table lookups for single `(scope, category)` pairs, ledger entries and
//! whole ledgers. India labels always precede global labels.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Serialize;
use uuid::Uuid;
use verdant_core::{EmissionScope, LedgerEntry};

use crate::label::ComplianceLabel;
use crate::table::{CategoryRow, CATEGORY_TABLE, SCOPE_TABLE};

fn category_index() -> &'static BTreeMap<&'static str, &'static CategoryRow> {
    static INDEX: OnceLock<BTreeMap<&'static str, &'static CategoryRow>> = OnceLock::new();
    INDEX.get_or_init(|| CATEGORY_TABLE.iter().map(|row| (row.category, row)).collect())
}

/// Labels for a category, India first then global.
///
/// The category is trimmed and lowercased before lookup. Unknown categories
/// return an empty list.
pub fn category_labels(category: &str) -> Vec<ComplianceLabel> {
    let key = category.trim().to_lowercase();
    match category_index().get(key.as_str()) {
        Some(row) => row.india.iter().chain(row.global.iter()).copied().collect(),
        None => {
            tracing::debug!(category = %key, "no compliance labels for category");
            Vec::new()
        }
    }
}

/// The fixed India + global label pair for a scope.
pub fn scope_labels(scope: EmissionScope) -> Vec<ComplianceLabel> {
    SCOPE_TABLE
        .iter()
        .filter(|row| row.scope == scope)
        .flat_map(|row| [row.india, row.global])
        .collect()
}

/// Labels for a `(scope, category)` pair.
///
/// With a category, returns that category's labels (the scope does not
/// narrow them). Without one, returns the scope-level pair.
pub fn get_compliance_labels(scope: EmissionScope, category: Option<&str>) -> Vec<ComplianceLabel> {
    match category {
        Some(category) => category_labels(category),
        None => scope_labels(scope),
    }
}

/// The supported category keys, sorted.
pub fn known_categories() -> Vec<&'static str> {
    category_index().keys().copied().collect()
}

/// Labels attached to one ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryClassification {
    pub entry_id: Uuid,
    pub labels: Vec<ComplianceLabel>,
}

/// Classify a ledger entry.
///
/// Entries with a blank category fall back to their scope-level labels.
pub fn classify_entry(entry: &LedgerEntry) -> EntryClassification {
    let category = Some(entry.category.as_str()).filter(|c| !c.trim().is_empty());
    EntryClassification {
        entry_id: entry.id,
        labels: get_compliance_labels(entry.scope, category),
    }
}

/// Classify every entry, preserving input order.
pub fn classify_ledger(entries: &[LedgerEntry]) -> Vec<EntryClassification> {
    entries.iter().map(classify_entry).collect()
}

/// Number of entries touched by each framework.
///
/// An entry counts once per framework even if several of its labels cite
/// the same framework.
pub fn framework_coverage(entries: &[LedgerEntry]) -> BTreeMap<&'static str, usize> {
    let mut coverage = BTreeMap::new();
    for entry in entries {
        let frameworks: BTreeSet<&'static str> = classify_entry(entry)
            .labels
            .iter()
            .map(|l| l.framework)
            .collect();
        for framework in frameworks {
            *coverage.entry(framework).or_insert(0) += 1;
        }
    }
    coverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{Region, BRSR, CPCB, GHG_PROTOCOL, ISO_14064_1};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use verdant_core::DocumentFingerprint;

    fn entry(scope: EmissionScope, category: &str) -> LedgerEntry {
        LedgerEntry::new(
            DocumentFingerprint::of_bytes(category.as_bytes()),
            scope,
            category,
            10.0,
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn fuel_has_india_and_global_labels() {
        for scope in EmissionScope::all() {
            let labels = get_compliance_labels(*scope, Some("fuel"));
            assert!(labels
                .iter()
                .any(|l| l.region == Region::India && (l.framework == CPCB || l.framework == BRSR)));
            assert!(labels.iter().any(|l| l.region == Region::Global
                && (l.framework == GHG_PROTOCOL || l.framework == ISO_14064_1)));
        }
    }

    #[test]
    fn india_labels_come_first() {
        let labels = category_labels("waste");
        let first_global = labels.iter().position(|l| l.region == Region::Global).unwrap();
        assert!(labels[..first_global].iter().all(|l| l.region == Region::India));
        assert!(labels[first_global..].iter().all(|l| l.region == Region::Global));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(category_labels("Electricity"), category_labels("electricity"));
        assert_eq!(category_labels(" IT_HARDWARE "), category_labels("it_hardware"));
        assert!(!category_labels("CLOUD").is_empty());
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(category_labels("unobtainium").is_empty());
        assert!(get_compliance_labels(EmissionScope::Scope1, Some("")).is_empty());
    }

    #[test]
    fn scope_only_returns_pair() {
        for scope in EmissionScope::all() {
            let labels = get_compliance_labels(*scope, None);
            assert_eq!(labels.len(), 2);
            assert_eq!(labels[0].region, Region::India);
            assert_eq!(labels[1].region, Region::Global);
        }
    }

    #[test]
    fn known_categories_sorted() {
        let cats = known_categories();
        assert_eq!(cats.len(), 10);
        let mut sorted = cats.clone();
        sorted.sort();
        assert_eq!(cats, sorted);
        assert!(cats.contains(&"it_hardware"));
    }

    #[test]
    fn blank_entry_category_uses_scope_labels() {
        let e = entry(EmissionScope::Scope2, "  ");
        assert_eq!(classify_entry(&e).labels, scope_labels(EmissionScope::Scope2));
    }

    #[test]
    fn classify_ledger_preserves_order_and_duplicates() {
        let a = entry(EmissionScope::Scope1, "fuel");
        let b = a.clone();
        let c = entry(EmissionScope::Scope3, "travel");
        let out = classify_ledger(&[a.clone(), b, c.clone()]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].entry_id, a.id);
        assert_eq!(out[1].entry_id, a.id);
        assert_eq!(out[2].entry_id, c.id);
    }

    #[test]
    fn coverage_counts_entries_once_per_framework() {
        let entries = vec![
            entry(EmissionScope::Scope1, "fuel"),
            entry(EmissionScope::Scope2, "electricity"),
            entry(EmissionScope::Scope3, "mystery"),
        ];
        let coverage = framework_coverage(&entries);
        assert_eq!(coverage.get(GHG_PROTOCOL), Some(&2));
        assert_eq!(coverage.get(BRSR), Some(&2));
        assert_eq!(coverage.get(CPCB), Some(&1));
        assert_eq!(coverage.get(ISO_14064_1), Some(&2));
    }

    #[test]
    fn label_serializes_with_region() {
        let json = serde_json::to_value(category_labels("software")[0]).unwrap();
        assert_eq!(json["framework"], "GSTIN-HSN");
        assert_eq!(json["region"], "india");
    }

    proptest! {
        /// Arbitrary categories never panic, and unknown ones are empty.
        #[test]
        fn arbitrary_category_is_safe(category in ".{0,24}") {
            let labels = category_labels(&category);
            let key = category.trim().to_lowercase();
            prop_assert_eq!(labels.is_empty(), !known_categories().contains(&key.as_str()));
        }
    }
}

//! # Credibility Score Properties
//!
//! Property tests over generated snapshots: bounds, grade consistency and
//! monotonicity of the ledger-quality components.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use verdant_core::{
    DocumentFingerprint, EmissionScope, LedgerEntry, VerificationRecord, VerificationStatus,
};
use verdant_credibility::{compute_credibility, CredibilityGrade};

fn arb_score() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (0.0f64..=1.0).prop_map(Some),
        // Malformed values the store might hand over.
        prop_oneof![Just(f64::NAN), Just(-0.5), Just(3.0)].prop_map(Some),
    ]
}

fn arb_record() -> impl Strategy<Value = VerificationRecord> {
    arb_score().prop_map(|score| {
        VerificationRecord::new(
            VerificationStatus::Verified,
            score,
            Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap(),
        )
    })
}

fn arb_entry() -> impl Strategy<Value = LedgerEntry> {
    (
        any::<bool>(),
        proptest::option::of("[ A-Za-z]{0,12}"),
        any::<bool>(),
        proptest::option::of(-100.0f64..100_000.0),
        proptest::option::of("[0-9 ]{0,8}"),
        arb_score(),
    )
        .prop_map(|(green, vendor, dated, amount, hsn, score)| {
            let mut e = LedgerEntry::new(
                DocumentFingerprint::of_bytes(b"generated"),
                EmissionScope::Scope3,
                "services",
                1.0,
                Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap(),
            );
            e.is_green_benefit = green;
            e.vendor = vendor;
            e.invoice_date = if dated { NaiveDate::from_ymd_opt(2025, 9, 15) } else { None };
            e.amount = amount;
            e.hsn_code = hsn;
            e.verification_score = score;
            e
        })
}

fn complete_green_entry() -> LedgerEntry {
    let mut e = LedgerEntry::new(
        DocumentFingerprint::of_bytes(b"complete"),
        EmissionScope::Scope2,
        "electricity",
        240.0,
        Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap(),
    );
    e.is_green_benefit = true;
    e.vendor = Some("MSEDCL".into());
    e.invoice_date = NaiveDate::from_ymd_opt(2025, 9, 30);
    e.amount = Some(4_210.0);
    e.hsn_code = Some("2716".into());
    e
}

fn expected_grade(score: u8) -> CredibilityGrade {
    match score {
        90..=100 => CredibilityGrade::APlus,
        75..=89 => CredibilityGrade::A,
        55..=74 => CredibilityGrade::B,
        35..=54 => CredibilityGrade::C,
        _ => CredibilityGrade::D,
    }
}

proptest! {
    /// Score stays within bounds and grade always matches the threshold table.
    #[test]
    fn score_bounded_and_grade_consistent(
        records in prop::collection::vec(arb_record(), 0..80),
        entries in prop::collection::vec(arb_entry(), 0..40),
    ) {
        let r = compute_credibility(&records, &entries);
        prop_assert!(r.score <= 100);
        prop_assert_eq!(r.grade, expected_grade(r.score));
        prop_assert!(r.breakdown.verification_avg <= 100);
        prop_assert!(r.breakdown.green_ratio <= 100);
        prop_assert!(r.breakdown.data_completeness <= 100);
        prop_assert!(r.breakdown.history_depth <= 100);
    }

    /// Adding a complete, green entry never lowers completeness or green ratio.
    #[test]
    fn complete_green_entry_is_monotonic(
        records in prop::collection::vec(arb_record(), 0..10),
        entries in prop::collection::vec(arb_entry(), 1..40),
    ) {
        let before = compute_credibility(&records, &entries);
        let mut more = entries.clone();
        more.push(complete_green_entry());
        let after = compute_credibility(&records, &more);
        prop_assert!(after.breakdown.data_completeness >= before.breakdown.data_completeness);
        prop_assert!(after.breakdown.green_ratio >= before.breakdown.green_ratio);
        prop_assert!(after.score >= before.score);
    }

    /// A zero-scored record never changes the verification average.
    #[test]
    fn zero_score_record_is_neutral(records in prop::collection::vec(arb_record(), 0..20)) {
        let before = compute_credibility(&records, &[]);
        let mut more = records.clone();
        more.push(VerificationRecord::new(
            VerificationStatus::Pending,
            Some(0.0),
            Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap(),
        ));
        let after = compute_credibility(&more, &[]);
        prop_assert_eq!(before, after);
    }

    /// Input order does not matter.
    #[test]
    fn order_independent(
        records in prop::collection::vec(arb_record(), 0..20),
        entries in prop::collection::vec(arb_entry(), 0..20),
    ) {
        let forward = compute_credibility(&records, &entries);
        let mut r = records.clone();
        let mut e = entries.clone();
        r.reverse();
        e.reverse();
        let backward = compute_credibility(&r, &e);
        prop_assert_eq!(forward.breakdown, backward.breakdown);
        prop_assert_eq!(forward.grade, backward.grade);
    }
}

#[test]
fn no_input_is_zero_and_d() {
    let r = compute_credibility(&[], &[]);
    assert_eq!(r.score, 0);
    assert_eq!(r.grade, CredibilityGrade::D);
}

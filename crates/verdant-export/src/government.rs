//! # Government Formats
//!
//! Regulatory submission layouts over the audit projection. Each format is
//! a static list of `(header, column)` pairs; rows map one-to-one onto
//! ledger entries and values are copied, never recomputed.
//!
//! | Format | Purpose |
//! |--------|---------|
//! | `BrsrCore` | SEBI BRSR Principle 6 emissions disclosure worksheet |
//! | `CpcbEnvironmentStatement` | CPCB annual environment statement (Form V) annexure |
//! | `GstHsnRegister` | GST HSN/SAC-wise register of emission-bearing purchases |

use serde::{Deserialize, Serialize};

use crate::row::{AuditColumn, AuditRow};

/// Closed set of government export schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernmentFormat {
    BrsrCore,
    CpcbEnvironmentStatement,
    GstHsnRegister,
}

const BRSR_CORE: &[(&str, AuditColumn)] = &[
    ("Financial Year", AuditColumn::FiscalYear),
    ("Quarter", AuditColumn::FiscalQuarter),
    ("Scope", AuditColumn::Scope),
    ("Emission Category", AuditColumn::Category),
    ("Activity Data", AuditColumn::ActivityValue),
    ("Activity Unit", AuditColumn::ActivityUnit),
    ("Emission Factor", AuditColumn::EmissionFactor),
    ("Emission Factor Source", AuditColumn::FactorSource),
    ("Emissions (kg CO2e)", AuditColumn::Co2Kg),
    ("Verification Status", AuditColumn::VerificationStatus),
    ("Framework Reference", AuditColumn::ComplianceIndia),
    ("Document Reference", AuditColumn::DocHash),
];

const CPCB_ENVIRONMENT_STATEMENT: &[(&str, AuditColumn)] = &[
    ("Document Reference", AuditColumn::DocHash),
    ("Date", AuditColumn::InvoiceDate),
    ("Supplier", AuditColumn::Vendor),
    ("Category", AuditColumn::Category),
    ("Quantity", AuditColumn::ActivityValue),
    ("Unit", AuditColumn::ActivityUnit),
    ("Emissions (kg CO2e)", AuditColumn::Co2Kg),
    ("Methodology", AuditColumn::MethodologyVersion),
    ("Validation", AuditColumn::ValidationResult),
    ("Validation Remarks", AuditColumn::ValidationReason),
    ("Greenwashing Risk", AuditColumn::GreenwashingRisk),
];

const GST_HSN_REGISTER: &[(&str, AuditColumn)] = &[
    ("GSTIN", AuditColumn::Gstin),
    ("Invoice Number", AuditColumn::InvoiceNumber),
    ("Invoice Date", AuditColumn::InvoiceDate),
    ("HSN/SAC", AuditColumn::HsnCode),
    ("Supplier", AuditColumn::Vendor),
    ("Invoice Value", AuditColumn::Amount),
    ("Currency", AuditColumn::Currency),
    ("Emission Category", AuditColumn::Category),
    ("Emissions (kg CO2e)", AuditColumn::Co2Kg),
    ("Green Benefit", AuditColumn::IsGreenBenefit),
];

impl GovernmentFormat {
    /// All formats.
    pub const ALL: [GovernmentFormat; 3] = [
        Self::BrsrCore,
        Self::CpcbEnvironmentStatement,
        Self::GstHsnRegister,
    ];

    /// Command-line slug.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BrsrCore => "brsr-core",
            Self::CpcbEnvironmentStatement => "cpcb-environment-statement",
            Self::GstHsnRegister => "gst-hsn-register",
        }
    }

    /// Filename stem for artifacts in this format.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::BrsrCore => "brsr_core",
            Self::CpcbEnvironmentStatement => "cpcb_environment_statement",
            Self::GstHsnRegister => "gst_hsn_register",
        }
    }

    /// Ordered `(header, column)` layout.
    pub fn layout(&self) -> &'static [(&'static str, AuditColumn)] {
        match self {
            Self::BrsrCore => BRSR_CORE,
            Self::CpcbEnvironmentStatement => CPCB_ENVIRONMENT_STATEMENT,
            Self::GstHsnRegister => GST_HSN_REGISTER,
        }
    }

    /// Header row.
    pub fn headers(&self) -> Vec<&'static str> {
        self.layout().iter().map(|(header, _)| *header).collect()
    }

    /// Re-project one audit row into this format's cells.
    pub fn project(&self, row: &AuditRow) -> Vec<String> {
        self.layout().iter().map(|(_, column)| row.cell(*column)).collect()
    }
}

impl std::fmt::Display for GovernmentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use verdant_core::{DocumentFingerprint, EmissionScope, LedgerEntry};

    #[test]
    fn layouts_have_unique_headers() {
        for format in GovernmentFormat::ALL {
            let headers = format.headers();
            let unique: HashSet<_> = headers.iter().collect();
            assert_eq!(unique.len(), headers.len(), "{format}");
        }
    }

    #[test]
    fn every_format_carries_emissions() {
        for format in GovernmentFormat::ALL {
            assert!(
                format.layout().iter().any(|(_, c)| *c == AuditColumn::Co2Kg),
                "{format}"
            );
        }
    }

    #[test]
    fn projection_copies_emission_value() {
        let entry = LedgerEntry::new(
            DocumentFingerprint::of_bytes(b"grid-bill"),
            EmissionScope::Scope2,
            "electricity",
            1_234.56,
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        );
        let row = AuditRow::from_entry(&entry);
        for format in GovernmentFormat::ALL {
            let cells = format.project(&row);
            assert_eq!(cells.len(), format.layout().len());
            let idx = format
                .layout()
                .iter()
                .position(|(_, c)| *c == AuditColumn::Co2Kg)
                .unwrap();
            assert_eq!(cells[idx], "1234.56");
        }
    }

    #[test]
    fn slugs_and_stems_distinct() {
        let slugs: HashSet<_> = GovernmentFormat::ALL.iter().map(|f| f.slug()).collect();
        let stems: HashSet<_> = GovernmentFormat::ALL.iter().map(|f| f.file_stem()).collect();
        assert_eq!(slugs.len(), 3);
        assert_eq!(stems.len(), 3);
    }

    #[test]
    fn serde_format() {
        assert_eq!(
            serde_json::to_string(&GovernmentFormat::CpcbEnvironmentStatement).unwrap(),
            "\"cpcb_environment_statement\""
        );
    }
}

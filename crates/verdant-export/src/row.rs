//! # Audit Row Projection
//!
//! The spreadsheet layout, in column order:
//!
//! | Group | Columns |
//! |-------|---------|
//! | Document | `doc_hash` (first 12 hex characters) |
//! | Invoice | `invoice_number`, `vendor`, `invoice_date`, `amount`, `currency` |
//! | Taxonomy | `green_category`, `hsn_code`, `gstin` |
//! | Emission | `scope`, `category`, `activity_value`, `activity_unit`, `emission_factor`, `factor_source`, `co2_kg`, `is_green_benefit` |
//! | Verification | `confidence`, `verification_score`, `verification_status`, `validation_result`, `validation_reason`, `greenwashing_risk`, `methodology_version`, `created_at`, `verified_at` |
//! | Fiscal | `fiscal_year`, `fiscal_quarter` |
//! | Annotation | `compliance_india`, `compliance_global` |
//!
//! Stored values are copied as-is: scores outside `[0, 1]` are exported
//! unchanged so the ledger can be audited against its source.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use verdant_compliance::{classify_entry, ComplianceLabel, Region};
use verdant_core::LedgerEntry;

/// Hex characters of the document fingerprint kept in the export.
pub const DOC_HASH_PREFIX_LEN: usize = 12;

/// Separator between annotation labels within one cell.
const LABEL_SEPARATOR: &str = "; ";

/// One column of the audit projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditColumn {
    DocHash,
    InvoiceNumber,
    Vendor,
    InvoiceDate,
    Amount,
    Currency,
    GreenCategory,
    HsnCode,
    Gstin,
    Scope,
    Category,
    ActivityValue,
    ActivityUnit,
    EmissionFactor,
    FactorSource,
    Co2Kg,
    IsGreenBenefit,
    Confidence,
    VerificationScore,
    VerificationStatus,
    ValidationResult,
    ValidationReason,
    GreenwashingRisk,
    MethodologyVersion,
    CreatedAt,
    VerifiedAt,
    FiscalYear,
    FiscalQuarter,
    ComplianceIndia,
    ComplianceGlobal,
}

impl AuditColumn {
    /// Every column, in spreadsheet order.
    pub const ALL: [AuditColumn; 30] = [
        Self::DocHash,
        Self::InvoiceNumber,
        Self::Vendor,
        Self::InvoiceDate,
        Self::Amount,
        Self::Currency,
        Self::GreenCategory,
        Self::HsnCode,
        Self::Gstin,
        Self::Scope,
        Self::Category,
        Self::ActivityValue,
        Self::ActivityUnit,
        Self::EmissionFactor,
        Self::FactorSource,
        Self::Co2Kg,
        Self::IsGreenBenefit,
        Self::Confidence,
        Self::VerificationScore,
        Self::VerificationStatus,
        Self::ValidationResult,
        Self::ValidationReason,
        Self::GreenwashingRisk,
        Self::MethodologyVersion,
        Self::CreatedAt,
        Self::VerifiedAt,
        Self::FiscalYear,
        Self::FiscalQuarter,
        Self::ComplianceIndia,
        Self::ComplianceGlobal,
    ];

    /// Spreadsheet header.
    pub fn header(&self) -> &'static str {
        match self {
            Self::DocHash => "doc_hash",
            Self::InvoiceNumber => "invoice_number",
            Self::Vendor => "vendor",
            Self::InvoiceDate => "invoice_date",
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::GreenCategory => "green_category",
            Self::HsnCode => "hsn_code",
            Self::Gstin => "gstin",
            Self::Scope => "scope",
            Self::Category => "category",
            Self::ActivityValue => "activity_value",
            Self::ActivityUnit => "activity_unit",
            Self::EmissionFactor => "emission_factor",
            Self::FactorSource => "factor_source",
            Self::Co2Kg => "co2_kg",
            Self::IsGreenBenefit => "is_green_benefit",
            Self::Confidence => "confidence",
            Self::VerificationScore => "verification_score",
            Self::VerificationStatus => "verification_status",
            Self::ValidationResult => "validation_result",
            Self::ValidationReason => "validation_reason",
            Self::GreenwashingRisk => "greenwashing_risk",
            Self::MethodologyVersion => "methodology_version",
            Self::CreatedAt => "created_at",
            Self::VerifiedAt => "verified_at",
            Self::FiscalYear => "fiscal_year",
            Self::FiscalQuarter => "fiscal_quarter",
            Self::ComplianceIndia => "compliance_india",
            Self::ComplianceGlobal => "compliance_global",
        }
    }
}

/// Flat projection of one ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRow {
    pub doc_hash: String,
    pub invoice_number: Option<String>,
    pub vendor: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub green_category: Option<String>,
    pub hsn_code: Option<String>,
    pub gstin: Option<String>,
    pub scope: u8,
    pub category: String,
    pub activity_value: Option<f64>,
    pub activity_unit: Option<String>,
    pub emission_factor: Option<f64>,
    pub factor_source: Option<String>,
    pub co2_kg: f64,
    pub is_green_benefit: bool,
    pub confidence: Option<f64>,
    pub verification_score: Option<f64>,
    pub verification_status: &'static str,
    pub validation_result: Option<&'static str>,
    pub validation_reason: Option<String>,
    pub greenwashing_risk: Option<&'static str>,
    pub methodology_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
    pub fiscal_year: Option<String>,
    pub fiscal_quarter: Option<String>,
    pub compliance_india: String,
    pub compliance_global: String,
}

impl AuditRow {
    /// Project one entry, annotating it with its compliance labels.
    pub fn from_entry(entry: &LedgerEntry) -> Self {
        let labels = classify_entry(entry).labels;
        let period = entry.fiscal_period();

        Self {
            doc_hash: entry.document_hash.prefix(DOC_HASH_PREFIX_LEN).to_string(),
            invoice_number: entry.invoice_number.clone(),
            vendor: entry.vendor.clone(),
            invoice_date: entry.invoice_date,
            amount: entry.amount,
            currency: entry.currency.clone(),
            green_category: entry.green_category.clone(),
            hsn_code: entry.hsn_code.clone(),
            gstin: entry.gstin.clone(),
            scope: entry.scope.as_u8(),
            category: entry.category.clone(),
            activity_value: entry.activity_value,
            activity_unit: entry.activity_unit.clone(),
            emission_factor: entry.emission_factor,
            factor_source: entry.factor_source.clone(),
            co2_kg: entry.co2_kg,
            is_green_benefit: entry.is_green_benefit,
            confidence: entry.confidence,
            verification_score: entry.verification_score,
            verification_status: entry.verification_status.as_str(),
            validation_result: entry.validation_result.map(|v| v.as_str()),
            validation_reason: entry.validation_reason.clone(),
            greenwashing_risk: entry.greenwashing_risk.map(|r| r.as_str()),
            methodology_version: entry.methodology_version.clone(),
            created_at: entry.created_at,
            verified_at: entry.verified_at,
            fiscal_year: period.map(|p| p.year_label()),
            fiscal_quarter: period.map(|p| format!("Q{}", p.quarter)),
            compliance_india: join_labels(&labels, Region::India),
            compliance_global: join_labels(&labels, Region::Global),
        }
    }

    /// Typed value of one column. Absent values are [`CellValue::Empty`].
    pub fn value(&self, column: AuditColumn) -> CellValue {
        match column {
            AuditColumn::DocHash => CellValue::Text(self.doc_hash.clone()),
            AuditColumn::InvoiceNumber => text(&self.invoice_number),
            AuditColumn::Vendor => text(&self.vendor),
            AuditColumn::InvoiceDate => self
                .invoice_date
                .map_or(CellValue::Empty, |d| CellValue::Text(d.to_string())),
            AuditColumn::Amount => number(self.amount),
            AuditColumn::Currency => text(&self.currency),
            AuditColumn::GreenCategory => text(&self.green_category),
            AuditColumn::HsnCode => text(&self.hsn_code),
            AuditColumn::Gstin => text(&self.gstin),
            AuditColumn::Scope => CellValue::Number(f64::from(self.scope)),
            AuditColumn::Category => CellValue::Text(self.category.clone()),
            AuditColumn::ActivityValue => number(self.activity_value),
            AuditColumn::ActivityUnit => text(&self.activity_unit),
            AuditColumn::EmissionFactor => number(self.emission_factor),
            AuditColumn::FactorSource => text(&self.factor_source),
            AuditColumn::Co2Kg => number(Some(self.co2_kg)),
            AuditColumn::IsGreenBenefit => CellValue::Bool(self.is_green_benefit),
            AuditColumn::Confidence => number(self.confidence),
            AuditColumn::VerificationScore => number(self.verification_score),
            AuditColumn::VerificationStatus => CellValue::Text(self.verification_status.to_string()),
            AuditColumn::ValidationResult => static_text(self.validation_result),
            AuditColumn::ValidationReason => text(&self.validation_reason),
            AuditColumn::GreenwashingRisk => static_text(self.greenwashing_risk),
            AuditColumn::MethodologyVersion => text(&self.methodology_version),
            AuditColumn::CreatedAt => CellValue::Text(timestamp(&self.created_at)),
            AuditColumn::VerifiedAt => self
                .verified_at
                .as_ref()
                .map_or(CellValue::Empty, |ts| CellValue::Text(timestamp(ts))),
            AuditColumn::FiscalYear => text(&self.fiscal_year),
            AuditColumn::FiscalQuarter => text(&self.fiscal_quarter),
            AuditColumn::ComplianceIndia => CellValue::Text(self.compliance_india.clone()),
            AuditColumn::ComplianceGlobal => CellValue::Text(self.compliance_global.clone()),
        }
    }

    /// Render one column as a cell string. Absent values are empty.
    pub fn cell(&self, column: AuditColumn) -> String {
        self.value(column).render()
    }
}

/// A typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    /// Always finite; non-finite numbers are carried as text.
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Plain-text rendering, as written to CSV.
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(v) => v.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

fn text(value: &Option<String>) -> CellValue {
    value.clone().map_or(CellValue::Empty, CellValue::Text)
}

fn static_text(value: Option<&'static str>) -> CellValue {
    value.map_or(CellValue::Empty, |s| CellValue::Text(s.to_string()))
}

fn number(value: Option<f64>) -> CellValue {
    match value {
        Some(v) if v.is_finite() => CellValue::Number(v),
        Some(v) => CellValue::Text(v.to_string()),
        None => CellValue::Empty,
    }
}

fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn join_labels(labels: &[ComplianceLabel], region: Region) -> String {
    labels
        .iter()
        .filter(|l| l.region == region)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// Project every entry, one row each, in input order.
pub fn project_ledger(entries: &[LedgerEntry]) -> Vec<AuditRow> {
    entries.iter().map(AuditRow::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use verdant_core::{
        DocumentFingerprint, EmissionScope, GreenwashingRisk, ValidationResult, VerificationStatus,
    };

    fn sample() -> LedgerEntry {
        let mut e = LedgerEntry::new(
            DocumentFingerprint::of_bytes(b"diesel-invoice.pdf"),
            EmissionScope::Scope1,
            "Fuel",
            268.4,
            Utc.with_ymd_and_hms(2025, 12, 5, 10, 15, 30).unwrap(),
        );
        e.invoice_number = Some("INV-2025-118".into());
        e.vendor = Some("Bharat Fuels".into());
        e.invoice_date = NaiveDate::from_ymd_opt(2025, 12, 2);
        e.amount = Some(9_450.0);
        e.currency = Some("INR".into());
        e.hsn_code = Some("2710".into());
        e.activity_value = Some(100.0);
        e.activity_unit = Some("litre".into());
        e.emission_factor = Some(2.684);
        e.factor_source = Some("IPCC 2006".into());
        e.verification_score = Some(0.92);
        e.verification_status = VerificationStatus::Verified;
        e.validation_result = Some(ValidationResult::Passed);
        e.greenwashing_risk = Some(GreenwashingRisk::Low);
        e.verified_at = Some(Utc.with_ymd_and_hms(2025, 12, 6, 8, 0, 0).unwrap());
        e
    }

    #[test]
    fn headers_unique_and_ordered() {
        let headers: Vec<_> = AuditColumn::ALL.iter().map(AuditColumn::header).collect();
        let unique: HashSet<_> = headers.iter().collect();
        assert_eq!(unique.len(), headers.len());
        assert_eq!(headers[0], "doc_hash");
        assert_eq!(headers[29], "compliance_global");
    }

    #[test]
    fn projection_copies_fields() {
        let e = sample();
        let row = AuditRow::from_entry(&e);
        assert_eq!(row.doc_hash.len(), DOC_HASH_PREFIX_LEN);
        assert!(e.document_hash.as_str().starts_with(&row.doc_hash));
        assert_eq!(row.scope, 1);
        assert_eq!(row.co2_kg, 268.4);
        assert_eq!(row.cell(AuditColumn::InvoiceDate), "2025-12-02");
        assert_eq!(row.cell(AuditColumn::Amount), "9450");
        assert_eq!(row.cell(AuditColumn::Co2Kg), "268.4");
        assert_eq!(row.cell(AuditColumn::VerificationStatus), "verified");
        assert_eq!(row.cell(AuditColumn::ValidationResult), "passed");
        assert_eq!(row.cell(AuditColumn::GreenwashingRisk), "low");
        assert_eq!(row.cell(AuditColumn::CreatedAt), "2025-12-05T10:15:30Z");
        assert_eq!(row.cell(AuditColumn::VerifiedAt), "2025-12-06T08:00:00Z");
        assert_eq!(row.cell(AuditColumn::FiscalYear), "FY2025-26");
        assert_eq!(row.cell(AuditColumn::FiscalQuarter), "Q3");
    }

    #[test]
    fn absent_values_are_empty_cells() {
        let e = LedgerEntry::new(
            DocumentFingerprint::of_bytes(b"blank"),
            EmissionScope::Scope3,
            "",
            0.0,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        );
        let row = AuditRow::from_entry(&e);
        for col in [
            AuditColumn::Vendor,
            AuditColumn::Amount,
            AuditColumn::VerifiedAt,
            AuditColumn::ValidationResult,
            AuditColumn::FiscalYear,
        ] {
            assert_eq!(row.cell(col), "", "{}", col.header());
        }
        assert_eq!(row.cell(AuditColumn::VerificationStatus), "pending");
    }

    #[test]
    fn annotations_split_by_region() {
        let row = AuditRow::from_entry(&sample());
        assert!(row.compliance_india.contains("CPCB: "));
        assert!(row.compliance_india.contains("BRSR: "));
        assert!(!row.compliance_india.contains("GHG Protocol"));
        assert!(row.compliance_global.starts_with("GHG Protocol: "));
        assert!(row.compliance_global.contains("; ISO 14064-1: "));
    }

    #[test]
    fn unknown_category_has_blank_annotations() {
        let mut e = sample();
        e.category = "tea".into();
        let row = AuditRow::from_entry(&e);
        assert_eq!(row.compliance_india, "");
        assert_eq!(row.compliance_global, "");
    }

    #[test]
    fn typed_values_for_workbook() {
        let row = AuditRow::from_entry(&sample());
        assert_eq!(row.value(AuditColumn::Co2Kg), CellValue::Number(268.4));
        assert_eq!(row.value(AuditColumn::Scope), CellValue::Number(1.0));
        assert_eq!(row.value(AuditColumn::IsGreenBenefit), CellValue::Bool(false));
        assert_eq!(row.value(AuditColumn::Confidence), CellValue::Empty);
        assert_eq!(row.value(AuditColumn::Vendor), CellValue::Text("Bharat Fuels".into()));
        assert_eq!(row.cell(AuditColumn::Scope), "1");
    }

    #[test]
    fn non_finite_numbers_become_text() {
        let mut e = sample();
        e.emission_factor = Some(f64::NAN);
        let row = AuditRow::from_entry(&e);
        assert_eq!(row.value(AuditColumn::EmissionFactor), CellValue::Text("NaN".into()));
    }

    #[test]
    fn out_of_range_scores_exported_verbatim() {
        let mut e = sample();
        e.verification_score = Some(1.4);
        let row = AuditRow::from_entry(&e);
        assert_eq!(row.cell(AuditColumn::VerificationScore), "1.4");
    }

    #[test]
    fn project_ledger_keeps_duplicates_and_order() {
        let a = sample();
        let mut b = sample();
        b.document_hash = a.document_hash.clone();
        b.co2_kg = 1.0;
        let rows = project_ledger(&[a.clone(), b, a]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].co2_kg, 268.4);
        assert_eq!(rows[1].co2_kg, 1.0);
        assert_eq!(rows[0].doc_hash, rows[1].doc_hash);
    }
}

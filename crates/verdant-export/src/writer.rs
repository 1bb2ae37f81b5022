//! # Artifact Writer
//!
//! Serializes a projection and names the artifact. The spreadsheet target is
//! an `.xlsx` workbook with typed cells; government formats are CSV. The caller
//! supplies the export date so that output is deterministic for a given
//! snapshot; this crate never reads the clock or touches the filesystem.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use verdant_core::LedgerEntry;

use crate::error::ExportError;
use crate::government::GovernmentFormat;
use crate::row::{project_ledger, AuditColumn, AuditRow, CellValue};

/// Notice returned when there is nothing to export.
pub const EMPTY_LEDGER_NOTICE: &str = "No ledger entries to export";

/// Filename stem of the full spreadsheet export.
const SPREADSHEET_STEM: &str = "carbon_audit_ledger";

/// Worksheet holding the spreadsheet projection.
pub const SPREADSHEET_SHEET: &str = "Audit Ledger";

/// What to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportTarget {
    /// Full audit projection.
    #[default]
    Spreadsheet,
    /// A government re-projection.
    Government(GovernmentFormat),
}

impl ExportTarget {
    /// Slugs accepted by [`FromStr`](std::str::FromStr).
    pub fn slugs() -> Vec<&'static str> {
        std::iter::once("spreadsheet")
            .chain(GovernmentFormat::ALL.iter().map(|f| f.slug()))
            .collect()
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::Spreadsheet => SPREADSHEET_STEM,
            Self::Government(format) => format.file_stem(),
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "xlsx",
            Self::Government(_) => "csv",
        }
    }

    /// Artifact filename for an export on `date`.
    pub fn filename(&self, date: NaiveDate) -> String {
        format!(
            "{}_{}.{}",
            self.file_stem(),
            date.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

impl std::fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spreadsheet => f.write_str("spreadsheet"),
            Self::Government(format) => f.write_str(format.slug()),
        }
    }
}

impl std::str::FromStr for ExportTarget {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        if slug == "spreadsheet" {
            return Ok(Self::Spreadsheet);
        }
        GovernmentFormat::ALL
            .iter()
            .find(|f| f.slug() == slug)
            .map(|f| Self::Government(*f))
            .ok_or_else(|| ExportError::UnknownTarget(s.to_string(), Self::slugs().join(", ")))
    }
}

/// A serialized export ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Data rows written, excluding the header.
    pub row_count: usize,
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(ExportArtifact),
    /// Nothing to export; `notice` is shown to the user.
    Empty { notice: String },
}

/// Export a ledger snapshot to `target`, naming the artifact for `date`.
///
/// # Errors
///
/// Returns [`ExportError`] only if workbook or CSV serialization fails. An
/// empty snapshot yields [`ExportOutcome::Empty`].
pub fn export(
    entries: &[LedgerEntry],
    target: ExportTarget,
    date: NaiveDate,
) -> Result<ExportOutcome, ExportError> {
    if entries.is_empty() {
        tracing::info!(export_target = %target, "export skipped: ledger is empty");
        return Ok(ExportOutcome::Empty {
            notice: EMPTY_LEDGER_NOTICE.to_string(),
        });
    }

    let rows = project_ledger(entries);
    let bytes = match target {
        ExportTarget::Spreadsheet => write_workbook(&rows)?,
        ExportTarget::Government(format) => write_csv(format, &rows)?,
    };

    let artifact = ExportArtifact {
        filename: target.filename(date),
        bytes,
        row_count: rows.len(),
    };
    tracing::info!(
        export_target = %target,
        filename = %artifact.filename,
        rows = artifact.row_count,
        "export written"
    );
    Ok(ExportOutcome::Written(artifact))
}

/// One header row in bold, then one typed row per entry.
fn write_workbook(rows: &[AuditRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SPREADSHEET_SHEET)?;

    for (col, column) in (0u16..).zip(AuditColumn::ALL) {
        sheet.write_string_with_format(0, col, column.header(), &bold)?;
    }
    for (line, row) in (1u32..).zip(rows) {
        for (col, column) in (0u16..).zip(AuditColumn::ALL) {
            match row.value(column) {
                CellValue::Number(v) => {
                    sheet.write_number(line, col, v)?;
                }
                CellValue::Bool(b) => {
                    sheet.write_boolean(line, col, b)?;
                }
                CellValue::Text(s) if !s.is_empty() => {
                    sheet.write_string(line, col, s)?;
                }
                CellValue::Text(_) | CellValue::Empty => {}
            }
        }
    }
    sheet.set_freeze_panes(1, 0)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_csv(format: GovernmentFormat, rows: &[AuditRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(format.headers())?;
    for row in rows {
        writer.write_record(format.project(row))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))
}

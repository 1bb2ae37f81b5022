//! # verdant-export — Audit Ledger Export
//!
//! Flattens a ledger snapshot into tabular artifacts:
//!
//! - **Projection** (`row.rs`): [`AuditRow`], one per entry, with the fixed
//!   ordered [`AuditColumn`] set and compliance annotations.
//! - **Government formats** (`government.rs`): [`GovernmentFormat`], a closed
//!   set of regulatory submission layouts, each a static list of
//!   `(header, column)` pairs over the projection.
//! - **Writer** (`writer.rs`): `.xlsx` workbook for the spreadsheet, CSV for
//!   government formats, artifact naming and the empty-ledger notice.
//!
//! ## Invariants
//!
//! - Entries are never mutated, filtered, reordered or deduplicated; one row
//!   per entry, in input order.
//! - Government formats re-project columns; no emission value is recomputed.
//! - An empty snapshot produces [`ExportOutcome::Empty`], not a file and not
//!   an error.

pub mod error;
pub mod government;
pub mod row;
pub mod writer;

pub use error::ExportError;
pub use government::GovernmentFormat;
pub use row::{project_ledger, AuditColumn, AuditRow, CellValue, DOC_HASH_PREFIX_LEN};
pub use writer::{
    export, ExportArtifact, ExportOutcome, ExportTarget, EMPTY_LEDGER_NOTICE, SPREADSHEET_SHEET,
};

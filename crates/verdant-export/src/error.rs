//! Export failures. Only serialization can fail; an empty ledger is an
//! [`ExportOutcome::Empty`](crate::ExportOutcome::Empty), not an error.

use thiserror::Error;

/// Error produced while serializing an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV record could not be written.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be built or serialized.
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Buffered CSV output could not be flushed.
    #[error("csv flush failed: {0}")]
    Flush(String),

    /// Export target slug not recognized.
    #[error("unknown export target {0:?}; expected one of: {1}")]
    UnknownTarget(String, String),
}

//! Tabular export service: in-memory rows out to `.csv`, `.xlsx`, `.pdf`.
//!
//! DESIGN
//! ======
//! Byte production is pure (`csv`, `rust_xlsxwriter`, `printpdf` drive the
//! formats) so every encoder is host-testable; only [`download::save_file`]
//! touches the browser.

pub mod csv;
pub mod download;
pub mod pdf;
pub mod table;
pub mod xlsx;

use thiserror::Error;

/// Failure while building an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("xlsx: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("pdf: {0}")]
    Pdf(String),

    /// A table with no columns cannot be exported.
    #[error("export table has no columns")]
    NoColumns,
}

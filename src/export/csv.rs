//! CSV encoder: header row from column titles, one record per row.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use serde_json::Value;

use super::ExportError;
use super::table::{Column, cell_text};

/// MIME type for the produced artifact.
pub const MIME: &str = "text/csv;charset=utf-8";

/// Encode the table as CSV bytes.
pub fn to_csv(columns: &[Column], rows: &[Value]) -> Result<Vec<u8>, ExportError> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|c| c.title.as_str()))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| cell_text(c, row)))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

//! XLSX encoder: one styled worksheet via `rust_xlsxwriter`.
//!
//! Styling mirrors the report convention: bold white-on-blue header row,
//! thin borders everywhere, column widths fitted to content and capped.

#[cfg(test)]
#[path = "xlsx_test.rs"]
mod xlsx_test;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use serde_json::Value;

use super::ExportError;
use super::table::{Column, cell_text};

/// MIME type for the produced artifact.
pub const MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADER_FILL: u32 = 0x2F_80ED;
const MIN_COLUMN_WIDTH: f64 = 10.0;
const MAX_COLUMN_WIDTH: f64 = 50.0;

/// Encode the table as a single-sheet workbook.
pub fn to_xlsx(columns: &[Column], rows: &[Value]) -> Result<Vec<u8>, ExportError> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Data")?;

    let mut widths: Vec<f64> = columns
        .iter()
        .map(|c| column_width(c.title.chars().count()))
        .collect();

    for (col, column) in columns.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        worksheet.write_string_with_format(0, col, &column.title, &header_format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = u32::try_from(row_idx + 1).unwrap_or(u32::MAX);
        for (col, column) in columns.iter().enumerate() {
            let text = cell_text(column, row);
            widths[col] = widths[col].max(column_width(text.chars().count()));
            let col = u16::try_from(col).unwrap_or(u16::MAX);
            worksheet.write_string_with_format(excel_row, col, &text, &cell_format)?;
        }
    }

    for (col, width) in widths.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        worksheet.set_column_width(col, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[allow(clippy::cast_precision_loss)]
fn column_width(chars: usize) -> f64 {
    (chars as f64).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

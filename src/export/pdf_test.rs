use super::*;
use crate::export::table::CellKind;
use serde_json::json;

fn columns() -> Vec<Column> {
    vec![
        Column::text("id", "Id"),
        Column::new("amount", "Amount", CellKind::Currency),
        Column::new("status", "Status", CellKind::TransactionStatus),
    ]
}

#[test]
fn report_bytes_start_with_pdf_magic() {
    let rows = vec![json!({"id": 1, "amount": 100000, "status": "COMPLETED"})];
    let bytes = to_pdf("Transaction report", &columns(), &rows).unwrap();
    assert_eq!(&bytes[..5], b"%PDF-");
    assert!(bytes.len() > 500);
}

#[test]
fn long_tables_span_multiple_pages() {
    let rows: Vec<_> = (0..120)
        .map(|i| json!({"id": i, "amount": 1000, "status": "PENDING"}))
        .collect();
    let long = to_pdf("Transaction report", &columns(), &rows).unwrap();
    let short = to_pdf("Transaction report", &columns(), &rows[..1]).unwrap();
    // More pages means a visibly larger document.
    assert!(long.len() > short.len());
    assert_eq!(&long[..5], b"%PDF-");
}

// =============================================================
// Row shading
// =============================================================

#[test]
fn alternate_rows_are_striped_header_is_not_counted() {
    assert!(stripe_fill(0).is_none());
    assert!(stripe_fill(1).is_some());
    assert!(stripe_fill(2).is_none());
    assert!(stripe_fill(3).is_some());
}

// Content streams are plain text, so filled rows show up as `re`
// rectangle operators. Titles and cells below avoid the byte pair.
fn rect_op_count(bytes: &[u8]) -> usize {
    bytes.windows(3).filter(|w| w == b" re").count()
}

#[test]
fn header_row_emits_a_fill_rectangle() {
    let columns = vec![Column::text("name", "Name")];
    let rows = vec![json!({"name": "alpha"})];
    let bytes = to_pdf("User listing", &columns, &rows).unwrap();
    // One unstriped body row: at least the header rectangle.
    assert!(rect_op_count(&bytes) >= 1);
}

#[test]
fn striped_rows_emit_additional_rectangles() {
    let columns = vec![Column::text("name", "Name")];
    let one_row = vec![json!({"name": "u0"})];
    let four_rows: Vec<_> = (0..4).map(|i| json!({"name": format!("u{i}")})).collect();
    let short = to_pdf("User listing", &columns, &one_row).unwrap();
    let long = to_pdf("User listing", &columns, &four_rows).unwrap();
    // Rows 1 and 3 are striped; the header fill is common to both.
    assert_eq!(rect_op_count(&long), rect_op_count(&short) + 2);
}

#[test]
fn no_columns_is_an_error() {
    assert!(matches!(
        to_pdf("Report", &[], &[]),
        Err(ExportError::NoColumns)
    ));
}

#[test]
fn cell_clipping_appends_ellipsis() {
    let clipped = clip_to_width("a very long cell value that cannot fit", 10.0, 10.0);
    assert!(clipped.ends_with('…'));
    assert!(clipped.chars().count() < 40);
}

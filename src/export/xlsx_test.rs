use super::*;
use serde_json::json;

fn columns() -> Vec<Column> {
    vec![
        Column::text("username", "Username"),
        Column::text("email", "Email"),
    ]
}

#[test]
fn workbook_bytes_start_with_zip_magic() {
    let rows = vec![json!({"username": "linh", "email": "linh@example.com"})];
    let bytes = to_xlsx(&columns(), &rows).unwrap();
    // xlsx is a zip container.
    assert_eq!(&bytes[..2], b"PK");
    assert!(bytes.len() > 500);
}

#[test]
fn empty_table_still_produces_a_workbook() {
    let bytes = to_xlsx(&columns(), &[]).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn no_columns_is_an_error() {
    assert!(matches!(to_xlsx(&[], &[]), Err(ExportError::NoColumns)));
}

use super::*;
use crate::export::table::CellKind;
use serde_json::json;

fn user_columns() -> Vec<Column> {
    vec![
        Column::text("username", "Username"),
        Column::text("email", "Email"),
        Column::new("created_at", "Created", CellKind::Date),
    ]
}

#[test]
fn header_then_rows_with_newline_framing() {
    let rows = vec![
        json!({"username": "linh", "email": "linh@example.com", "created_at": "2024-11-19T08:05:00Z"}),
        json!({"username": "minh", "email": "minh@example.com"}),
    ];
    let bytes = to_csv(&user_columns(), &rows).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "Username,Email,Created\n\
         linh,linh@example.com,08:05 19/11/2024\n\
         minh,minh@example.com,\n"
    );
}

#[test]
fn values_with_commas_are_quoted() {
    let columns = vec![Column::text("name", "Name")];
    let rows = vec![json!({"name": "Nguyen, Linh"})];
    let bytes = to_csv(&columns, &rows).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, "Name\n\"Nguyen, Linh\"\n");
}

#[test]
fn empty_rows_still_emit_header() {
    let bytes = to_csv(&user_columns(), &[]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, "Username,Email,Created\n");
}

#[test]
fn no_columns_is_an_error() {
    assert!(matches!(to_csv(&[], &[]), Err(ExportError::NoColumns)));
}

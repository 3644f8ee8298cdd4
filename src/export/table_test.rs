use super::*;
use serde_json::json;

#[test]
fn text_cells_render_without_quotes() {
    let col = Column::text("username", "Username");
    assert_eq!(cell_text(&col, &json!({"username": "linh"})), "linh");
    assert_eq!(cell_text(&col, &json!({"username": 42})), "42");
    assert_eq!(cell_text(&col, &json!({"username": true})), "true");
}

#[test]
fn missing_key_and_null_render_empty() {
    let col = Column::text("username", "Username");
    assert_eq!(cell_text(&col, &json!({})), "");
    assert_eq!(cell_text(&col, &json!({"username": null})), "");
}

#[test]
fn currency_cells_format_as_vnd() {
    let col = Column::new("amount", "Amount", CellKind::Currency);
    assert_eq!(cell_text(&col, &json!({"amount": 1500000})), "1.500.000 ₫");
}

#[test]
fn date_cells_parse_rfc3339() {
    let col = Column::new("created_at", "Created", CellKind::Date);
    let row = json!({"created_at": "2024-11-19T08:05:00Z"});
    assert_eq!(cell_text(&col, &row), "08:05 19/11/2024");
}

#[test]
fn unparseable_date_falls_back_to_raw_text() {
    let col = Column::new("created_at", "Created", CellKind::Date);
    let row = json!({"created_at": "yesterday"});
    assert_eq!(cell_text(&col, &row), "yesterday");
}

#[test]
fn transaction_status_cells_use_labels() {
    let col = Column::new("status", "Status", CellKind::TransactionStatus);
    assert_eq!(cell_text(&col, &json!({"status": "PENDING"})), "Processing");
}

#[test]
fn currency_total_sums_first_currency_column() {
    let columns = vec![
        Column::text("id", "Id"),
        Column::new("amount", "Amount", CellKind::Currency),
    ];
    let rows = vec![
        json!({"id": 1, "amount": 100.0}),
        json!({"id": 2, "amount": 250.5}),
        json!({"id": 3}),
    ];
    assert_eq!(currency_total(&columns, &rows), Some(350.5));
}

#[test]
fn currency_total_is_none_without_currency_column() {
    let columns = vec![Column::text("id", "Id")];
    assert_eq!(currency_total(&columns, &[json!({"id": 1})]), None);
}

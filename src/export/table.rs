//! Column definitions and cell rendering shared by all exporters.
//!
//! Rows are JSON objects so any listing (users, transactions) can be fed
//! to the exporters without a dedicated row struct per report.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::util::format::{format_currency, format_date, transaction_status_label};

/// How a column's raw value is rendered into cell text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Text,
    /// Numeric amount, rendered as VND.
    Currency,
    /// RFC 3339 timestamp, rendered as `HH:MM dd/mm/yyyy`.
    Date,
    /// Transaction status code, rendered as its report label.
    TransactionStatus,
}

/// One export column: the row key it reads and the header it prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub title: String,
    pub kind: CellKind,
}

impl Column {
    #[must_use]
    pub fn text(key: &str, title: &str) -> Self {
        Self::new(key, title, CellKind::Text)
    }

    #[must_use]
    pub fn new(key: &str, title: &str, kind: CellKind) -> Self {
        Self {
            key: key.to_owned(),
            title: title.to_owned(),
            kind,
        }
    }
}

/// Render one cell. Missing keys and JSON nulls become empty cells;
/// unparseable dates fall back to the raw text.
#[must_use]
pub fn cell_text(column: &Column, row: &Value) -> String {
    let raw = row.get(&column.key).unwrap_or(&Value::Null);
    match column.kind {
        CellKind::Text => plain_text(raw),
        CellKind::Currency => raw.as_f64().map_or_else(|| plain_text(raw), format_currency),
        CellKind::Date => match raw.as_str() {
            Some(s) => s
                .parse::<DateTime<Utc>>()
                .map_or_else(|_| s.to_owned(), format_date),
            None => plain_text(raw),
        },
        CellKind::TransactionStatus => match raw.as_str() {
            Some(s) => transaction_status_label(s).to_owned(),
            None => plain_text(raw),
        },
    }
}

/// Sum of the first currency column, used by the PDF report header.
/// `None` when the table has no currency column.
#[must_use]
pub fn currency_total(columns: &[Column], rows: &[Value]) -> Option<f64> {
    let column = columns.iter().find(|c| c.kind == CellKind::Currency)?;
    let total = rows
        .iter()
        .filter_map(|row| row.get(&column.key).and_then(Value::as_f64))
        .sum();
    Some(total)
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

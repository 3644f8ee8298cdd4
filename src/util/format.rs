//! Display formatting for report cells.
//!
//! Amounts are formatted the way the backend reports them: Vietnamese đồng
//! with dot-grouped thousands and no decimal part.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// Format an amount as VND, e.g. `1234567.8` becomes `"1.234.568 ₫"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped} ₫")
    } else {
        format!("{grouped} ₫")
    }
}

/// Format a timestamp as `HH:MM dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%H:%M %d/%m/%Y").to_string()
}

/// Map a transaction status code to its report label. Unknown codes pass
/// through unchanged.
#[must_use]
pub fn transaction_status_label(status: &str) -> &str {
    match status {
        "COMPLETED" => "Completed",
        "PENDING" => "Processing",
        "FAILED" => "Failed",
        other => other,
    }
}

use super::*;
use chrono::TimeZone;

#[test]
fn currency_groups_thousands_with_dots() {
    assert_eq!(format_currency(0.0), "0 ₫");
    assert_eq!(format_currency(999.0), "999 ₫");
    assert_eq!(format_currency(1_000.0), "1.000 ₫");
    assert_eq!(format_currency(1_234_567.0), "1.234.567 ₫");
}

#[test]
fn currency_rounds_fractional_dong() {
    assert_eq!(format_currency(1_234_567.8), "1.234.568 ₫");
}

#[test]
fn currency_keeps_sign_outside_grouping() {
    assert_eq!(format_currency(-1_234_567.0), "-1.234.567 ₫");
}

#[test]
fn date_uses_day_month_year_order() {
    let date = Utc.with_ymd_and_hms(2024, 11, 19, 8, 5, 0).unwrap();
    assert_eq!(format_date(date), "08:05 19/11/2024");
}

#[test]
fn unknown_transaction_status_passes_through() {
    assert_eq!(transaction_status_label("COMPLETED"), "Completed");
    assert_eq!(transaction_status_label("REFUNDED"), "REFUNDED");
}

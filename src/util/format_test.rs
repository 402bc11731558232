use super::*;

// =============================================================
// format_currency
// =============================================================

#[test]
fn format_currency_usd_groups_thousands() {
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(1_234_567.891, "USD"), "$1,234,567.89");
    assert_eq!(format_currency(0.0, "USD"), "$0.00");
}

#[test]
fn format_currency_empty_code_defaults_to_usd() {
    assert_eq!(format_currency(45.5, ""), "$45.50");
}

#[test]
fn format_currency_uses_symbols_for_supported_codes() {
    assert_eq!(format_currency(10.0, "EUR"), "€10.00");
    assert_eq!(format_currency(10.0, "GBP"), "£10.00");
    assert_eq!(format_currency(10.0, "CAD"), "CA$10.00");
    assert_eq!(format_currency(10.0, "AUD"), "A$10.00");
    assert_eq!(format_currency(10.0, "INR"), "₹10.00");
    assert_eq!(format_currency(10.0, "usd"), "$10.00");
}

#[test]
fn format_currency_yen_has_no_fraction() {
    assert_eq!(format_currency(1234.6, "JPY"), "¥1,235");
}

#[test]
fn format_currency_unknown_code_is_prefixed() {
    assert_eq!(format_currency(12.0, "CHF"), "CHF 12.00");
}

#[test]
fn format_currency_negative_and_rounding() {
    assert_eq!(format_currency(-5.0, "USD"), "-$5.00");
    assert_eq!(format_currency(2.675_000_1, "USD"), "$2.68");
    assert_eq!(format_currency(-0.001, "USD"), "$0.00");
}

#[test]
fn format_currency_non_finite_renders_zero() {
    assert_eq!(format_currency(f64::NAN, "USD"), "$0.00");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_renders_short_month() {
    assert_eq!(format_date("2026-01-05"), "Jan 05, 2026");
    assert_eq!(format_date("2026-12-25T10:00:00Z"), "Dec 25, 2026");
}

#[test]
fn format_date_returns_input_when_unparseable() {
    assert_eq!(format_date("someday"), "someday");
}

#[test]
fn format_datetime_includes_clock() {
    assert_eq!(format_datetime("2026-01-25T14:07:00"), "Jan 25, 2026 14:07");
    assert_eq!(format_datetime("2026-01-25T14:07:00Z"), "Jan 25, 2026 14:07");
}

#[test]
fn format_datetime_returns_input_when_unparseable() {
    assert_eq!(format_datetime("2026-01-25"), "2026-01-25");
}

// =============================================================
// File sizes / percentages / rounding
// =============================================================

#[test]
fn format_file_size_picks_units() {
    assert_eq!(format_file_size(512), "512 B");
    assert_eq!(format_file_size(1024), "1.00 KB");
    assert_eq!(format_file_size(1536), "1.50 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
}

#[test]
fn format_percentage_one_decimal() {
    assert_eq!(format_percentage(25.0, 200.0), "12.5");
    assert_eq!(format_percentage(1.0, 3.0), "33.3");
    assert_eq!(format_percentage(5.0, 0.0), "0");
}

#[test]
fn round_cents_rounds_to_two_places() {
    assert!((round_cents(10.456) - 10.46).abs() < 1e-9);
    assert!((round_cents(0.1 + 0.2) - 0.3).abs() < 1e-9);
}

#[test]
fn supported_currencies_are_recognized() {
    assert!(is_supported_currency("JPY"));
    assert!(!is_supported_currency("CHF"));
    assert_eq!(SUPPORTED_CURRENCIES[0].0, DEFAULT_CURRENCY);
}

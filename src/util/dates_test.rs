use super::*;
use time::macros::date;

// =============================================================
// parse_iso_date
// =============================================================

#[test]
fn parse_iso_date_accepts_plain_dates() {
    assert_eq!(parse_iso_date("2026-01-25"), Some(date!(2026 - 01 - 25)));
    assert_eq!(parse_iso_date(" 2026-01-25 "), Some(date!(2026 - 01 - 25)));
}

#[test]
fn parse_iso_date_accepts_datetime_prefix() {
    assert_eq!(parse_iso_date("2026-01-25T12:00:00Z"), Some(date!(2026 - 01 - 25)));
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert_eq!(parse_iso_date(""), None);
    assert_eq!(parse_iso_date("2026-13-01"), None);
    assert_eq!(parse_iso_date("2026-02-30"), None);
    assert_eq!(parse_iso_date("2026-01-25x"), None);
    assert_eq!(parse_iso_date("not a date"), None);
}

// =============================================================
// parse_iso_datetime
// =============================================================

#[test]
fn parse_iso_datetime_handles_offset_and_local_forms() {
    let zulu = parse_iso_datetime("2026-01-25T12:30:00Z").unwrap();
    assert_eq!((zulu.hour(), zulu.minute()), (12, 30));

    let shifted = parse_iso_datetime("2026-01-25T12:30:00+02:00").unwrap();
    assert_eq!((shifted.hour(), shifted.minute()), (10, 30));

    let local = parse_iso_datetime("2026-01-25T08:05:09.123456").unwrap();
    assert_eq!((local.hour(), local.minute(), local.second()), (8, 5, 9));

    let short = parse_iso_datetime("2026-01-25T08:05").unwrap();
    assert_eq!(short.minute(), 5);
}

#[test]
fn parse_iso_datetime_rejects_plain_date() {
    assert!(parse_iso_datetime("2026-01-25").is_none());
}

// =============================================================
// shift_months
// =============================================================

#[test]
fn shift_months_clamps_to_month_end() {
    assert_eq!(shift_months(date!(2026 - 03 - 31), -1), date!(2026 - 02 - 28));
    assert_eq!(shift_months(date!(2024 - 03 - 31), -1), date!(2024 - 02 - 29));
}

#[test]
fn shift_months_crosses_year_boundaries() {
    assert_eq!(shift_months(date!(2026 - 01 - 15), -12), date!(2025 - 01 - 15));
    assert_eq!(shift_months(date!(2026 - 01 - 15), -1), date!(2025 - 12 - 15));
    assert_eq!(shift_months(date!(2025 - 12 - 15), 1), date!(2026 - 01 - 15));
}

// =============================================================
// YearMonth
// =============================================================

#[test]
fn year_month_parses_and_displays_key() {
    let ym = YearMonth::parse("2026-02").unwrap();
    assert_eq!(ym, YearMonth { year: 2026, month: Month::February });
    assert_eq!(ym.to_string(), "2026-02");
}

#[test]
fn year_month_parse_rejects_bad_keys() {
    assert!(YearMonth::parse("2026-2").is_none());
    assert!(YearMonth::parse("2026-13").is_none());
    assert!(YearMonth::parse("202602").is_none());
}

#[test]
fn year_month_bounds() {
    let feb = YearMonth::parse("2024-02").unwrap();
    assert_eq!(feb.first_day(), date!(2024 - 02 - 01));
    assert_eq!(feb.last_day(), date!(2024 - 02 - 29));
    let dec = YearMonth::parse("2025-12").unwrap();
    assert_eq!(dec.last_day(), date!(2025 - 12 - 31));
}

#[test]
fn year_month_arithmetic_wraps_years() {
    let jan = YearMonth::parse("2026-01").unwrap();
    assert_eq!(jan.minus_months(1).to_string(), "2025-12");
    assert_eq!(jan.minus_months(11).to_string(), "2025-02");
    assert_eq!(jan.plus_months(12).to_string(), "2027-01");
}

#[test]
fn year_month_orders_chronologically() {
    let a = YearMonth::parse("2025-12").unwrap();
    let b = YearMonth::parse("2026-01").unwrap();
    assert!(a < b);
}

#[test]
fn year_month_contains_checks_date_month() {
    let jan = YearMonth::parse("2026-01").unwrap();
    assert!(jan.contains("2026-01-01"));
    assert!(jan.contains("2026-01-31"));
    assert!(!jan.contains("2026-02-01"));
    assert!(!jan.contains("garbage"));
}

#[test]
fn year_month_labels() {
    let ym = YearMonth::parse("2026-01").unwrap();
    assert_eq!(ym.short_label(), "Jan 2026");
    assert_eq!(ym.long_label(), "January 2026");
}

#[test]
fn to_iso_pads_components() {
    assert_eq!(to_iso(date!(2026 - 01 - 05)), "2026-01-05");
}

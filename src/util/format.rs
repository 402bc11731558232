//! Display formatting for money, dates, file sizes, and percentages.
//!
//! Output mirrors what an `en-US` browser locale renders, so lists, the
//! dashboard, and receipt metadata all read the same way.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;

use super::dates;

/// Currencies offered by the expense form and filters, with select labels.
pub const SUPPORTED_CURRENCIES: [(&str, &str); 7] = [
    ("USD", "USD - US Dollar"),
    ("EUR", "EUR - Euro"),
    ("GBP", "GBP - British Pound"),
    ("JPY", "JPY - Japanese Yen"),
    ("CAD", "CAD - Canadian Dollar"),
    ("AUD", "AUD - Australian Dollar"),
    ("INR", "INR - Indian Rupee"),
];

pub const DEFAULT_CURRENCY: &str = "USD";

pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES.iter().any(|(c, _)| *c == code)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn fraction_digits(code: &str) -> u32 {
    if code == "JPY" { 0 } else { 2 }
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1000);
        value /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!(",{group:03}"));
        }
    }
    out
}

/// Format an amount in the given ISO currency, e.g. `$1,234.50`, `¥1,235`.
///
/// An empty code formats as USD; codes without a known symbol are used as a
/// prefix (`CHF 12.00`).
pub fn format_currency(amount: f64, code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let code = if code.is_empty() { DEFAULT_CURRENCY.to_owned() } else { code };
    let digits = fraction_digits(&code);
    let factor = 10_u64.pow(digits);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let scaled = if amount.is_finite() { (amount.abs() * factor as f64).round() as u64 } else { 0 };
    let whole = group_thousands(scaled / factor);
    let number = if digits == 0 {
        whole
    } else {
        format!("{whole}.{:0width$}", scaled % factor, width = digits as usize)
    };

    let prefix = currency_symbol(&code).map_or_else(|| format!("{code} "), str::to_owned);
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    format!("{sign}{prefix}{number}")
}

/// Format `yyyy-MM-dd` (or an ISO datetime) as `MMM dd, yyyy`.
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    dates::parse_iso_date(raw)
        .and_then(|d| d.format(format_description!("[month repr:short] [day], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Format an ISO datetime as `MMM dd, yyyy HH:mm` (UTC for offset inputs).
/// Unparseable input is returned unchanged.
pub fn format_datetime(raw: &str) -> String {
    dates::parse_iso_datetime(raw)
        .and_then(|dt| dt.format(format_description!("[month repr:short] [day], [year] [hour]:[minute]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Human-readable file size: bytes below 1 KiB, then KB / MB with two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < KIB * KIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / (KIB * KIB) as f64)
    }
}

/// Share of `total` as a one-decimal percentage string; `"0"` when total is not positive.
pub fn format_percentage(part: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0".to_owned();
    }
    format!("{:.1}", part / total * 100.0)
}

/// Round to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

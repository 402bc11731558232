//! Calendar helpers: ISO parsing, month arithmetic, and month labels.
//!
//! DESIGN
//! ======
//! Expense dates travel as `yyyy-MM-dd` strings. Everything month-shaped
//! (dashboard windows, chart buckets, the month selector) goes through
//! [`YearMonth`] so bucketing and labels agree.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use std::cmp::Ordering;
use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parse `yyyy-MM-dd`, also accepting the date part of an ISO datetime.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let head = raw.get(..10)?;
    if raw.len() > 10 && !matches!(raw.as_bytes()[10], b'T' | b't' | b' ') {
        return None;
    }
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse an ISO datetime with or without offset and fractional seconds.
/// Offset-bearing values are normalized to UTC.
pub fn parse_iso_datetime(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        let utc = dt.to_offset(UtcOffset::UTC);
        return Some(PrimitiveDateTime::new(utc.date(), utc.time()));
    }
    PrimitiveDateTime::parse(
        raw,
        format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    )
    .ok()
}

/// Render a date as `yyyy-MM-dd`.
pub fn to_iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Today's calendar date: the browser's local date, or UTC elsewhere.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let month = Month::try_from(now.get_month() as u8 + 1).unwrap_or(Month::January);
        #[allow(clippy::cast_possible_truncation)]
        let day = now.get_date() as u8;
        Date::from_calendar_date(year, month, day).unwrap_or_else(|_| OffsetDateTime::now_utc().date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// Shift a date by whole months, clamping the day to the target month's
/// length (Mar 31 minus one month is the last day of February).
pub fn shift_months(date: Date, delta: i32) -> Date {
    let target = YearMonth::of(date).plus_months(delta);
    let day = date.day().min(target.last_day().day());
    Date::from_calendar_date(target.year, target.month, day).unwrap_or(date)
}

/// A calendar month, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn of(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Parse a `yyyy-MM` key.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        let year = year.parse::<i32>().ok()?;
        let month = Month::try_from(month.parse::<u8>().ok()?).ok()?;
        Date::from_calendar_date(year, month, 1).ok()?;
        Some(Self { year, month })
    }

    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
    }

    fn from_index(index: i64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let year = index.div_euclid(12) as i32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = Month::try_from(index.rem_euclid(12) as u8 + 1).unwrap_or(Month::January);
        Self { year, month }
    }

    pub fn plus_months(self, delta: i32) -> Self {
        Self::from_index(self.index() + i64::from(delta))
    }

    pub fn minus_months(self, n: u32) -> Self {
        Self::from_index(self.index() - i64::from(n))
    }

    pub fn first_day(self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    pub fn last_day(self) -> Date {
        let first = self.first_day();
        self.plus_months(1).first_day().previous_day().unwrap_or(first)
    }

    /// Whether an ISO date string falls inside this month.
    pub fn contains(self, raw_date: &str) -> bool {
        parse_iso_date(raw_date).is_some_and(|d| YearMonth::of(d) == self)
    }

    /// `Jan 2026`
    pub fn short_label(self) -> String {
        self.first_day()
            .format(format_description!("[month repr:short] [year]"))
            .unwrap_or_else(|_| self.to_string())
    }

    /// `January 2026`
    pub fn long_label(self) -> String {
        self.first_day()
            .format(format_description!("[month repr:long] [year]"))
            .unwrap_or_else(|_| self.to_string())
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

//! Elapsed-time rendering for date-ranged records (experiences, social work).
//!
//! The stored `duration` field is derived, never typed in by the owner: it is
//! recomputed from (`startDate`, `endDate`, `present`) every time a draft is
//! bound and again at submit, so the three fields can never drift apart.

use chrono::{Datelike, NaiveDate};

/// Accepts the two date shapes the forms produce: `YYYY-MM-DD` (day pickers)
/// and `YYYY-MM` (month pickers). Anything else counts as "not set".
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    // Month-granularity input; pin it to the first of the month.
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// The date actually used in duration math: `today` while the record is
/// marked ongoing, the stored end date otherwise.
pub fn effective_end(end: &str, present: bool, today: NaiveDate) -> Option<NaiveDate> {
    if present {
        Some(today)
    } else {
        parse_flexible_date(end)
    }
}

/// Renders `"<years> year <months> month"`, dropping either clause when its
/// count is zero. An unset start, an unset effective end, or an end before
/// the start all yield `""`: the "no duration yet" state, not an error.
///
/// Whole months only: the day-of-month is ignored. That coarseness matches
/// the stored data and is kept on purpose.
pub fn format_span(start: &str, end: &str, present: bool, today: NaiveDate) -> String {
    let Some(start) = parse_flexible_date(start) else {
        return String::new();
    };
    let Some(end) = effective_end(end, present, today) else {
        return String::new();
    };

    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if months < 0 {
        return String::new();
    }

    let years = months / 12;
    let remaining = months % 12;

    match (years, remaining) {
        (0, 0) => String::new(),
        (y, 0) => format!("{y} year"),
        (0, m) => format!("{m} month"),
        (y, m) => format!("{y} year {m} month"),
    }
}

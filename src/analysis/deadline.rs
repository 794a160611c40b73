//! Deadline heuristics
//!
//! Subtask deadlines are spaced backwards from the parent deadline, and
//! free-text answers from the human are parsed into calendar dates with a
//! small set of recognized phrases.

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use tracing::debug;

/// Days of spacing between consecutive subtask deadlines
const SPACING_DAYS: u64 = 3;

/// Fallback horizon when a free-text deadline is unrecognized
const DEFAULT_HORIZON_DAYS: u64 = 14;

/// Numeric `MM/DD` or `MM-DD` pattern
static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})").expect("valid month/day pattern"));

/// Deadline for subtask `index`, spaced back from the parent deadline.
///
/// Earlier subtasks are pushed further back so later subtasks crowd closer
/// to the parent deadline. Returns `None` when the parent has no deadline.
pub fn calculate_deadline(index: usize, parent_deadline: Option<NaiveDate>) -> Option<NaiveDate> {
    let parent = parent_deadline?;
    let offset = (index as u64 + 1) * SPACING_DAYS;
    parent.checked_sub_days(Days::new(offset))
}

/// Interpret a free-text deadline answer relative to `today`.
///
/// Recognized phrases, case-insensitively: "tomorrow", "next week", "end of
/// month", and a numeric `MM/DD` or `MM-DD` pattern (taken in the current
/// year). Anything else falls back to two weeks out; that is the documented
/// default, not an error.
pub fn parse_deadline(today: NaiveDate, text: &str) -> NaiveDate {
    let text = text.to_lowercase();

    if text.contains("tomorrow") {
        return today + Days::new(1);
    }

    if text.contains("next week") {
        return today + Days::new(7);
    }

    if text.contains("end of month") {
        return end_of_month(today);
    }

    if let Some(caps) = MONTH_DAY.captures(&text) {
        let month: u32 = caps[1].parse().unwrap_or(0);
        let day: u32 = caps[2].parse().unwrap_or(0);
        if let Some(date) = NaiveDate::from_ymd_opt(today.year(), month, day) {
            return date;
        }
        // Impossible month/day falls through to the default horizon
        debug!(month, day, "unparseable month/day in deadline answer");
    }

    today + Days::new(DEFAULT_HORIZON_DAYS)
}

/// Last calendar day of the month containing `today`
fn end_of_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_sub_days(Days::new(1)))
        .unwrap_or(today)
}

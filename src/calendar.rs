// 📅 Talking Calendar
// "1987/01/06" → "January 6th 1987"
//
// Fixed layout YYYY/MM/DD, read by character position:
//   [0..4] year (copied as-is)   [5..7] month   [8..] day
//
// The ordinal follows the day text after its first character, not the day
// number, so 11/12/13 come out as "11st", "12nd", "13rd".

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

// ============================================================================
// LOOKUP TABLES
// ============================================================================

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DATE_FORMAT: &str = "%Y/%m/%d";

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// Suffix for a day string, keyed on everything after its first character
pub fn ordinal_suffix(day: &str) -> &'static str {
    let tail: String = day.chars().skip(1).collect();

    match tail.as_str() {
        "1" => "st",
        "2" => "nd",
        "3" => "rd",
        _ => "th",
    }
}

// ============================================================================
// PARSING HELPERS
// ============================================================================

/// Character-based substring; short input yields a shorter (possibly empty) slice
fn substr(text: &str, start: usize, len: Option<usize>) -> String {
    let chars = text.chars().skip(start);
    match len {
        Some(n) => chars.take(n).collect(),
        None => chars.collect(),
    }
}

/// Leading integer of a string: optional sign then digits ("06" → 6, "7x" → 7)
fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

// ============================================================================
// TALKING CALENDAR
// ============================================================================

/// Spell out a `YYYY/MM/DD` date as `"<Month> <Day><Ordinal> <Year>"`
///
/// Nothing is validated: an unknown month or unreadable day leaves an empty
/// token in its place instead of failing.
pub fn talking_calendar(date: &str) -> String {
    let year = substr(date, 0, Some(4));

    let month = leading_integer(&substr(date, 5, Some(2)))
        .and_then(|m| u32::try_from(m).ok())
        .and_then(month_name)
        .unwrap_or_default();

    let day_text = substr(date, 8, None);
    let day = leading_integer(&day_text)
        .map(|d| d.to_string())
        .unwrap_or_default();

    if month.is_empty() || day.is_empty() {
        tracing::debug!(date, "date did not fully parse");
    }

    format!("{} {}{} {}", month, day, ordinal_suffix(&day_text), year)
}

/// Same phrase as [`talking_calendar`], but only for real calendar dates
///
/// The input must be exactly `YYYY/MM/DD` with zero padding.
pub fn talking_calendar_strict(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .with_context(|| format!("Invalid date: {:?} (expected YYYY/MM/DD)", date))?;

    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(anyhow!("Date is not zero-padded YYYY/MM/DD: {:?}", date));
    }

    Ok(talking_calendar(date))
}

// ============================================================================
// TESTS
// ============================================================================

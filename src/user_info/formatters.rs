//! Display formatting for profile and channel statistics.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::user_info::model::Count;

pub const INVALID_NUMBER: &str = "NaN";
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats `count` with en-US thousands separators after integer coercion (see
/// [`Count::to_integer`]). Values that do not coerce render as `NaN`.
pub fn format_number(count: &Count) -> String {
    match count.to_integer() {
        Some(value) => group_thousands(value),
        None => INVALID_NUMBER.to_string(),
    }
}

/// Formats an ISO 8601 date or timestamp as `Month D, YYYY`. Timestamps are read in UTC.
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Leading-integer parse: optional whitespace and sign, then as many digits as present.
pub(crate) fn parse_integer_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.checked_mul(10)?.checked_add(i64::from(byte - b'0'))?;
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

//! Shared numeric and date formatting.
//!
//! Every rounding and display conversion in the crate goes through this
//! module: 2-decimal rounding, percentage rendering, and the forgiving date
//! parsing used wherever backend timestamps are shown.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a missing date or status.
pub const DATE_PLACEHOLDER: &str = "-";

const DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Rounds to 2 decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use evaluation_admin::calculation::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(12345, 3)), Decimal::new(1235, 2)); // 12.345 -> 12.35
/// assert_eq!(round2(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a `0..=1` fraction to a `0..=100` percentage.
pub fn fraction_to_percent(fraction: Decimal) -> Decimal {
    fraction * Decimal::ONE_HUNDRED
}

/// Converts a `0..=100` percentage to a `0..=1` fraction.
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Renders a value with exactly two decimals.
fn two_decimals(value: Decimal) -> String {
    let mut rounded = round2(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a fraction as a percentage.
///
/// # Example
///
/// ```
/// use evaluation_admin::calculation::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(30, 2)), "30.00%");
/// assert_eq!(format_percentage(Decimal::new(1, 0)), "100.00%");
/// ```
pub fn format_percentage(fraction: Decimal) -> String {
    format!("{}%", two_decimals(fraction_to_percent(fraction)))
}

/// Formats a value that is already a percentage.
///
/// ```
/// use evaluation_admin::calculation::format_weight;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_weight(Decimal::new(3333, 2)), "33.33%");
/// ```
pub fn format_weight(percent: Decimal) -> String {
    format!("{}%", two_decimals(percent))
}

/// Formats a score with two decimals.
pub fn format_score(score: Decimal) -> String {
    two_decimals(score)
}

/// Parses a backend timestamp.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`
/// (read as UTC, optional fraction), and bare `YYYY-MM-DD` (midnight UTC).
/// Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn format_with(raw: Option<&str>, pattern: &str) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => DATE_PLACEHOLDER.to_string(),
        Some(value) => parse_timestamp(value)
            .map(|dt| dt.format(pattern).to_string())
            .unwrap_or_else(|| value.to_string()),
    }
}

/// Formats a backend date as `dd/mm/yyyy`.
///
/// Missing input yields [`DATE_PLACEHOLDER`]; unparseable input is returned
/// as-is.
///
/// # Example
///
/// ```
/// use evaluation_admin::calculation::format_date;
///
/// assert_eq!(format_date(Some("2025-01-31")), "31/01/2025");
/// assert_eq!(format_date(Some("next week")), "next week");
/// assert_eq!(format_date(None), "-");
/// ```
pub fn format_date(raw: Option<&str>) -> String {
    format_with(raw, DATE_DISPLAY_FORMAT)
}

/// Formats a backend timestamp as `dd/mm/yyyy HH:MM` (UTC).
pub fn format_date_time(raw: Option<&str>) -> String {
    format_with(raw, DATE_TIME_DISPLAY_FORMAT)
}

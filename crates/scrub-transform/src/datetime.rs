//! Strict date parsing shared by inference, cleaning, features and
//! validation.
//!
//! A value is a date only if it matches one of the fixed formats below
//! exactly — there is no fuzzy parsing. The same list drives both type
//! inference and cleaning so the two can never disagree about what a date
//! looks like.

use chrono::NaiveDate;

/// Accepted input formats, tried in order.
pub const KNOWN_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", // 2023-12-25
    "%Y/%m/%d", // 2023/12/25
    "%Y.%m.%d", // 2023.12.25
    "%d-%m-%Y", // 25-12-2023
    "%m/%d/%Y", // 12/25/2023
    "%d %b %Y", // 25 Dec 2023
];

/// Parse a date string against the fixed format list. Returns `None` for
/// anything that matches no format, including empty input.
pub fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    KNOWN_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Canonical ISO `YYYY-MM-DD` form of a parsed date.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

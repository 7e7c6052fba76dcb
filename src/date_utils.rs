/*!
 * Date parsing and order validation for timeline content.
 *
 * Authored dates are free-form strings (`"2024-03-15"`, `"-500"`,
 * `"300000"`). This module parses them into structured calendar dates,
 * validates them against the real calendar, and compares possibly
 * partial dates without false positives.
 */

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum year that can be displayed in human scale
pub const MIN_HUMAN_SCALE_YEAR: i64 = -271_820;

/// Maximum year that can be displayed in human scale
pub const MAX_HUMAN_SCALE_YEAR: i64 = 275_759;

/// Date-string grammar: optional leading `-`, year digits, then optional
/// month and day groups of one or two digits.
static DATE_STRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(-\d{1,2})?(-\d{1,2})?$").unwrap()
});

/// A structured calendar date as the rendering widget expects it.
///
/// Years may be negative (BCE). Month and day are optional and only
/// meaningful together with the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDate {
    /// Calendar year, negative for BCE
    pub year: i64,

    /// Month of year (1-12) when authored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Day of month when authored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl TimelineDate {
    /// Creates a date with all components given
    pub fn new(year: i64, month: Option<u32>, day: Option<u32>) -> Self {
        TimelineDate { year, month, day }
    }

    /// Creates a year-only date
    pub fn from_year(year: i64) -> Self {
        TimelineDate {
            year,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for TimelineDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
            if let Some(day) = self.day {
                write!(f, "-{:02}", day)?;
            }
        }
        Ok(())
    }
}

/// Check whether a string matches the date grammar
pub fn is_date_string(input: &str) -> bool {
    DATE_STRING_REGEX.is_match(input)
}

/// Parse a date string into a structured date, or `None` when the string
/// does not match the grammar or names an impossible calendar date.
///
/// Years outside the human-scale range cannot be validated by the
/// calendar engine and are presumed valid; the builder later forces
/// cosmological scale for them.
pub fn parse_date(input: &str) -> Option<TimelineDate> {
    if !is_date_string(input) {
        return None;
    }

    let date = parse_date_string(input)?;

    if !is_date_valid(&date) {
        return None;
    }

    Some(date)
}

/// Split a grammar-conforming string into its numeric components
fn parse_date_string(input: &str) -> Option<TimelineDate> {
    let is_negative_year = input.starts_with('-');
    let unsigned = if is_negative_year { &input[1..] } else { input };

    let mut parts = unsigned.split('-');

    let year: i64 = parts.next()?.parse().ok()?;
    let year = if is_negative_year { -year } else { year };

    let month = match parts.next() {
        Some(part) => Some(part.parse::<u32>().ok()?),
        None => None,
    };
    let day = match parts.next() {
        Some(part) => Some(part.parse::<u32>().ok()?),
        None => None,
    };

    Some(TimelineDate { year, month, day })
}

/// Reconstruct the expanded-year ISO 8601 form of a date
/// (`±YYYYYY-MM-DDT00:00:00Z`), month and day defaulting to 1.
///
/// Rendering widgets embedded in browsers need this form because plain
/// date strings with negative years are not portable across engines.
pub fn to_expanded_iso8601(date: &TimelineDate) -> String {
    let year = if date.year < 0 {
        format!("-{:06}", -date.year)
    } else {
        format!("+{:06}", date.year)
    };
    let month = date.month.unwrap_or(1);
    let day = date.day.unwrap_or(1);

    format!("{}-{:02}-{:02}T00:00:00Z", year, month, day)
}

/// Check that a parsed date names a real calendar date.
///
/// Years outside `[MIN_HUMAN_SCALE_YEAR, MAX_HUMAN_SCALE_YEAR]` are
/// always treated as valid: the date engine cannot represent them, so
/// they are deferred to cosmological scale instead of being rejected.
fn is_date_valid(date: &TimelineDate) -> bool {
    if date.year < MIN_HUMAN_SCALE_YEAR || date.year > MAX_HUMAN_SCALE_YEAR {
        // Will require enforcing a scale of "cosmological"
        return true;
    }

    let month = date.month.unwrap_or(1);
    let day = date.day.unwrap_or(1);

    NaiveDate::from_ymd_opt(calendar_proxy_year(date.year), month, day).is_some()
}

/// Year handed to the calendar engine for validity checks.
///
/// chrono cannot represent every year inside the human-scale range, so
/// years beyond its limits are substituted with a year of identical
/// Gregorian leap status (the leap pattern repeats every 400 years).
fn calendar_proxy_year(year: i64) -> i32 {
    if (-262_000..=262_000).contains(&year) {
        year as i32
    } else {
        (2000 + year.rem_euclid(400)) as i32
    }
}

/// Check that a start date does not come after an end date.
///
/// Missing components are substituted with the most permissive extreme
/// (absent start fields compare earliest, absent end fields latest) so
/// partial dates never trigger false positives. Never fails; callers
/// emit a non-fatal diagnostic when the order is violated.
pub fn is_date_order_ok(
    start_date: Option<&TimelineDate>,
    end_date: Option<&TimelineDate>,
) -> bool {
    fn sort_key(date: Option<&TimelineDate>, missing: i64) -> (i64, i64, i64) {
        match date {
            Some(date) => (
                date.year,
                date.month.map_or(missing, i64::from),
                date.day.map_or(missing, i64::from),
            ),
            None => (missing, missing, missing),
        }
    }

    sort_key(start_date, i64::MIN) <= sort_key(end_date, i64::MAX)
}

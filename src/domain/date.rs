//! `MM-DD-YY` transaction date validation and normalization.
//!
//! Validation is deliberately permissive: month and day are range-checked
//! independently, with no month-length or leap-year awareness, so
//! `"02-30-24"` is accepted. Two-digit years always map to the 2000s.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Century prefix applied to every two-digit year.
pub const CENTURY_PREFIX: &str = "20";

static DATE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{2})$").ok());

/// Splits a date string into its `(MM, DD, YY)` parts if it matches the
/// pattern exactly. No range checks.
fn split_parts(s: &str) -> Option<(&str, &str, &str)> {
    let caps = DATE_PATTERN.as_ref()?.captures(s)?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ))
}

/// Returns `true` if `s` is a valid `MM-DD-YY` date with month in `1..=12`
/// and day in `1..=31`.
#[must_use]
pub fn is_valid_date(s: &str) -> bool {
    let Some((mm, dd, _)) = split_parts(s) else {
        return false;
    };
    let (Ok(month), Ok(day)) = (mm.parse::<u8>(), dd.parse::<u8>()) else {
        return false;
    };
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// JSON-level variant of [`is_valid_date`]: anything other than a string
/// (null, numbers, objects, a missing field) is invalid.
#[must_use]
pub fn is_valid_date_value(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if is_valid_date(s))
}

/// Converts a valid `MM-DD-YY` date into ISO `20YY-MM-DD`.
///
/// Returns `None` when [`is_valid_date`] rejects the input.
#[must_use]
pub fn format_date(s: &str) -> Option<String> {
    if !is_valid_date(s) {
        return None;
    }
    let (mm, dd, yy) = split_parts(s)?;
    Some(format!("{CENTURY_PREFIX}{yy}-{mm}-{dd}"))
}

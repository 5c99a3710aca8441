//! Field access on raw transaction records.
//!
//! Records are opaque JSON values. Only three fields are read, and every
//! read tolerates absence and malformed content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Transaction date field, expected as `MM-DD-YY`.
pub const DATE_FIELD: &str = "DATE";

/// Pre-assigned month label field (e.g. `"Jan-22"`).
pub const MONTH_FIELD: &str = "Months";

/// Gross monetary amount field, string or number.
pub const AMOUNT_FIELD: &str = "GROSS AMT";

static NUMERIC_PREFIX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").ok()
});

/// Returns the value of `field` if `record` is a JSON object carrying it.
#[must_use]
pub fn field<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    record.as_object()?.get(field)
}

/// Parses the leading floating-point number of `s`, ignoring leading
/// whitespace and any trailing garbage (`"12.5 USD"` → `12.5`).
#[must_use]
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let m = NUMERIC_PREFIX.as_ref()?.find(trimmed)?;
    m.as_str().parse::<f64>().ok()
}

/// Monetary contribution of a single amount value.
///
/// Missing, unparseable, non-finite, and non-scalar values contribute `0.0`.
/// Negative zero is normalized to `0.0`.
#[must_use]
pub fn parse_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::String(s)) => parse_float_prefix(s),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v != 0.0).unwrap_or(0.0)
}

/// Amount of a record's `GROSS AMT` field (see [`parse_amount`]).
#[must_use]
pub fn gross_amount(record: &Value) -> f64 {
    parse_amount(field(record, AMOUNT_FIELD))
}

/// Stringifies a field value into a bucket key.
///
/// Returns `None` for null, which never forms a bucket.
#[must_use]
pub fn group_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_key(n)),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| group_key(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

fn number_key(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

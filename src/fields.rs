//! Field coercion shared by the tournament and hand parsers. A bad value never
//! fails a record; it falls back to the field's default.

use crate::models::UNKNOWN;

pub fn safe_int(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

pub fn safe_float(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Owned text, or `"Unknown"` when absent.
pub fn text_or_unknown(raw: Option<&str>) -> String {
    raw.unwrap_or(UNKNOWN).to_string()
}

/// Split a `cards` entry into card codes.
pub fn split_cards(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

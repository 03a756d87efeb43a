// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display formatting for inspector rows.

use serde_json::Value;

/// Placeholder shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Formats a Unix timestamp in milliseconds as a 24-hour `HH:MM:SS` time of day (UTC).
#[must_use]
pub fn format_time_of_day(date_ms: u64) -> String {
    let seconds = (date_ms % MILLIS_PER_DAY) / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

/// Formats a byte count as kilobytes, or megabytes from 1024 KB upward.
#[must_use]
pub fn format_size(bytes: usize) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.2} KB")
    } else {
        format!("{:.2} MB", kb / 1024.0)
    }
}

/// Drops the scheme from a URL for compact display.
///
/// Missing or empty URLs become [`NOT_AVAILABLE`]; URLs without a scheme, or
/// with nothing after it, are returned unchanged.
#[must_use]
pub fn shorten_url(url: Option<&str>) -> &str {
    match url {
        None | Some("") => NOT_AVAILABLE,
        Some(url) => url
            .split("://")
            .nth(1)
            .filter(|rest| !rest.is_empty())
            .unwrap_or(url),
    }
}

/// Size of `payload` encoded as compact JSON, in bytes.
#[must_use]
pub fn payload_size(payload: &Value) -> usize {
    payload.to_string().len()
}

/// Returns `false` for `null`, `false`, `0`, and `""`; `true` otherwise.
///
/// Empty objects and arrays count as present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a scalar JSON value as display text, or `None` if it is not truthy.
#[must_use]
pub fn display_value(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    Some(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

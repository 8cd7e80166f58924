//! Date string normalisation to ISO 8601

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Naive date-time layouts tried by the generic parser.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts tried by the generic parser; times default to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y"];

const NAIVE_OUTPUT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const AWARE_OUTPUT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Return `date_string` in ISO 8601 format.
///
/// When `format` is supplied it is tried first; if it fails a warning is
/// logged and the generic parser is tried instead. The returned flag reports
/// whether the supplied format failed:
///
/// | result | flag | meaning |
/// |---|---|---|
/// | `Some` | `false` | format (or generic parser, when no format) succeeded |
/// | `Some` | `true` | format failed, generic parser succeeded |
/// | `None` | `true` | format and generic parser both failed |
/// | `None` | `false` | no format given and the generic parser failed |
pub fn isoformat_date(date_string: &str, format: Option<&str>) -> (Option<String>, bool) {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        let output = parse_generic(date_string);
        if output.is_none() {
            tracing::error!("Error parsing {} with generic date parser", date_string);
        }
        return (output, false);
    };

    if let Some(output) = parse_with_format(date_string, format) {
        return (Some(output), false);
    }

    tracing::warn!(
        "Could not parse {} with format {}. Trying generic date parser...",
        date_string,
        format
    );

    let output = parse_generic(date_string);
    if output.is_none() {
        tracing::error!("Error parsing {} with generic date parser", date_string);
    }
    (output, true)
}

/// Parse using one explicit strftime-style format.
pub fn parse_with_format(date_string: &str, format: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_str(date_string, format) {
        return Some(dt.format(AWARE_OUTPUT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_string, format) {
        return Some(dt.format(NAIVE_OUTPUT).to_string());
    }
    NaiveDate::parse_from_str(date_string, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.format(NAIVE_OUTPUT).to_string())
}

/// Parse RFC 3339 and a set of common date and date-time layouts.
pub fn parse_generic(date_string: &str) -> Option<String> {
    let trimmed = date_string.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.format(AWARE_OUTPUT).to_string());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|dt| dt.format(NAIVE_OUTPUT).to_string())
}
